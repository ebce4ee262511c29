//! Compile-time nesting rules and the builder handles that enforce them.
//!
//! A handle implements [`Scope`] and is positioned inside one parent element.
//! Every attach operation is bounded by `Self::Parent: CanNest<Verb>`, so a
//! chain that puts a verb somewhere the platform does not accept it fails to
//! type-check.

use super::verbs::{
    Agent, Conference, ConferenceOptions, Connect, ConnectOptions, Dial, DialOptions, Gather,
    GatherOptions, Hangup, HangupOptions, Mms, MmsOptions, Number, NumberOptions, Pause,
    PauseOptions, Ping, PingOptions, Play, PlayLastRecording, PlayOptions, Record, RecordOptions,
    Redirect, RedirectOptions, Refer, ReferOptions, Reject, RejectOptions, Say, SayOptions, Sip,
    SipOptions, Sms, SmsOptions, User, UserOptions,
};
use super::{Node, Response, Tag};

/// A typed wrapper around one [`Node`].
///
/// Sealed: only the verbs of this crate and [`Response`] implement it, so
/// [`Parent`] and [`CanNest`] cannot be extended from outside either.
pub trait Element: sealed::SealedElement + Sized {
    /// Tag of the wrapped node.
    const TAG: Tag;

    fn node(&self) -> &Node;

    /// Raw access to the wrapped node's attributes and text.
    fn node_mut(&mut self) -> &mut Node;

    fn into_node(self) -> Node;
}

/// Marker for elements that accept children.
pub trait Parent: Element {}

/// `Self` may contain `Child` as a direct child.
pub trait CanNest<Child: Element>: Parent {}

nesting_rules! {
    Response => [
        Say, Play, Pause, PlayLastRecording, Gather, Record, Dial, Hangup, Reject, Redirect,
        Refer, Connect, Sms, Mms, Ping,
    ],
    Gather => [Say, Play, Pause],
    Dial => [Conference, Number, Sip, User, Agent],
    Refer => [Sip],
    Connect => [Agent],
}

pub(crate) mod sealed {
    use crate::inboundxml::Node;

    pub trait Sealed {
        fn append(&mut self, node: Node);
    }

    pub trait SealedElement {}
}

/// A builder handle positioned inside an element of type [`Scope::Parent`].
///
/// Leaf attaches return the same handle; attaching a verb that accepts
/// children returns a [`Nested`] handle positioned inside it.
pub trait Scope: sealed::Sealed + Sized {
    /// Element the next attached verb becomes a child of.
    type Parent: Parent;

    /// Append any verb that may appear here.
    fn push<V: Element>(mut self, verb: V) -> Self
    where
        Self::Parent: CanNest<V>,
    {
        self.append(verb.into_node());
        self
    }

    /// Append `verb` and continue inside it.
    fn open<V: Parent>(self, verb: V) -> Nested<V, Self>
    where
        Self::Parent: CanNest<V>,
    {
        Nested {
            parent: verb,
            up: self,
        }
    }

    fn say(self, text: impl Into<String>, options: SayOptions) -> Self
    where
        Self::Parent: CanNest<Say>,
    {
        self.push(Say::new(text, options))
    }

    fn play(self, url: impl Into<String>, options: PlayOptions) -> Self
    where
        Self::Parent: CanNest<Play>,
    {
        self.push(Play::new(url, options))
    }

    fn play_tone_stream(self, tones: impl Into<String>, options: PlayOptions) -> Self
    where
        Self::Parent: CanNest<Play>,
    {
        self.push(Play::tone_stream(tones, options))
    }

    fn pause(self, options: PauseOptions) -> Self
    where
        Self::Parent: CanNest<Pause>,
    {
        self.push(Pause::new(options))
    }

    fn play_last_recording(self) -> Self
    where
        Self::Parent: CanNest<PlayLastRecording>,
    {
        self.push(PlayLastRecording::new())
    }

    fn gather(self, options: GatherOptions) -> Nested<Gather, Self>
    where
        Self::Parent: CanNest<Gather>,
    {
        self.open(Gather::new(options))
    }

    fn record(self, options: RecordOptions) -> Self
    where
        Self::Parent: CanNest<Record>,
    {
        self.push(Record::new(options))
    }

    fn dial(self, options: DialOptions) -> Nested<Dial, Self>
    where
        Self::Parent: CanNest<Dial>,
    {
        self.open(Dial::new(options))
    }

    /// `<Dial>` with the number as its text instead of a nested noun.
    fn dial_to(self, number: impl Into<String>, options: DialOptions) -> Self
    where
        Self::Parent: CanNest<Dial>,
    {
        self.push(Dial::to(number, options))
    }

    fn conference(self, room: impl Into<String>, options: ConferenceOptions) -> Self
    where
        Self::Parent: CanNest<Conference>,
    {
        self.push(Conference::new(room, options))
    }

    fn number(self, number: impl Into<String>, options: NumberOptions) -> Self
    where
        Self::Parent: CanNest<Number>,
    {
        self.push(Number::new(number, options))
    }

    fn sip(self, uri: impl Into<String>, options: SipOptions) -> Self
    where
        Self::Parent: CanNest<Sip>,
    {
        self.push(Sip::new(uri, options))
    }

    fn user(self, user: impl Into<String>, options: UserOptions) -> Self
    where
        Self::Parent: CanNest<User>,
    {
        self.push(User::new(user, options))
    }

    fn agent(self, agent_id: impl Into<String>) -> Self
    where
        Self::Parent: CanNest<Agent>,
    {
        self.push(Agent::new(agent_id))
    }

    fn hangup(self, options: HangupOptions) -> Self
    where
        Self::Parent: CanNest<Hangup>,
    {
        self.push(Hangup::new(options))
    }

    fn reject(self, options: RejectOptions) -> Self
    where
        Self::Parent: CanNest<Reject>,
    {
        self.push(Reject::new(options))
    }

    fn redirect(self, url: impl Into<String>, options: RedirectOptions) -> Self
    where
        Self::Parent: CanNest<Redirect>,
    {
        self.push(Redirect::new(url, options))
    }

    fn refer(self, options: ReferOptions) -> Nested<Refer, Self>
    where
        Self::Parent: CanNest<Refer>,
    {
        self.open(Refer::new(options))
    }

    /// `<Refer>` with the address as its text instead of a nested `<Sip>`.
    fn refer_to(self, address: impl Into<String>, options: ReferOptions) -> Self
    where
        Self::Parent: CanNest<Refer>,
    {
        self.push(Refer::to(address, options))
    }

    fn connect(self, options: ConnectOptions) -> Nested<Connect, Self>
    where
        Self::Parent: CanNest<Connect>,
    {
        self.open(Connect::new(options))
    }

    fn sms(self, body: impl Into<String>, options: SmsOptions) -> Self
    where
        Self::Parent: CanNest<Sms>,
    {
        self.push(Sms::new(body, options))
    }

    fn mms(self, body: impl Into<String>, options: MmsOptions) -> Self
    where
        Self::Parent: CanNest<Mms>,
    {
        self.push(Mms::new(body, options))
    }

    fn ping(self, url: impl Into<String>, options: PingOptions) -> Self
    where
        Self::Parent: CanNest<Ping>,
    {
        self.push(Ping::new(url, options))
    }
}

#[derive(Debug)]
/// Handle positioned inside `P`, which will be attached to `Up` by [`Nested::end`].
pub struct Nested<P, Up> {
    parent: P,
    up: Up,
}

impl<P: Parent, Up: Scope> Nested<P, Up> {
    /// Attach the finished `P` to the enclosing scope and return to it.
    pub fn end(self) -> Up {
        let mut up = self.up;
        up.append(self.parent.into_node());
        up
    }

    /// The element being filled.
    pub fn element(&self) -> &P {
        &self.parent
    }

    /// Adjust the element's attributes after opening it.
    pub fn element_mut(&mut self) -> &mut P {
        &mut self.parent
    }
}

impl<P: Parent, Up: Scope> sealed::Sealed for Nested<P, Up> {
    fn append(&mut self, node: Node) {
        self.parent.node_mut().push_child(node);
    }
}

impl<P: Parent, Up: Scope> Scope for Nested<P, Up> {
    type Parent = P;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_table_matches_platform_rules() {
        assert!(can_nest(Tag::Response, Tag::Dial));
        assert!(can_nest(Tag::Response, Tag::Gather));
        assert!(can_nest(Tag::Gather, Tag::Say));
        assert!(can_nest(Tag::Gather, Tag::Pause));
        assert!(can_nest(Tag::Dial, Tag::Conference));
        assert!(can_nest(Tag::Refer, Tag::Sip));
        assert!(can_nest(Tag::Connect, Tag::Agent));

        assert!(!can_nest(Tag::Response, Tag::Conference));
        assert!(!can_nest(Tag::Response, Tag::Number));
        assert!(!can_nest(Tag::Response, Tag::Response));
        assert!(!can_nest(Tag::Gather, Tag::Record));
        assert!(!can_nest(Tag::Gather, Tag::Gather));
        assert!(!can_nest(Tag::Dial, Tag::Say));
        assert!(!can_nest(Tag::Refer, Tag::Number));
    }

    #[test]
    fn only_parents_accept_children() {
        let parents = Tag::ALL
            .iter()
            .copied()
            .filter(|tag| is_parent(*tag))
            .collect::<Vec<_>>();
        assert_eq!(
            parents,
            vec![Tag::Response, Tag::Gather, Tag::Dial, Tag::Refer, Tag::Connect]
        );

        for parent in Tag::ALL {
            if is_parent(*parent) {
                continue;
            }
            for child in Tag::ALL {
                assert!(!can_nest(*parent, *child), "{parent} accepted {child}");
            }
        }
    }

    #[test]
    fn element_tags_match_their_types() {
        assert_eq!(<Say as Element>::TAG, Tag::Say);
        assert_eq!(<Response as Element>::TAG, Tag::Response);
        assert_eq!(<PlayLastRecording as Element>::TAG, Tag::PlayLastRecording);
    }

    #[test]
    fn nested_element_can_be_adjusted_before_end() {
        let mut gather = Response::builder().gather(GatherOptions::default());
        gather.element_mut().set_num_digits(4);
        assert_eq!(gather.element().num_digits(), Some(4));

        let response = gather.say("Enter your PIN", SayOptions::default()).end().build();
        let gather = &response.node().children()[0];
        assert_eq!(gather.attribute("numDigits"), Some("4"));
        assert_eq!(gather.children()[0].tag(), Tag::Say);
    }
}
