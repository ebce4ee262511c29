use super::nesting::can_nest;
use super::{AttributeValue, InboundXmlError};

define_wire_enum! {
    /// Element name of every InboundXML node.
    pub enum Tag {
        Response => "Response",
        Say => "Say",
        Play => "Play",
        Pause => "Pause",
        PlayLastRecording => "PlayLastRecording",
        Gather => "Gather",
        Record => "Record",
        Dial => "Dial",
        Conference => "Conference",
        Number => "Number",
        Sip => "Sip",
        User => "User",
        Agent => "Agent",
        Hangup => "Hangup",
        Reject => "Reject",
        Redirect => "Redirect",
        Refer => "Refer",
        Connect => "Connect",
        Sms => "Sms",
        Mms => "Mms",
        Ping => "Ping",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One element of an InboundXML document.
///
/// Attributes are kept as wire strings in insertion order. Children can only be
/// appended; nothing already attached is ever removed or replaced.
pub struct Node {
    tag: Tag,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Node>,
}

impl Node {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Element name; fixed at construction.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Raw attribute value, or `None` if it was never set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All set attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Store a raw attribute value.
    ///
    /// Setting an existing name overwrites the value without moving it.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Parse an attribute as `T`; `None` if absent or malformed.
    pub fn typed_attribute<T: AttributeValue>(&self, name: &str) -> Option<T> {
        self.attribute(name).and_then(T::from_attribute)
    }

    /// Parse an attribute as `T`, falling back to `default` if absent or malformed.
    pub fn typed_attribute_or<T: AttributeValue>(&self, name: &str, default: T) -> T {
        self.typed_attribute(name).unwrap_or(default)
    }

    /// Store the wire form of a typed value.
    pub fn set_typed_attribute<T: AttributeValue>(&mut self, name: &str, value: T) {
        self.set_attribute(name, value.to_attribute());
    }

    pub(crate) fn set_optional<T: AttributeValue>(&mut self, name: &str, value: Option<T>) {
        if let Some(value) = value {
            self.set_typed_attribute(name, value);
        }
    }

    /// Inner text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the inner text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Child elements in attachment order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child after checking the nesting relation at runtime.
    ///
    /// Fails without modifying `self` when `child` may not appear inside this
    /// element. Prefer the typed builder, which rejects the same cases at
    /// compile time.
    pub fn try_append_child(&mut self, child: Node) -> Result<(), InboundXmlError> {
        if !can_nest(self.tag, child.tag) {
            return Err(InboundXmlError::IllegalNesting {
                parent: self.tag,
                child: child.tag,
            });
        }
        self.children.push(child);
        Ok(())
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        debug_assert!(can_nest(self.tag, child.tag));
        self.children.push(child);
    }
}
