//! InboundXML: the XML documents a webhook returns to steer a live call.
//!
//! Documents are built with a typed chain that starts at [`Response::builder`].
//! Each step returns a handle that only offers the verbs allowed at that
//! position, so the nesting rules of the platform are checked by the compiler:
//!
//! ```rust
//! use zang::inboundxml::{
//!     ConferenceOptions, DialOptions, HttpMethod, MaxParticipants, Response, Scope,
//! };
//!
//! # fn main() -> Result<(), zang::inboundxml::InboundXmlError> {
//! let xml = Response::builder()
//!     .dial(DialOptions {
//!         method: Some(HttpMethod::Post),
//!         ..Default::default()
//!     })
//!     .conference(
//!         "room42",
//!         ConferenceOptions {
//!             muted: Some(true),
//!             max_participants: Some(MaxParticipants::new(10)?),
//!             ..Default::default()
//!         },
//!     )
//!     .end()
//!     .build()
//!     .to_xml_string()?;
//!
//! assert_eq!(
//!     xml,
//!     r#"<Response><Dial method="POST"><Conference muted="true" maxParticipants="10">room42</Conference></Dial></Response>"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Putting a verb where the platform does not accept it does not compile:
//!
//! ```compile_fail
//! use zang::inboundxml::{ConferenceOptions, Response, Scope};
//!
//! // <Conference> is only valid inside <Dial>.
//! let _ = Response::builder().conference("room42", ConferenceOptions::default());
//! ```
//!
//! ```compile_fail
//! use zang::inboundxml::{GatherOptions, RecordOptions, Response, Scope};
//!
//! // <Gather> only accepts <Say>, <Play> and <Pause>.
//! let _ = Response::builder()
//!     .gather(GatherOptions::default())
//!     .record(RecordOptions::default());
//! ```
//!
//! The nesting relation is closed. Types outside this crate cannot become
//! elements, so they cannot be attached anywhere:
//!
//! ```compile_fail
//! use zang::inboundxml::{CanNest, Element, Node, Response, Scope, Tag};
//!
//! struct Impostor(Node);
//!
//! impl Element for Impostor {
//!     const TAG: Tag = Tag::Say;
//!
//!     fn node(&self) -> &Node {
//!         &self.0
//!     }
//!
//!     fn node_mut(&mut self) -> &mut Node {
//!         &mut self.0
//!     }
//!
//!     fn into_node(self) -> Node {
//!         self.0
//!     }
//! }
//!
//! impl CanNest<Impostor> for Response {}
//!
//! let _ = Response::builder().push(Impostor(Node::new(Tag::Conference)));
//! ```
//!
//! Attributes that are never set are left out of the document; the typed
//! getters on each verb report the platform default for them instead.

#[macro_use]
mod macros;

mod attribute;
mod error;
mod nesting;
mod node;
mod response;
mod values;
mod verbs;
mod writer;

pub use attribute::AttributeValue;
pub use error::InboundXmlError;
pub use nesting::{CanNest, Element, Nested, Parent, Scope, can_nest, is_parent};
pub use node::{Node, Tag};
pub use response::{Response, ResponseBuilder};
pub use values::{
    GatherInput, HttpMethod, IfMachine, Language, MaxParticipants, RecordingDirection,
    RecordingFileFormat, RejectReason, TranscribeQuality, Voice,
};
pub use verbs::{
    Agent, Conference, ConferenceOptions, Connect, ConnectOptions, Dial, DialOptions, Gather,
    GatherOptions, Hangup, HangupOptions, Mms, MmsOptions, Number, NumberOptions, Pause,
    PauseOptions, Ping, PingOptions, Play, PlayLastRecording, PlayOptions, Record, RecordOptions,
    Redirect, RedirectOptions, Refer, ReferOptions, Reject, RejectOptions, Say, SayOptions, Sip,
    SipOptions, Sms, SmsOptions, User, UserOptions,
};
