use super::Tag;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Errors raised while building or serializing an InboundXML document.
pub enum InboundXmlError {
    /// A typed value fell outside the domain the platform accepts.
    #[error("invalid value {value:?} for attribute `{attribute}` (expected {expected})")]
    InvalidAttributeValue {
        attribute: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A string did not match any wire token of the named enum.
    #[error("invalid {kind} literal: {literal:?}")]
    InvalidEnumLiteral { kind: &'static str, literal: String },

    /// A child verb was appended under a parent that does not accept it.
    ///
    /// The typed builder rejects these at compile time; this variant is only
    /// produced by [`Node::try_append_child`](super::Node::try_append_child).
    #[error("<{child}> cannot be nested inside <{parent}>")]
    IllegalNesting { parent: Tag, child: Tag },

    /// The XML writer failed.
    #[error("failed to serialize InboundXML: {0}")]
    Serialization(String),
}
