use std::fmt;

use super::nesting::sealed;
use super::{Element, InboundXmlError, Node, Scope, Tag, writer};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A complete InboundXML document: the `<Response>` root and everything in it.
///
/// Build one with [`Response::builder`]; the result is immutable.
pub struct Response {
    node: Node,
}

impl Response {
    /// Start a new document.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder {
            response: Self {
                node: Node::new(Tag::Response),
            },
        }
    }

    /// Serialize to an XML string without a declaration.
    ///
    /// This is what a webhook handler returns as its response body.
    pub fn to_xml_string(&self) -> Result<String, InboundXmlError> {
        writer::write_document(&self.node, false)
    }

    /// Serialize with a leading `<?xml version="1.0" encoding="UTF-8"?>`.
    pub fn to_xml_document(&self) -> Result<String, InboundXmlError> {
        writer::write_document(&self.node, true)
    }
}

impl sealed::SealedElement for Response {}

impl Element for Response {
    const TAG: Tag = Tag::Response;

    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    fn into_node(self) -> Node {
        self.node
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml_string().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}

#[derive(Debug)]
/// Root builder handle; every chain starts and finishes here.
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Finish the document.
    pub fn build(self) -> Response {
        self.response
    }
}

impl sealed::Sealed for ResponseBuilder {
    fn append(&mut self, node: Node) {
        self.response.node.push_child(node);
    }
}

impl Scope for ResponseBuilder {
    type Parent = Response;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::inboundxml::{
        DialOptions, GatherOptions, HangupOptions, NumberOptions, PlayOptions, SayOptions,
    };

    #[test]
    fn empty_document_self_closes() {
        let response = Response::builder().build();
        assert_eq!(response.to_xml_string().unwrap(), "<Response/>");
    }

    #[test]
    fn document_variant_prepends_declaration() {
        let response = Response::builder()
            .hangup(HangupOptions::default())
            .build();
        assert_eq!(
            response.to_xml_document().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Hangup/></Response>"
        );
    }

    #[test]
    fn display_matches_xml_string() {
        let response = Response::builder()
            .say("Goodbye", SayOptions::default())
            .build();
        assert_eq!(response.to_string(), response.to_xml_string().unwrap());
    }

    #[test]
    fn children_follow_attachment_order() {
        let response = Response::builder()
            .play("https://example.com/hold.mp3", PlayOptions::default())
            .gather(GatherOptions::default())
            .say("one", SayOptions::default())
            .end()
            .dial(DialOptions::default())
            .number("+15555550100", NumberOptions::default())
            .end()
            .hangup(HangupOptions::default())
            .build();

        let tags = response
            .node()
            .children()
            .iter()
            .map(Node::tag)
            .collect::<Vec<_>>();
        assert_eq!(tags, vec![Tag::Play, Tag::Gather, Tag::Dial, Tag::Hangup]);
    }
}
