//! Depth-first serialization of a node tree with `quick_xml`.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{InboundXmlError, Node};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

pub(crate) fn write_document(root: &Node, declaration: bool) -> Result<String, InboundXmlError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    if declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(serialization_error)?;
    }
    write_node(&mut writer, root)?;

    let xml = String::from_utf8(writer.into_inner().into_inner()).map_err(serialization_error)?;
    tracing::trace!(root = %root.tag(), bytes = xml.len(), "serialized InboundXML");
    Ok(xml)
}

fn write_node(writer: &mut XmlWriter, node: &Node) -> Result<(), InboundXmlError> {
    let name = node.tag().as_str();
    let mut start = BytesStart::new(name);
    for (key, value) in node.attributes() {
        start.push_attribute((key, value));
    }

    if node.text().is_none() && node.children().is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(serialization_error);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialization_error)?;
    if let Some(text) = node.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(serialization_error)?;
    }
    for child in node.children() {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(serialization_error)
}

fn serialization_error(err: impl std::fmt::Display) -> InboundXmlError {
    InboundXmlError::Serialization(err.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::inboundxml::Tag;

    #[test]
    fn text_and_attribute_values_are_escaped() {
        let mut node = Node::new(Tag::Say);
        node.set_attribute("voice", "a\"b<c");
        node.set_text("Tom & Jerry <3");

        let xml = write_document(&node, false).unwrap();
        assert_eq!(
            xml,
            "<Say voice=\"a&quot;b&lt;c\">Tom &amp; Jerry &lt;3</Say>"
        );
    }

    #[test]
    fn element_with_only_children_is_not_self_closed() {
        let mut dial = Node::new(Tag::Dial);
        dial.push_child(Node::new(Tag::Agent));
        let xml = write_document(&dial, false).unwrap();
        assert_eq!(xml, "<Dial><Agent/></Dial>");
    }

    #[test]
    fn empty_text_still_opens_and_closes() {
        let mut say = Node::new(Tag::Say);
        say.set_text("");
        assert_eq!(write_document(&say, false).unwrap(), "<Say></Say>");
    }
}
