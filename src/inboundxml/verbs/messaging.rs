use super::attr;
use crate::inboundxml::{HttpMethod, Node, Tag};

#[derive(Debug, Clone, Default)]
pub struct SmsOptions {
    /// Destination number; defaults to the caller.
    pub to: Option<String>,
    /// Sender number; defaults to the called number.
    pub from: Option<String>,
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    pub status_callback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Sms>`: send a text message during the call.
pub struct Sms {
    node: Node,
}

impl Sms {
    /// Send `body` as a text message.
    pub fn new(body: impl Into<String>, options: SmsOptions) -> Self {
        let mut node = Node::new(Tag::Sms);
        node.set_optional(attr::TO, options.to);
        node.set_optional(attr::FROM, options.from);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::STATUS_CALLBACK, options.status_callback);
        node.set_text(body);
        Self { node }
    }

    /// Message text.
    pub fn body(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `to`, if set; otherwise the caller receives the message.
    pub fn recipient(&self) -> Option<&str> {
        self.node.attribute(attr::TO)
    }

    /// Set `to`.
    pub fn set_recipient(&mut self, number: impl Into<String>) {
        self.node.set_attribute(attr::TO, number);
    }

    /// `from`, if set.
    pub fn sender(&self) -> Option<&str> {
        self.node.attribute(attr::FROM)
    }

    /// Set `from`.
    pub fn set_sender(&mut self, number: impl Into<String>) {
        self.node.set_attribute(attr::FROM, number);
    }

    /// `action`, if set.
    pub fn action(&self) -> Option<&str> {
        self.node.attribute(attr::ACTION)
    }

    /// Set `action`.
    pub fn set_action(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::ACTION, url);
    }

    /// `method`, defaulting to `POST`.
    pub fn method(&self) -> HttpMethod {
        self.node
            .typed_attribute_or(attr::METHOD, HttpMethod::default())
    }

    /// Set `method`.
    pub fn set_method(&mut self, method: HttpMethod) {
        self.node.set_typed_attribute(attr::METHOD, method);
    }

    /// `statusCallback`, if set.
    pub fn status_callback(&self) -> Option<&str> {
        self.node.attribute(attr::STATUS_CALLBACK)
    }

    /// Set `statusCallback`.
    pub fn set_status_callback(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::STATUS_CALLBACK, url);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MmsOptions {
    pub to: Option<String>,
    pub from: Option<String>,
    /// URL of the attached media.
    pub media_url: Option<String>,
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    pub status_callback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Mms>`: send a multimedia message during the call.
pub struct Mms {
    node: Node,
}

impl Mms {
    /// Send `body` with optional media as a multimedia message.
    pub fn new(body: impl Into<String>, options: MmsOptions) -> Self {
        let mut node = Node::new(Tag::Mms);
        node.set_optional(attr::TO, options.to);
        node.set_optional(attr::FROM, options.from);
        node.set_optional(attr::MEDIA_URL, options.media_url);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::STATUS_CALLBACK, options.status_callback);
        node.set_text(body);
        Self { node }
    }

    /// Message text.
    pub fn body(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `to`, if set.
    pub fn recipient(&self) -> Option<&str> {
        self.node.attribute(attr::TO)
    }

    /// Set `to`.
    pub fn set_recipient(&mut self, number: impl Into<String>) {
        self.node.set_attribute(attr::TO, number);
    }

    /// `from`, if set.
    pub fn sender(&self) -> Option<&str> {
        self.node.attribute(attr::FROM)
    }

    /// Set `from`.
    pub fn set_sender(&mut self, number: impl Into<String>) {
        self.node.set_attribute(attr::FROM, number);
    }

    /// `mediaUrl`, if set.
    pub fn media_url(&self) -> Option<&str> {
        self.node.attribute(attr::MEDIA_URL)
    }

    /// Set `mediaUrl`.
    pub fn set_media_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::MEDIA_URL, url);
    }

    /// `action`, if set.
    pub fn action(&self) -> Option<&str> {
        self.node.attribute(attr::ACTION)
    }

    /// Set `action`.
    pub fn set_action(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::ACTION, url);
    }

    /// `method`, defaulting to `POST`.
    pub fn method(&self) -> HttpMethod {
        self.node
            .typed_attribute_or(attr::METHOD, HttpMethod::default())
    }

    /// Set `method`.
    pub fn set_method(&mut self, method: HttpMethod) {
        self.node.set_typed_attribute(attr::METHOD, method);
    }

    /// `statusCallback`, if set.
    pub fn status_callback(&self) -> Option<&str> {
        self.node.attribute(attr::STATUS_CALLBACK)
    }

    /// Set `statusCallback`.
    pub fn set_status_callback(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::STATUS_CALLBACK, url);
    }
}

impl_element!(Sms, Mms);
