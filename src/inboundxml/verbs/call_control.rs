use super::attr;
use crate::inboundxml::{HttpMethod, Node, RejectReason, Tag};

#[derive(Debug, Clone, Default)]
pub struct HangupOptions {
    /// Seconds to wait before hanging up.
    pub schedule: Option<u32>,
    pub reason: Option<RejectReason>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Hangup>`: end the call.
pub struct Hangup {
    node: Node,
}

impl Hangup {
    /// Hang up immediately.
    pub const DEFAULT_SCHEDULE: u32 = 0;

    /// End the call, optionally after a delay.
    pub fn new(options: HangupOptions) -> Self {
        let mut node = Node::new(Tag::Hangup);
        node.set_optional(attr::SCHEDULE, options.schedule);
        node.set_optional(attr::REASON, options.reason);
        Self { node }
    }

    /// `schedule`, defaulting to `0`.
    pub fn schedule(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::SCHEDULE, Self::DEFAULT_SCHEDULE)
    }

    /// Set `schedule`.
    pub fn set_schedule(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::SCHEDULE, seconds);
    }

    /// `reason`, defaulting to `rejected`.
    pub fn reason(&self) -> RejectReason {
        self.node
            .typed_attribute_or(attr::REASON, RejectReason::default())
    }

    /// Set `reason`.
    pub fn set_reason(&mut self, reason: RejectReason) {
        self.node.set_typed_attribute(attr::REASON, reason);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RejectOptions {
    pub reason: Option<RejectReason>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Reject>`: refuse an incoming call without answering it.
pub struct Reject {
    node: Node,
}

impl Reject {
    /// Refuse an incoming call without answering it.
    pub fn new(options: RejectOptions) -> Self {
        let mut node = Node::new(Tag::Reject);
        node.set_optional(attr::REASON, options.reason);
        Self { node }
    }

    /// `reason`, defaulting to `rejected`.
    pub fn reason(&self) -> RejectReason {
        self.node
            .typed_attribute_or(attr::REASON, RejectReason::default())
    }

    /// Set `reason`.
    pub fn set_reason(&mut self, reason: RejectReason) {
        self.node.set_typed_attribute(attr::REASON, reason);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RedirectOptions {
    pub method: Option<HttpMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Redirect>`: continue the call with the document at another URL.
pub struct Redirect {
    node: Node,
}

impl Redirect {
    /// Continue the call with the document at `url`.
    pub fn new(url: impl Into<String>, options: RedirectOptions) -> Self {
        let mut node = Node::new(Tag::Redirect);
        node.set_optional(attr::METHOD, options.method);
        node.set_text(url);
        Self { node }
    }

    /// Document URL the call is handed to.
    pub fn url(&self) -> &str {
        self.node.text().unwrap_or_default()
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
}

#[derive(Debug, Clone, Default)]
pub struct ReferOptions {
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    /// Seconds to wait for the transfer to complete.
    pub timeout: Option<u32>,
    pub callback_url: Option<String>,
    pub callback_method: Option<HttpMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Refer>`: transfer a SIP call with a SIP REFER.
///
/// The target is either the element text or a nested `<Sip>`.
pub struct Refer {
    node: Node,
}

impl Refer {
    /// Seconds to wait for the transfer to complete.
    pub const DEFAULT_TIMEOUT: u32 = 180;

    /// Open a `<Refer>` to be filled with a `<Sip>` target.
    pub fn new(options: ReferOptions) -> Self {
        let mut node = Node::new(Tag::Refer);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::TIMEOUT, options.timeout);
        node.set_optional(attr::CALLBACK_URL, options.callback_url);
        node.set_optional(attr::CALLBACK_METHOD, options.callback_method);
        Self { node }
    }

    /// Refer to `address` directly, without a nested `<Sip>`.
    pub fn to(address: impl Into<String>, options: ReferOptions) -> Self {
        let mut refer = Self::new(options);
        refer.node.set_text(address);
        refer
    }

    /// Target address given as text, if any.
    pub fn address(&self) -> Option<&str> {
        self.node.text()
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

    /// `timeout`, defaulting to `180`.
    pub fn timeout(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::TIMEOUT, Self::DEFAULT_TIMEOUT)
    }

    /// Set `timeout`.
    pub fn set_timeout(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::TIMEOUT, seconds);
    }

    /// `callbackUrl`, if set.
    pub fn callback_url(&self) -> Option<&str> {
        self.node.attribute(attr::CALLBACK_URL)
    }

    /// Set `callbackUrl`.
    pub fn set_callback_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::CALLBACK_URL, url);
    }

    /// `callbackMethod`, defaulting to `POST`.
    pub fn callback_method(&self) -> HttpMethod {
        self.node
            .typed_attribute_or(attr::CALLBACK_METHOD, HttpMethod::default())
    }

    /// Set `callbackMethod`.
    pub fn set_callback_method(&mut self, method: HttpMethod) {
        self.node.set_typed_attribute(attr::CALLBACK_METHOD, method);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    pub timeout: Option<u32>,
    pub callback_url: Option<String>,
    pub callback_method: Option<HttpMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Connect>`: hand the call to nested `<Agent>`s.
pub struct Connect {
    node: Node,
}

impl Connect {
    /// Seconds to wait for an agent.
    pub const DEFAULT_TIMEOUT: u32 = 30;

    /// Open a `<Connect>` to be filled with `<Agent>`s.
    pub fn new(options: ConnectOptions) -> Self {
        let mut node = Node::new(Tag::Connect);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::TIMEOUT, options.timeout);
        node.set_optional(attr::CALLBACK_URL, options.callback_url);
        node.set_optional(attr::CALLBACK_METHOD, options.callback_method);
        Self { node }
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

    /// `timeout`, defaulting to `30`.
    pub fn timeout(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::TIMEOUT, Self::DEFAULT_TIMEOUT)
    }

    /// Set `timeout`.
    pub fn set_timeout(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::TIMEOUT, seconds);
    }

    /// `callbackUrl`, if set.
    pub fn callback_url(&self) -> Option<&str> {
        self.node.attribute(attr::CALLBACK_URL)
    }

    /// Set `callbackUrl`.
    pub fn set_callback_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::CALLBACK_URL, url);
    }

    /// `callbackMethod`, defaulting to `POST`.
    pub fn callback_method(&self) -> HttpMethod {
        self.node
            .typed_attribute_or(attr::CALLBACK_METHOD, HttpMethod::default())
    }

    /// Set `callbackMethod`.
    pub fn set_callback_method(&mut self, method: HttpMethod) {
        self.node.set_typed_attribute(attr::CALLBACK_METHOD, method);
    }
}

#[derive(Debug, Clone, Default)]
pub struct PingOptions {
    pub method: Option<HttpMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Ping>`: fire-and-forget request to a URL; the call continues immediately.
pub struct Ping {
    node: Node,
}

impl Ping {
    /// Request `url` without affecting the call.
    pub fn new(url: impl Into<String>, options: PingOptions) -> Self {
        let mut node = Node::new(Tag::Ping);
        node.set_optional(attr::METHOD, options.method);
        node.set_text(url);
        Self { node }
    }

    /// URL that is requested.
    pub fn url(&self) -> &str {
        self.node.text().unwrap_or_default()
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
}

impl_element!(Hangup, Reject, Redirect, Refer, Connect, Ping);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inboundxml::{Element, Scope};

    #[test]
    fn hangup_schedule_defaults_to_immediate() {
        let mut hangup = Hangup::new(HangupOptions::default());
        assert_eq!(hangup.schedule(), 0);
        assert_eq!(hangup.reason(), RejectReason::Rejected);

        hangup.node_mut().set_attribute("schedule", "later");
        assert_eq!(hangup.schedule(), 0);
    }

    #[test]
    fn reject_reason_is_lower_case_on_the_wire() {
        let reject = Reject::new(RejectOptions {
            reason: Some(RejectReason::Busy),
        });
        assert_eq!(reject.node().attribute("reason"), Some("busy"));
        assert_eq!(reject.reason(), RejectReason::Busy);
    }

    #[test]
    fn refer_and_connect_share_callback_defaults() {
        let refer = Refer::to("sip:bob@example.com", ReferOptions::default());
        assert_eq!(refer.address(), Some("sip:bob@example.com"));
        assert_eq!(refer.timeout(), 180);
        assert_eq!(refer.callback_method(), HttpMethod::Post);

        let mut connect = Connect::new(ConnectOptions::default());
        assert_eq!(connect.timeout(), 30);
        connect.set_callback_method(HttpMethod::Get);
        assert_eq!(connect.node().attribute("callbackMethod"), Some("GET"));
    }

    #[test]
    fn redirect_and_ping_carry_url_text() {
        let redirect = Redirect::new("https://example.com/next", RedirectOptions::default());
        assert_eq!(redirect.url(), "https://example.com/next");
        assert_eq!(redirect.method(), HttpMethod::Post);

        let ping = Ping::new(
            "https://example.com/ping",
            PingOptions {
                method: Some(HttpMethod::Get),
            },
        );
        assert_eq!(ping.url(), "https://example.com/ping");
        assert_eq!(ping.method(), HttpMethod::Get);
    }

    #[test]
    fn connect_serializes_nested_agents() {
        let xml = crate::inboundxml::Response::builder()
            .connect(ConnectOptions {
                action: Some("https://example.com/after-connect".to_owned()),
                timeout: Some(45),
                ..Default::default()
            })
            .agent("agent-7")
            .agent("agent-9")
            .end()
            .build()
            .to_xml_string()
            .unwrap();
        assert_eq!(
            xml,
            r#"<Response><Connect action="https://example.com/after-connect" timeout="45"><Agent>agent-7</Agent><Agent>agent-9</Agent></Connect></Response>"#
        );
    }
}
