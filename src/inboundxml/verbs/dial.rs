use super::attr;
use crate::inboundxml::{
    HttpMethod, IfMachine, MaxParticipants, Node, RecordingDirection, RecordingFileFormat, Tag,
};

#[derive(Debug, Clone, Default)]
pub struct DialOptions {
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    /// Seconds to wait for the callee to answer.
    pub timeout: Option<u32>,
    pub hangup_on_star: Option<bool>,
    /// Maximum call length in seconds.
    pub time_limit: Option<u32>,
    pub caller_id: Option<String>,
    pub hide_caller_id: Option<bool>,
    /// Audio played to the caller while the callee rings.
    pub dial_music: Option<String>,
    pub callback_url: Option<String>,
    pub callback_method: Option<HttpMethod>,
    pub confirm_sound: Option<String>,
    pub digits_match: Option<String>,
    pub straight_to_vm: Option<bool>,
    pub heartbeat_url: Option<String>,
    pub heartbeat_method: Option<HttpMethod>,
    pub forwarded_from: Option<String>,
    pub if_machine: Option<IfMachine>,
    pub if_machine_url: Option<String>,
    pub if_machine_method: Option<HttpMethod>,
    pub record: Option<bool>,
    pub record_direction: Option<RecordingDirection>,
    pub record_callback_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Dial>`: connect the caller to another party.
///
/// The destination is either the element text or one of the nested nouns
/// `<Number>`, `<Sip>`, `<User>`, `<Agent>` or `<Conference>`.
pub struct Dial {
    node: Node,
}

impl Dial {
    /// Seconds to ring before giving up.
    pub const DEFAULT_TIMEOUT: u32 = 30;
    /// Maximum call length in seconds (four hours).
    pub const DEFAULT_TIME_LIMIT: u32 = 14400;

    /// Open a `<Dial>` to be filled with nouns (`<Number>`, `<Conference>`, ...).
    pub fn new(options: DialOptions) -> Self {
        let mut node = Node::new(Tag::Dial);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::TIMEOUT, options.timeout);
        node.set_optional(attr::HANGUP_ON_STAR, options.hangup_on_star);
        node.set_optional(attr::TIME_LIMIT, options.time_limit);
        node.set_optional(attr::CALLER_ID, options.caller_id);
        node.set_optional(attr::HIDE_CALLER_ID, options.hide_caller_id);
        node.set_optional(attr::DIAL_MUSIC, options.dial_music);
        node.set_optional(attr::CALLBACK_URL, options.callback_url);
        node.set_optional(attr::CALLBACK_METHOD, options.callback_method);
        node.set_optional(attr::CONFIRM_SOUND, options.confirm_sound);
        node.set_optional(attr::DIGITS_MATCH, options.digits_match);
        node.set_optional(attr::STRAIGHT_TO_VM, options.straight_to_vm);
        node.set_optional(attr::HEARTBEAT_URL, options.heartbeat_url);
        node.set_optional(attr::HEARTBEAT_METHOD, options.heartbeat_method);
        node.set_optional(attr::FORWARDED_FROM, options.forwarded_from);
        node.set_optional(attr::IF_MACHINE, options.if_machine);
        node.set_optional(attr::IF_MACHINE_URL, options.if_machine_url);
        node.set_optional(attr::IF_MACHINE_METHOD, options.if_machine_method);
        node.set_optional(attr::RECORD, options.record);
        node.set_optional(attr::RECORD_DIRECTION, options.record_direction);
        node.set_optional(attr::RECORD_CALLBACK_URL, options.record_callback_url);
        Self { node }
    }

    /// Dial `number` directly, without a nested noun.
    pub fn to(number: impl Into<String>, options: DialOptions) -> Self {
        let mut dial = Self::new(options);
        dial.node.set_text(number);
        dial
    }

    /// Number given as text, if any.
    pub fn number(&self) -> Option<&str> {
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

    /// `timeout`, defaulting to `30`.
    pub fn timeout(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::TIMEOUT, Self::DEFAULT_TIMEOUT)
    }

    /// Set `timeout`.
    pub fn set_timeout(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::TIMEOUT, seconds);
    }

    /// `hangupOnStar`; `false` unless set.
    pub fn hangup_on_star(&self) -> bool {
        self.node.typed_attribute_or(attr::HANGUP_ON_STAR, false)
    }

    /// Set `hangupOnStar`.
    pub fn set_hangup_on_star(&mut self, enabled: bool) {
        self.node.set_typed_attribute(attr::HANGUP_ON_STAR, enabled);
    }

    /// `timeLimit`, defaulting to `14400`.
    pub fn time_limit(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::TIME_LIMIT, Self::DEFAULT_TIME_LIMIT)
    }

    /// Set `timeLimit`.
    pub fn set_time_limit(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::TIME_LIMIT, seconds);
    }

    /// `callerId`, if set.
    pub fn caller_id(&self) -> Option<&str> {
        self.node.attribute(attr::CALLER_ID)
    }

    /// Set `callerId`.
    pub fn set_caller_id(&mut self, caller_id: impl Into<String>) {
        self.node.set_attribute(attr::CALLER_ID, caller_id);
    }

    /// `hideCallerId`; `false` unless set.
    pub fn hide_caller_id(&self) -> bool {
        self.node.typed_attribute_or(attr::HIDE_CALLER_ID, false)
    }

    /// Set `hideCallerId`.
    pub fn set_hide_caller_id(&mut self, hide: bool) {
        self.node.set_typed_attribute(attr::HIDE_CALLER_ID, hide);
    }

    /// `dialMusic`, if set.
    pub fn dial_music(&self) -> Option<&str> {
        self.node.attribute(attr::DIAL_MUSIC)
    }

    /// Set `dialMusic`.
    pub fn set_dial_music(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::DIAL_MUSIC, url);
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

    /// `confirmSound`, if set.
    pub fn confirm_sound(&self) -> Option<&str> {
        self.node.attribute(attr::CONFIRM_SOUND)
    }

    /// Set `confirmSound`.
    pub fn set_confirm_sound(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::CONFIRM_SOUND, url);
    }

    /// `digitsMatch`, if set.
    pub fn digits_match(&self) -> Option<&str> {
        self.node.attribute(attr::DIGITS_MATCH)
    }

    /// Set `digitsMatch`.
    pub fn set_digits_match(&mut self, digits: impl Into<String>) {
        self.node.set_attribute(attr::DIGITS_MATCH, digits);
    }

    /// `straightToVm`; `false` unless set.
    pub fn straight_to_vm(&self) -> bool {
        self.node.typed_attribute_or(attr::STRAIGHT_TO_VM, false)
    }

    /// Set `straightToVm`.
    pub fn set_straight_to_vm(&mut self, enabled: bool) {
        self.node.set_typed_attribute(attr::STRAIGHT_TO_VM, enabled);
    }

    /// `heartbeatUrl`, if set.
    pub fn heartbeat_url(&self) -> Option<&str> {
        self.node.attribute(attr::HEARTBEAT_URL)
    }

    /// Set `heartbeatUrl`.
    pub fn set_heartbeat_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::HEARTBEAT_URL, url);
    }

    /// `heartbeatMethod`, defaulting to `POST`.
    pub fn heartbeat_method(&self) -> HttpMethod {
        self.node
            .typed_attribute_or(attr::HEARTBEAT_METHOD, HttpMethod::default())
    }

    /// Set `heartbeatMethod`.
    pub fn set_heartbeat_method(&mut self, method: HttpMethod) {
        self.node.set_typed_attribute(attr::HEARTBEAT_METHOD, method);
    }

    /// `forwardedFrom`, if set.
    pub fn forwarded_from(&self) -> Option<&str> {
        self.node.attribute(attr::FORWARDED_FROM)
    }

    /// Set `forwardedFrom`.
    pub fn set_forwarded_from(&mut self, number: impl Into<String>) {
        self.node.set_attribute(attr::FORWARDED_FROM, number);
    }

    /// `ifMachine`, defaulting to `continue`.
    pub fn if_machine(&self) -> IfMachine {
        self.node
            .typed_attribute_or(attr::IF_MACHINE, IfMachine::default())
    }

    /// Set `ifMachine`.
    pub fn set_if_machine(&mut self, if_machine: IfMachine) {
        self.node.set_typed_attribute(attr::IF_MACHINE, if_machine);
    }

    /// `ifMachineUrl`, if set.
    pub fn if_machine_url(&self) -> Option<&str> {
        self.node.attribute(attr::IF_MACHINE_URL)
    }

    /// Set `ifMachineUrl`.
    pub fn set_if_machine_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::IF_MACHINE_URL, url);
    }

    /// `ifMachineMethod`, defaulting to `POST`.
    pub fn if_machine_method(&self) -> HttpMethod {
        self.node
            .typed_attribute_or(attr::IF_MACHINE_METHOD, HttpMethod::default())
    }

    /// Set `ifMachineMethod`.
    pub fn set_if_machine_method(&mut self, method: HttpMethod) {
        self.node.set_typed_attribute(attr::IF_MACHINE_METHOD, method);
    }

    /// `record`; `false` unless set.
    pub fn record(&self) -> bool {
        self.node.typed_attribute_or(attr::RECORD, false)
    }

    /// Set `record`.
    pub fn set_record(&mut self, record: bool) {
        self.node.set_typed_attribute(attr::RECORD, record);
    }

    /// `recordDirection`, defaulting to `both`.
    pub fn record_direction(&self) -> RecordingDirection {
        self.node
            .typed_attribute_or(attr::RECORD_DIRECTION, RecordingDirection::default())
    }

    /// Set `recordDirection`.
    pub fn set_record_direction(&mut self, direction: RecordingDirection) {
        self.node.set_typed_attribute(attr::RECORD_DIRECTION, direction);
    }

    /// `recordCallbackUrl`, if set.
    pub fn record_callback_url(&self) -> Option<&str> {
        self.node.attribute(attr::RECORD_CALLBACK_URL)
    }

    /// Set `recordCallbackUrl`.
    pub fn set_record_callback_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::RECORD_CALLBACK_URL, url);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConferenceOptions {
    pub muted: Option<bool>,
    pub beep: Option<bool>,
    pub start_conference_on_enter: Option<bool>,
    pub end_conference_on_exit: Option<bool>,
    pub max_participants: Option<MaxParticipants>,
    /// Audio played while waiting for the conference to start.
    pub wait_sound: Option<String>,
    pub hangup_on_star: Option<bool>,
    pub callback_url: Option<String>,
    pub callback_method: Option<HttpMethod>,
    pub digits_match: Option<String>,
    /// Keep the conference open with a single participant.
    pub stay_alone: Option<bool>,
    pub record: Option<bool>,
    pub record_callback_url: Option<String>,
    pub record_file_format: Option<RecordingFileFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Conference>`: join a named conference room. Only valid inside `<Dial>`.
pub struct Conference {
    node: Node,
}

impl Conference {
    /// Join the conference room named `room`.
    pub fn new(room: impl Into<String>, options: ConferenceOptions) -> Self {
        let mut node = Node::new(Tag::Conference);
        node.set_optional(attr::MUTED, options.muted);
        node.set_optional(attr::BEEP, options.beep);
        node.set_optional(
            attr::START_CONFERENCE_ON_ENTER,
            options.start_conference_on_enter,
        );
        node.set_optional(attr::END_CONFERENCE_ON_EXIT, options.end_conference_on_exit);
        node.set_optional(attr::MAX_PARTICIPANTS, options.max_participants);
        node.set_optional(attr::WAIT_SOUND, options.wait_sound);
        node.set_optional(attr::HANGUP_ON_STAR, options.hangup_on_star);
        node.set_optional(attr::CALLBACK_URL, options.callback_url);
        node.set_optional(attr::CALLBACK_METHOD, options.callback_method);
        node.set_optional(attr::DIGITS_MATCH, options.digits_match);
        node.set_optional(attr::STAY_ALONE, options.stay_alone);
        node.set_optional(attr::RECORD, options.record);
        node.set_optional(attr::RECORD_CALLBACK_URL, options.record_callback_url);
        node.set_optional(attr::RECORD_FILE_FORMAT, options.record_file_format);
        node.set_text(room);
        Self { node }
    }

    /// Room name.
    pub fn room(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `muted`; `false` unless set.
    pub fn muted(&self) -> bool {
        self.node.typed_attribute_or(attr::MUTED, false)
    }

    /// Set `muted`.
    pub fn set_muted(&mut self, muted: bool) {
        self.node.set_typed_attribute(attr::MUTED, muted);
    }

    /// `beep`; `true` unless set.
    pub fn beep(&self) -> bool {
        self.node.typed_attribute_or(attr::BEEP, true)
    }

    /// Set `beep`.
    pub fn set_beep(&mut self, beep: bool) {
        self.node.set_typed_attribute(attr::BEEP, beep);
    }

    /// `startConferenceOnEnter`; `true` unless set.
    pub fn start_conference_on_enter(&self) -> bool {
        self.node
            .typed_attribute_or(attr::START_CONFERENCE_ON_ENTER, true)
    }

    /// Set `startConferenceOnEnter`.
    pub fn set_start_conference_on_enter(&mut self, start: bool) {
        self.node
            .set_typed_attribute(attr::START_CONFERENCE_ON_ENTER, start);
    }

    /// `endConferenceOnExit`; `false` unless set.
    pub fn end_conference_on_exit(&self) -> bool {
        self.node
            .typed_attribute_or(attr::END_CONFERENCE_ON_EXIT, false)
    }

    /// Set `endConferenceOnExit`.
    pub fn set_end_conference_on_exit(&mut self, end: bool) {
        self.node.set_typed_attribute(attr::END_CONFERENCE_ON_EXIT, end);
    }

    /// Out-of-range stored values read as the default of 40.
    pub fn max_participants(&self) -> MaxParticipants {
        self.node
            .typed_attribute_or(attr::MAX_PARTICIPANTS, MaxParticipants::default())
    }

    /// Set `maxParticipants`.
    pub fn set_max_participants(&mut self, max: MaxParticipants) {
        self.node.set_typed_attribute(attr::MAX_PARTICIPANTS, max);
    }

    /// `waitSound`, if set.
    pub fn wait_sound(&self) -> Option<&str> {
        self.node.attribute(attr::WAIT_SOUND)
    }

    /// Set `waitSound`.
    pub fn set_wait_sound(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::WAIT_SOUND, url);
    }

    /// `hangupOnStar`; `false` unless set.
    pub fn hangup_on_star(&self) -> bool {
        self.node.typed_attribute_or(attr::HANGUP_ON_STAR, false)
    }

    /// Set `hangupOnStar`.
    pub fn set_hangup_on_star(&mut self, enabled: bool) {
        self.node.set_typed_attribute(attr::HANGUP_ON_STAR, enabled);
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

    /// `digitsMatch`, if set.
    pub fn digits_match(&self) -> Option<&str> {
        self.node.attribute(attr::DIGITS_MATCH)
    }

    /// Set `digitsMatch`.
    pub fn set_digits_match(&mut self, digits: impl Into<String>) {
        self.node.set_attribute(attr::DIGITS_MATCH, digits);
    }

    /// `stayAlone`; `true` unless set.
    pub fn stay_alone(&self) -> bool {
        self.node.typed_attribute_or(attr::STAY_ALONE, true)
    }

    /// Set `stayAlone`.
    pub fn set_stay_alone(&mut self, stay_alone: bool) {
        self.node.set_typed_attribute(attr::STAY_ALONE, stay_alone);
    }

    /// `record`; `false` unless set.
    pub fn record(&self) -> bool {
        self.node.typed_attribute_or(attr::RECORD, false)
    }

    /// Set `record`.
    pub fn set_record(&mut self, record: bool) {
        self.node.set_typed_attribute(attr::RECORD, record);
    }

    /// `recordCallbackUrl`, if set.
    pub fn record_callback_url(&self) -> Option<&str> {
        self.node.attribute(attr::RECORD_CALLBACK_URL)
    }

    /// Set `recordCallbackUrl`.
    pub fn set_record_callback_url(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::RECORD_CALLBACK_URL, url);
    }

    /// `recordFileFormat`, defaulting to `mp3`.
    pub fn record_file_format(&self) -> RecordingFileFormat {
        self.node
            .typed_attribute_or(attr::RECORD_FILE_FORMAT, RecordingFileFormat::default())
    }

    /// Set `recordFileFormat`.
    pub fn set_record_file_format(&mut self, format: RecordingFileFormat) {
        self.node.set_typed_attribute(attr::RECORD_FILE_FORMAT, format);
    }
}

#[derive(Debug, Clone, Default)]
pub struct NumberOptions {
    /// DTMF digits sent once the callee answers (`w` waits half a second).
    pub send_digits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Number>`: a PSTN destination inside `<Dial>`.
pub struct Number {
    node: Node,
}

impl Number {
    /// Dial the phone number `number`.
    pub fn new(number: impl Into<String>, options: NumberOptions) -> Self {
        let mut node = Node::new(Tag::Number);
        node.set_optional(attr::SEND_DIGITS, options.send_digits);
        node.set_text(number);
        Self { node }
    }

    /// Number being dialed.
    pub fn number(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `sendDigits`, if set.
    pub fn send_digits(&self) -> Option<&str> {
        self.node.attribute(attr::SEND_DIGITS)
    }

    /// Set `sendDigits`.
    pub fn set_send_digits(&mut self, digits: impl Into<String>) {
        self.node.set_attribute(attr::SEND_DIGITS, digits);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SipOptions {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Sip>`: a SIP URI destination inside `<Dial>` or `<Refer>`.
pub struct Sip {
    node: Node,
}

impl Sip {
    /// Dial the SIP address `uri`.
    pub fn new(uri: impl Into<String>, options: SipOptions) -> Self {
        let mut node = Node::new(Tag::Sip);
        node.set_optional(attr::USERNAME, options.username);
        node.set_optional(attr::PASSWORD, options.password);
        node.set_text(uri);
        Self { node }
    }

    /// SIP address being dialed.
    pub fn uri(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `username`, if set.
    pub fn username(&self) -> Option<&str> {
        self.node.attribute(attr::USERNAME)
    }

    /// Set `username`.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.node.set_attribute(attr::USERNAME, username);
    }

    /// `password`, if set.
    pub fn password(&self) -> Option<&str> {
        self.node.attribute(attr::PASSWORD)
    }

    /// Set `password`.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.node.set_attribute(attr::PASSWORD, password);
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserOptions {
    pub send_digits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<User>`: a registered client endpoint inside `<Dial>`.
pub struct User {
    node: Node,
}

impl User {
    /// Dial the platform user `user`.
    pub fn new(user: impl Into<String>, options: UserOptions) -> Self {
        let mut node = Node::new(Tag::User);
        node.set_optional(attr::SEND_DIGITS, options.send_digits);
        node.set_text(user);
        Self { node }
    }

    /// User being dialed.
    pub fn user(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `sendDigits`, if set.
    pub fn send_digits(&self) -> Option<&str> {
        self.node.attribute(attr::SEND_DIGITS)
    }

    /// Set `sendDigits`.
    pub fn set_send_digits(&mut self, digits: impl Into<String>) {
        self.node.set_attribute(attr::SEND_DIGITS, digits);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Agent>`: a contact-center agent inside `<Dial>` or `<Connect>`.
pub struct Agent {
    node: Node,
}

impl Agent {
    /// Route to the agent with id `agent_id`.
    pub fn new(agent_id: impl Into<String>) -> Self {
        let mut node = Node::new(Tag::Agent);
        node.set_text(agent_id);
        Self { node }
    }

    /// Agent id.
    pub fn agent_id(&self) -> &str {
        self.node.text().unwrap_or_default()
    }
}

impl_element!(Dial, Conference, Number, Sip, User, Agent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inboundxml::{Element, Scope};

    #[test]
    fn conference_reports_platform_defaults() {
        let conference = Conference::new("room42", ConferenceOptions::default());
        assert!(!conference.muted());
        assert!(conference.beep());
        assert!(conference.start_conference_on_enter());
        assert!(!conference.end_conference_on_exit());
        assert_eq!(conference.max_participants().value(), 40);
        assert!(!conference.hangup_on_star());
        assert_eq!(conference.callback_method(), HttpMethod::Post);
        assert!(conference.stay_alone());
        assert!(!conference.record());
        assert_eq!(conference.record_file_format(), RecordingFileFormat::Mp3);
        assert_eq!(conference.room(), "room42");
    }

    #[test]
    fn conference_out_of_range_raw_value_reads_as_default() {
        let mut conference = Conference::new("room", ConferenceOptions::default());
        conference
            .node_mut()
            .set_attribute("maxParticipants", "500");
        assert_eq!(conference.max_participants(), MaxParticipants::default());

        conference.set_max_participants(MaxParticipants::new(12).unwrap());
        assert_eq!(conference.node().attribute("maxParticipants"), Some("12"));
    }

    #[test]
    fn conference_wait_sound_is_written_as_wait_sound() {
        let mut conference = Conference::new(
            "room42",
            ConferenceOptions {
                wait_sound: Some("https://example.com/hold.mp3".to_owned()),
                ..Default::default()
            },
        );
        assert_eq!(conference.wait_sound(), Some("https://example.com/hold.mp3"));
        assert_eq!(
            conference.node().attribute("waitSound"),
            Some("https://example.com/hold.mp3")
        );

        conference.set_wait_sound("https://example.com/music.mp3");
        let xml = crate::inboundxml::Response::builder()
            .dial(DialOptions::default())
            .push(conference)
            .end()
            .build()
            .to_xml_string()
            .unwrap();
        assert_eq!(
            xml,
            r#"<Response><Dial><Conference waitSound="https://example.com/music.mp3">room42</Conference></Dial></Response>"#
        );
    }

    #[test]
    fn dial_reports_platform_defaults() {
        let dial = Dial::new(DialOptions::default());
        assert_eq!(dial.timeout(), 30);
        assert_eq!(dial.time_limit(), 14400);
        assert_eq!(dial.method(), HttpMethod::Post);
        assert_eq!(dial.if_machine(), IfMachine::Continue);
        assert_eq!(dial.record_direction(), RecordingDirection::Both);
        assert!(!dial.hide_caller_id());
        assert!(!dial.straight_to_vm());
        assert_eq!(dial.number(), None);
    }

    #[test]
    fn dial_to_sets_number_text() {
        let dial = Dial::to(
            "+15555550100",
            DialOptions {
                caller_id: Some("+15555550199".to_owned()),
                ..Default::default()
            },
        );
        assert_eq!(dial.number(), Some("+15555550100"));
        assert_eq!(dial.caller_id(), Some("+15555550199"));
    }

    #[test]
    fn nouns_carry_their_destination_as_text() {
        let number = Number::new(
            "+15555550100",
            NumberOptions {
                send_digits: Some("ww1234".to_owned()),
            },
        );
        assert_eq!(number.number(), "+15555550100");
        assert_eq!(number.send_digits(), Some("ww1234"));

        let sip = Sip::new("sip:alice@example.com", SipOptions::default());
        assert_eq!(sip.uri(), "sip:alice@example.com");
        assert_eq!(sip.username(), None);

        let agent = Agent::new("agent-7");
        assert_eq!(agent.agent_id(), "agent-7");
        assert_eq!(agent.node().attributes().count(), 0);
    }
}
