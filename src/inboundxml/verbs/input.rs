use super::attr;
use crate::inboundxml::{
    GatherInput, HttpMethod, Language, Node, RecordingDirection, RecordingFileFormat, Tag,
    TranscribeQuality,
};

#[derive(Debug, Clone, Default)]
pub struct GatherOptions {
    /// URL requested with the collected input.
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    /// Seconds to wait between keypresses.
    pub timeout: Option<u32>,
    pub finish_on_key: Option<String>,
    pub num_digits: Option<u32>,
    pub input: Option<GatherInput>,
    pub language: Option<Language>,
    /// Comma-separated speech recognition hints.
    pub hints: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Gather>`: collect DTMF digits or speech while playing nested prompts.
///
/// May contain `<Say>`, `<Play>` and `<Pause>`.
pub struct Gather {
    node: Node,
}

impl Gather {
    /// Seconds to wait between keypresses.
    pub const DEFAULT_TIMEOUT: u32 = 5;
    /// Key that ends input early.
    pub const DEFAULT_FINISH_ON_KEY: &'static str = "#";

    /// Open a `<Gather>` to be filled with prompts.
    pub fn new(options: GatherOptions) -> Self {
        let mut node = Node::new(Tag::Gather);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::TIMEOUT, options.timeout);
        node.set_optional(attr::FINISH_ON_KEY, options.finish_on_key);
        node.set_optional(attr::NUM_DIGITS, options.num_digits);
        node.set_optional(attr::INPUT, options.input);
        node.set_optional(attr::LANGUAGE, options.language);
        node.set_optional(attr::HINTS, options.hints);
        Self { node }
    }

    /// `None` means the platform posts back to the current document URL.
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

    /// `timeout`, defaulting to `5`.
    pub fn timeout(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::TIMEOUT, Self::DEFAULT_TIMEOUT)
    }

    /// Set `timeout`.
    pub fn set_timeout(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::TIMEOUT, seconds);
    }

    /// `finishOnKey`, defaulting to `#`.
    pub fn finish_on_key(&self) -> &str {
        self.node
            .attribute(attr::FINISH_ON_KEY)
            .unwrap_or(Self::DEFAULT_FINISH_ON_KEY)
    }

    /// Set `finishOnKey`.
    pub fn set_finish_on_key(&mut self, key: impl Into<String>) {
        self.node.set_attribute(attr::FINISH_ON_KEY, key);
    }

    /// `None` means no digit limit.
    pub fn num_digits(&self) -> Option<u32> {
        self.node.typed_attribute(attr::NUM_DIGITS)
    }

    /// Set `numDigits`.
    pub fn set_num_digits(&mut self, digits: u32) {
        self.node.set_typed_attribute(attr::NUM_DIGITS, digits);
    }

    /// `input`, defaulting to `dtmf`.
    pub fn input(&self) -> GatherInput {
        self.node
            .typed_attribute_or(attr::INPUT, GatherInput::default())
    }

    /// Set `input`.
    pub fn set_input(&mut self, input: GatherInput) {
        self.node.set_typed_attribute(attr::INPUT, input);
    }

    /// `language`, defaulting to `en`.
    pub fn language(&self) -> Language {
        self.node
            .typed_attribute_or(attr::LANGUAGE, Language::default())
    }

    /// Set `language`.
    pub fn set_language(&mut self, language: Language) {
        self.node.set_typed_attribute(attr::LANGUAGE, language);
    }

    /// `hints`, if set.
    pub fn hints(&self) -> Option<&str> {
        self.node.attribute(attr::HINTS)
    }

    /// Set `hints`.
    pub fn set_hints(&mut self, hints: impl Into<String>) {
        self.node.set_attribute(attr::HINTS, hints);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordOptions {
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    /// Seconds of silence that end the recording.
    pub timeout: Option<u32>,
    pub finish_on_key: Option<String>,
    /// Maximum recording length in seconds.
    pub max_length: Option<u32>,
    pub transcribe: Option<bool>,
    pub transcribe_quality: Option<TranscribeQuality>,
    pub transcribe_callback: Option<String>,
    pub play_beep: Option<bool>,
    pub direction: Option<RecordingDirection>,
    pub file_format: Option<RecordingFileFormat>,
    /// Record in the background while the document continues.
    pub background: Option<bool>,
    pub trim_silence: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Record>`: record the caller.
pub struct Record {
    node: Node,
}

impl Record {
    /// Seconds of silence that end the recording.
    pub const DEFAULT_TIMEOUT: u32 = 5;
    /// Key that ends the recording.
    pub const DEFAULT_FINISH_ON_KEY: &'static str = "#";
    /// One hour.
    pub const DEFAULT_MAX_LENGTH: u32 = 3600;

    /// Record the caller with the given options.
    pub fn new(options: RecordOptions) -> Self {
        let mut node = Node::new(Tag::Record);
        node.set_optional(attr::ACTION, options.action);
        node.set_optional(attr::METHOD, options.method);
        node.set_optional(attr::TIMEOUT, options.timeout);
        node.set_optional(attr::FINISH_ON_KEY, options.finish_on_key);
        node.set_optional(attr::MAX_LENGTH, options.max_length);
        node.set_optional(attr::TRANSCRIBE, options.transcribe);
        node.set_optional(attr::TRANSCRIBE_QUALITY, options.transcribe_quality);
        node.set_optional(attr::TRANSCRIBE_CALLBACK, options.transcribe_callback);
        node.set_optional(attr::PLAY_BEEP, options.play_beep);
        node.set_optional(attr::DIRECTION, options.direction);
        node.set_optional(attr::FILE_FORMAT, options.file_format);
        node.set_optional(attr::BACKGROUND, options.background);
        node.set_optional(attr::TRIM_SILENCE, options.trim_silence);
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

    /// `timeout`, defaulting to `5`.
    pub fn timeout(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::TIMEOUT, Self::DEFAULT_TIMEOUT)
    }

    /// Set `timeout`.
    pub fn set_timeout(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::TIMEOUT, seconds);
    }

    /// `finishOnKey`, defaulting to `#`.
    pub fn finish_on_key(&self) -> &str {
        self.node
            .attribute(attr::FINISH_ON_KEY)
            .unwrap_or(Self::DEFAULT_FINISH_ON_KEY)
    }

    /// Set `finishOnKey`.
    pub fn set_finish_on_key(&mut self, key: impl Into<String>) {
        self.node.set_attribute(attr::FINISH_ON_KEY, key);
    }

    /// `maxLength`, defaulting to `3600`.
    pub fn max_length(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::MAX_LENGTH, Self::DEFAULT_MAX_LENGTH)
    }

    /// Set `maxLength`.
    pub fn set_max_length(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::MAX_LENGTH, seconds);
    }

    /// `transcribe`; `false` unless set.
    pub fn transcribe(&self) -> bool {
        self.node.typed_attribute_or(attr::TRANSCRIBE, false)
    }

    /// Set `transcribe`.
    pub fn set_transcribe(&mut self, transcribe: bool) {
        self.node.set_typed_attribute(attr::TRANSCRIBE, transcribe);
    }

    /// `transcribeQuality`, defaulting to `auto`.
    pub fn transcribe_quality(&self) -> TranscribeQuality {
        self.node
            .typed_attribute_or(attr::TRANSCRIBE_QUALITY, TranscribeQuality::default())
    }

    /// Set `transcribeQuality`.
    pub fn set_transcribe_quality(&mut self, quality: TranscribeQuality) {
        self.node
            .set_typed_attribute(attr::TRANSCRIBE_QUALITY, quality);
    }

    /// `transcribeCallback`, if set.
    pub fn transcribe_callback(&self) -> Option<&str> {
        self.node.attribute(attr::TRANSCRIBE_CALLBACK)
    }

    /// Set `transcribeCallback`.
    pub fn set_transcribe_callback(&mut self, url: impl Into<String>) {
        self.node.set_attribute(attr::TRANSCRIBE_CALLBACK, url);
    }

    /// `playBeep`; `true` unless set.
    pub fn play_beep(&self) -> bool {
        self.node.typed_attribute_or(attr::PLAY_BEEP, true)
    }

    /// Set `playBeep`.
    pub fn set_play_beep(&mut self, play_beep: bool) {
        self.node.set_typed_attribute(attr::PLAY_BEEP, play_beep);
    }

    /// `direction`, defaulting to `both`.
    pub fn direction(&self) -> RecordingDirection {
        self.node
            .typed_attribute_or(attr::DIRECTION, RecordingDirection::default())
    }

    /// Set `direction`.
    pub fn set_direction(&mut self, direction: RecordingDirection) {
        self.node.set_typed_attribute(attr::DIRECTION, direction);
    }

    /// `fileFormat`, defaulting to `mp3`.
    pub fn file_format(&self) -> RecordingFileFormat {
        self.node
            .typed_attribute_or(attr::FILE_FORMAT, RecordingFileFormat::default())
    }

    /// Set `fileFormat`.
    pub fn set_file_format(&mut self, format: RecordingFileFormat) {
        self.node.set_typed_attribute(attr::FILE_FORMAT, format);
    }

    /// `background`; `false` unless set.
    pub fn background(&self) -> bool {
        self.node.typed_attribute_or(attr::BACKGROUND, false)
    }

    /// Set `background`.
    pub fn set_background(&mut self, background: bool) {
        self.node.set_typed_attribute(attr::BACKGROUND, background);
    }

    /// `trimSilence`; `false` unless set.
    pub fn trim_silence(&self) -> bool {
        self.node.typed_attribute_or(attr::TRIM_SILENCE, false)
    }

    /// Set `trimSilence`.
    pub fn set_trim_silence(&mut self, trim: bool) {
        self.node.set_typed_attribute(attr::TRIM_SILENCE, trim);
    }
}

impl_element!(Gather, Record);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inboundxml::Element;

    #[test]
    fn gather_reports_platform_defaults() {
        let gather = Gather::new(GatherOptions::default());
        assert_eq!(gather.action(), None);
        assert_eq!(gather.method(), HttpMethod::Post);
        assert_eq!(gather.timeout(), 5);
        assert_eq!(gather.finish_on_key(), "#");
        assert_eq!(gather.num_digits(), None);
        assert_eq!(gather.input(), GatherInput::Dtmf);
        assert_eq!(gather.language(), Language::En);
        assert_eq!(gather.hints(), None);
        assert_eq!(gather.node().attributes().count(), 0);
    }

    #[test]
    fn gather_malformed_values_read_as_defaults() {
        let mut gather = Gather::new(GatherOptions::default());
        gather.node_mut().set_attribute("method", "not-a-method");
        gather.node_mut().set_attribute("timeout", "soon");
        gather.node_mut().set_attribute("numDigits", "-3");

        assert_eq!(gather.method(), HttpMethod::Post);
        assert_eq!(gather.timeout(), Gather::DEFAULT_TIMEOUT);
        assert_eq!(gather.num_digits(), None);
    }

    #[test]
    fn gather_setters_store_wire_tokens() {
        let mut gather = Gather::new(GatherOptions::default());
        gather.set_method(HttpMethod::Get);
        gather.set_input(GatherInput::SpeechDtmf);
        gather.set_num_digits(4);

        assert_eq!(gather.node().attribute("method"), Some("GET"));
        assert_eq!(gather.node().attribute("input"), Some("speech dtmf"));
        assert_eq!(gather.num_digits(), Some(4));
    }

    #[test]
    fn record_reports_platform_defaults() {
        let record = Record::new(RecordOptions::default());
        assert_eq!(record.method(), HttpMethod::Post);
        assert_eq!(record.timeout(), 5);
        assert_eq!(record.finish_on_key(), "#");
        assert_eq!(record.max_length(), 3600);
        assert!(!record.transcribe());
        assert_eq!(record.transcribe_quality(), TranscribeQuality::Auto);
        assert!(record.play_beep());
        assert_eq!(record.direction(), RecordingDirection::Both);
        assert_eq!(record.file_format(), RecordingFileFormat::Mp3);
        assert!(!record.background());
        assert!(!record.trim_silence());
    }

    #[test]
    fn record_options_serialize_in_field_order() {
        let record = Record::new(RecordOptions {
            trim_silence: Some(true),
            max_length: Some(60),
            file_format: Some(RecordingFileFormat::Wav),
            ..Default::default()
        });
        let attributes = record.node().attributes().collect::<Vec<_>>();
        assert_eq!(
            attributes,
            vec![
                ("maxLength", "60"),
                ("fileFormat", "wav"),
                ("trimSilence", "true"),
            ]
        );
    }
}
