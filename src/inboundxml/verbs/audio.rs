use super::attr;
use crate::inboundxml::{Language, Node, Tag, Voice};

const TONE_STREAM_SCHEME: &str = "tone_stream://";

#[derive(Debug, Clone, Default)]
pub struct SayOptions {
    pub voice: Option<Voice>,
    pub language: Option<Language>,
    /// Number of times the text is spoken; `0` repeats until the call ends.
    pub loop_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Say>`: read text to the caller with text-to-speech.
pub struct Say {
    node: Node,
}

impl Say {
    /// Speak once.
    pub const DEFAULT_LOOP: u32 = 1;

    /// Speak `text` with the given options.
    pub fn new(text: impl Into<String>, options: SayOptions) -> Self {
        let mut node = Node::new(Tag::Say);
        node.set_optional(attr::VOICE, options.voice);
        node.set_optional(attr::LANGUAGE, options.language);
        node.set_optional(attr::LOOP, options.loop_count);
        node.set_text(text);
        Self { node }
    }

    /// Words to speak.
    pub fn text(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// `voice`, defaulting to `woman`.
    pub fn voice(&self) -> Voice {
        self.node.typed_attribute_or(attr::VOICE, Voice::default())
    }

    /// Set `voice`.
    pub fn set_voice(&mut self, voice: Voice) {
        self.node.set_typed_attribute(attr::VOICE, voice);
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

    /// `loop`, defaulting to `1`.
    pub fn loop_count(&self) -> u32 {
        self.node.typed_attribute_or(attr::LOOP, Self::DEFAULT_LOOP)
    }

    /// Set `loop`.
    pub fn set_loop_count(&mut self, loop_count: u32) {
        self.node.set_typed_attribute(attr::LOOP, loop_count);
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Number of times the audio is played; `0` repeats until the call ends.
    pub loop_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Play>`: play an audio file or a generated tone stream.
pub struct Play {
    node: Node,
}

impl Play {
    /// Play once.
    pub const DEFAULT_LOOP: u32 = 1;

    /// Play the audio at `url`.
    pub fn new(url: impl Into<String>, options: PlayOptions) -> Self {
        let mut node = Node::new(Tag::Play);
        node.set_optional(attr::LOOP, options.loop_count);
        node.set_text(url);
        Self { node }
    }

    /// Play a tone stream such as `%(1000,0,350,440)`.
    ///
    /// The `tone_stream://` scheme is added unless `tones` already carries it.
    pub fn tone_stream(tones: impl Into<String>, options: PlayOptions) -> Self {
        let tones = tones.into();
        let url = if tones.starts_with(TONE_STREAM_SCHEME) {
            tones
        } else {
            format!("{TONE_STREAM_SCHEME}{tones}")
        };
        Self::new(url, options)
    }

    /// Audio URL or `tone_stream://` address.
    pub fn url(&self) -> &str {
        self.node.text().unwrap_or_default()
    }

    /// Whether this plays generated tones rather than a file.
    pub fn is_tone_stream(&self) -> bool {
        self.url().starts_with(TONE_STREAM_SCHEME)
    }

    /// `loop`, defaulting to `1`.
    pub fn loop_count(&self) -> u32 {
        self.node.typed_attribute_or(attr::LOOP, Self::DEFAULT_LOOP)
    }

    /// Set `loop`.
    pub fn set_loop_count(&mut self, loop_count: u32) {
        self.node.set_typed_attribute(attr::LOOP, loop_count);
    }
}

#[derive(Debug, Clone, Default)]
pub struct PauseOptions {
    /// Silence length in seconds.
    pub length: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<Pause>`: wait silently.
pub struct Pause {
    node: Node,
}

impl Pause {
    /// Seconds of silence when `length` is unset.
    pub const DEFAULT_LENGTH: u32 = 1;

    /// Pause for `options.length` seconds, or one second.
    pub fn new(options: PauseOptions) -> Self {
        let mut node = Node::new(Tag::Pause);
        node.set_optional(attr::LENGTH, options.length);
        Self { node }
    }

    /// `length`, defaulting to `1`.
    pub fn length(&self) -> u32 {
        self.node
            .typed_attribute_or(attr::LENGTH, Self::DEFAULT_LENGTH)
    }

    /// Set `length`.
    pub fn set_length(&mut self, seconds: u32) {
        self.node.set_typed_attribute(attr::LENGTH, seconds);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `<PlayLastRecording>`: play back the most recent recording of this call.
pub struct PlayLastRecording {
    node: Node,
}

impl PlayLastRecording {
    /// Create the verb; it takes no attributes.
    pub fn new() -> Self {
        Self {
            node: Node::new(Tag::PlayLastRecording),
        }
    }
}

impl Default for PlayLastRecording {
    fn default() -> Self {
        Self::new()
    }
}

impl_element!(Say, Play, Pause, PlayLastRecording);
