use super::{AttributeValue, InboundXmlError};

define_wire_enum! {
    /// HTTP method used for `action`/callback requests.
    #[derive(Default)]
    pub enum HttpMethod {
        Get => "GET",
        #[default]
        Post => "POST",
    }
}

define_wire_enum! {
    /// Text-to-speech voice for `<Say>`.
    #[derive(Default)]
    pub enum Voice {
        Man => "man",
        #[default]
        Woman => "woman",
    }
}

define_wire_enum! {
    /// Language for `<Say>` speech and `<Gather>` speech recognition.
    #[derive(Default)]
    pub enum Language {
        #[default]
        En => "en",
        EnGb => "en-gb",
        Es => "es",
        Fr => "fr",
        It => "it",
        De => "de",
    }
}

define_wire_enum! {
    /// Input modes accepted by `<Gather>`.
    #[derive(Default)]
    pub enum GatherInput {
        #[default]
        Dtmf => "dtmf",
        Speech => "speech",
        SpeechDtmf => "speech dtmf",
    }
}

define_wire_enum! {
    /// Which call legs are recorded.
    #[derive(Default)]
    pub enum RecordingDirection {
        In => "in",
        Out => "out",
        #[default]
        Both => "both",
    }
}

define_wire_enum! {
    /// Audio container for recordings.
    #[derive(Default)]
    pub enum RecordingFileFormat {
        #[default]
        Mp3 => "mp3",
        Wav => "wav",
    }
}

define_wire_enum! {
    /// Transcription quality for `<Record transcribe="true">`.
    #[derive(Default)]
    pub enum TranscribeQuality {
        #[default]
        Auto => "auto",
        Hybrid => "hybrid",
        Keywords => "keywords",
    }
}

define_wire_enum! {
    /// Reason reported to the caller by `<Reject>` and `<Hangup>`.
    #[derive(Default)]
    pub enum RejectReason {
        #[default]
        Rejected => "rejected",
        Busy => "busy",
    }
}

define_wire_enum! {
    /// What `<Dial>` does when answering machine detection fires.
    #[derive(Default)]
    pub enum IfMachine {
        #[default]
        Continue => "continue",
        Redirect => "redirect",
        Hangup => "hangup",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Participant cap for `<Conference maxParticipants>`.
///
/// Invariant: `1..=40`.
pub struct MaxParticipants(u8);

impl MaxParticipants {
    /// Attribute name used by InboundXML.
    pub const FIELD: &'static str = "maxParticipants";

    /// Minimum allowed value.
    pub const MIN: u8 = 1;
    /// Maximum allowed value, also the platform default.
    pub const MAX: u8 = 40;

    /// Create a validated participant cap.
    ///
    /// Takes a `u32` so out-of-range requests such as `500` are rejected
    /// instead of being truncated by a cast.
    pub fn new(value: u32) -> Result<Self, InboundXmlError> {
        u8::try_from(value)
            .ok()
            .filter(|value| (Self::MIN..=Self::MAX).contains(value))
            .map(Self)
            .ok_or_else(|| InboundXmlError::InvalidAttributeValue {
                attribute: Self::FIELD,
                value: value.to_string(),
                expected: "1..=40",
            })
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for MaxParticipants {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl AttributeValue for MaxParticipants {
    fn to_attribute(&self) -> String {
        self.0.to_string()
    }

    fn from_attribute(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(|value| Self::new(value).ok())
    }
}
