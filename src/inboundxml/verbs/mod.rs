//! One type per InboundXML verb.
//!
//! Every verb wraps a [`Node`](super::Node) and is built from an `*Options`
//! struct whose `Some` fields become attributes, in field order. Getters apply
//! the platform default when an attribute is absent or cannot be parsed.

mod audio;
mod call_control;
mod dial;
mod input;
mod messaging;

pub use audio::{Pause, PauseOptions, Play, PlayLastRecording, PlayOptions, Say, SayOptions};
pub use call_control::{
    Connect, ConnectOptions, Hangup, HangupOptions, Ping, PingOptions, Redirect, RedirectOptions,
    Refer, ReferOptions, Reject, RejectOptions,
};
pub use dial::{
    Agent, Conference, ConferenceOptions, Dial, DialOptions, Number, NumberOptions, Sip,
    SipOptions, User, UserOptions,
};
pub use input::{Gather, GatherOptions, Record, RecordOptions};
pub use messaging::{Mms, MmsOptions, Sms, SmsOptions};

/// Attribute names as written on the wire.
mod attr {
    pub const ACTION: &str = "action";
    pub const BACKGROUND: &str = "background";
    pub const BEEP: &str = "beep";
    pub const CALLBACK_METHOD: &str = "callbackMethod";
    pub const CALLBACK_URL: &str = "callbackUrl";
    pub const CALLER_ID: &str = "callerId";
    pub const CONFIRM_SOUND: &str = "confirmSound";
    pub const DIAL_MUSIC: &str = "dialMusic";
    pub const DIGITS_MATCH: &str = "digitsMatch";
    pub const DIRECTION: &str = "direction";
    pub const END_CONFERENCE_ON_EXIT: &str = "endConferenceOnExit";
    pub const FILE_FORMAT: &str = "fileFormat";
    pub const FINISH_ON_KEY: &str = "finishOnKey";
    pub const FORWARDED_FROM: &str = "forwardedFrom";
    pub const FROM: &str = "from";
    pub const HANGUP_ON_STAR: &str = "hangupOnStar";
    pub const HEARTBEAT_METHOD: &str = "heartbeatMethod";
    pub const HEARTBEAT_URL: &str = "heartbeatUrl";
    pub const HIDE_CALLER_ID: &str = "hideCallerId";
    pub const HINTS: &str = "hints";
    pub const IF_MACHINE: &str = "ifMachine";
    pub const IF_MACHINE_METHOD: &str = "ifMachineMethod";
    pub const IF_MACHINE_URL: &str = "ifMachineUrl";
    pub const INPUT: &str = "input";
    pub const LANGUAGE: &str = "language";
    pub const LENGTH: &str = "length";
    pub const LOOP: &str = "loop";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const MAX_PARTICIPANTS: &str = "maxParticipants";
    pub const MEDIA_URL: &str = "mediaUrl";
    pub const METHOD: &str = "method";
    pub const MUTED: &str = "muted";
    pub const NUM_DIGITS: &str = "numDigits";
    pub const PASSWORD: &str = "password";
    pub const PLAY_BEEP: &str = "playBeep";
    pub const REASON: &str = "reason";
    pub const RECORD: &str = "record";
    pub const RECORD_CALLBACK_URL: &str = "recordCallbackUrl";
    pub const RECORD_DIRECTION: &str = "recordDirection";
    pub const RECORD_FILE_FORMAT: &str = "recordFileFormat";
    pub const SCHEDULE: &str = "schedule";
    pub const SEND_DIGITS: &str = "sendDigits";
    pub const START_CONFERENCE_ON_ENTER: &str = "startConferenceOnEnter";
    pub const STATUS_CALLBACK: &str = "statusCallback";
    pub const STAY_ALONE: &str = "stayAlone";
    pub const STRAIGHT_TO_VM: &str = "straightToVm";
    pub const TIME_LIMIT: &str = "timeLimit";
    pub const TIMEOUT: &str = "timeout";
    pub const TO: &str = "to";
    pub const TRANSCRIBE: &str = "transcribe";
    pub const TRANSCRIBE_CALLBACK: &str = "transcribeCallback";
    pub const TRANSCRIBE_QUALITY: &str = "transcribeQuality";
    pub const TRIM_SILENCE: &str = "trimSilence";
    pub const USERNAME: &str = "username";
    pub const VOICE: &str = "voice";
    pub const WAIT_SOUND: &str = "waitSound";
}
