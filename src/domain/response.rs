use crate::domain::value::{CountryCode, Sid};

macro_rules! resource_status {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($variant,)+
            /// A status this crate does not know yet, preserved as sent.
            Other(String),
        }

        impl $name {
            /// Map the platform's status string; unknown values become [`Self::Other`].
            pub fn from_wire(value: &str) -> Self {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value.trim().to_owned()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

resource_status! {
    /// Lifecycle state of a call.
    CallStatus {
        Queued => "queued",
        Ringing => "ringing",
        InProgress => "in-progress",
        Completed => "completed",
        Busy => "busy",
        Failed => "failed",
        NoAnswer => "no-answer",
        Canceled => "canceled",
    }
}

resource_status! {
    /// Delivery state of an SMS.
    SmsStatus {
        Queued => "queued",
        Sending => "sending",
        Sent => "sent",
        Delivered => "delivered",
        Undelivered => "undelivered",
        Failed => "failed",
        Received => "received",
    }
}

resource_status! {
    ConferenceStatus {
        Init => "init",
        InProgress => "in-progress",
        Completed => "completed",
    }
}

resource_status! {
    TranscriptionStatus {
        InProgress => "in-progress",
        Completed => "completed",
        Failed => "failed",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One page of a list operation.
///
/// `start` and `end` are zero-based item offsets of this page within `total`.
pub struct Page<T> {
    pub page: u32,
    pub num_pages: u32,
    pub page_size: u32,
    pub total: u32,
    pub start: u32,
    pub end: u32,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.num_pages
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub sid: Sid,
    pub friendly_name: Option<String>,
    pub status: Option<String>,
    pub account_balance: Option<String>,
    pub time_zone: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub sid: Sid,
    pub parent_call_sid: Option<Sid>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub status: CallStatus,
    pub direction: Option<String>,
    pub duration: Option<u32>,
    pub price: Option<String>,
    pub answered_by: Option<String>,
    pub caller_id_blocked: Option<bool>,
    pub date_created: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    pub sid: Sid,
    pub to: Option<String>,
    pub from: Option<String>,
    pub body: Option<String>,
    pub status: SmsStatus,
    pub direction: Option<String>,
    pub price: Option<String>,
    pub date_sent: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    pub sid: Sid,
    pub friendly_name: Option<String>,
    pub status: ConferenceStatus,
    pub active_participants_count: Option<u32>,
    pub run_time: Option<u32>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recording {
    pub sid: Sid,
    pub call_sid: Option<Sid>,
    pub duration: Option<u32>,
    pub recording_url: Option<String>,
    pub price: Option<String>,
    pub date_created: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcription {
    pub sid: Sid,
    pub recording_sid: Option<Sid>,
    pub status: TranscriptionStatus,
    pub transcription_text: Option<String>,
    pub duration: Option<u32>,
    pub price: Option<String>,
    pub date_created: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SipDomain {
    pub sid: Sid,
    pub domain_name: String,
    pub friendly_name: Option<String>,
    pub voice_url: Option<String>,
    pub voice_method: Option<String>,
    pub voice_fallback_url: Option<String>,
    pub voice_status_callback: Option<String>,
    pub date_created: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outbound-destination permissions for one country.
pub struct FraudControlRule {
    pub country_code: CountryCode,
    pub country_name: Option<String>,
    pub country_prefix: Option<String>,
    pub mobile_enabled: bool,
    pub landline_enabled: bool,
    pub sms_enabled: bool,
    /// Locked rules cannot be changed through the API.
    pub is_lock: bool,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub sid: Sid,
    pub product: Option<String>,
    pub product_id: Option<u32>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
    pub quantity: Option<u32>,
    pub average_cost: Option<String>,
    pub total_cost: Option<String>,
}
