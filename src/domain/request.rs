use crate::domain::response::{CallStatus, ConferenceStatus, TranscriptionStatus};
use crate::domain::value::{
    CallbackUrl, Digits, DomainName, FriendlyName, MessageBody, PageSize, RawPhoneNumber, Sid,
};
use crate::inboundxml::{HttpMethod, IfMachine, TranscribeQuality};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Page selection for list operations.
///
/// Unset fields are left to the platform (first page, 50 items).
pub struct Paging {
    /// Zero-based page number.
    pub page: Option<u32>,
    pub page_size: Option<PageSize>,
}

impl Paging {
    pub fn new(page: u32, page_size: PageSize) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

#[derive(Debug, Clone, Default)]
/// Optional parameters of an outbound call.
pub struct CallOptions {
    pub method: Option<HttpMethod>,
    pub fallback_url: Option<CallbackUrl>,
    pub fallback_method: Option<HttpMethod>,
    pub status_callback: Option<CallbackUrl>,
    pub status_callback_method: Option<HttpMethod>,
    pub heartbeat_url: Option<CallbackUrl>,
    pub forwarded_from: Option<RawPhoneNumber>,
    pub caller_name: Option<String>,
    /// Digits to play once the call is answered.
    pub send_digits: Option<Digits>,
    /// Seconds to let the call ring.
    pub timeout: Option<u32>,
    pub hide_caller_id: bool,
    pub record: bool,
    pub if_machine: Option<IfMachine>,
    pub if_machine_url: Option<CallbackUrl>,
}

#[derive(Debug, Clone)]
/// Place an outbound call whose flow is driven by the InboundXML at `url`.
pub struct MakeCall {
    to: RawPhoneNumber,
    from: RawPhoneNumber,
    url: CallbackUrl,
    options: CallOptions,
}

impl MakeCall {
    pub fn new(
        to: RawPhoneNumber,
        from: RawPhoneNumber,
        url: CallbackUrl,
        options: CallOptions,
    ) -> Self {
        Self {
            to,
            from,
            url,
            options,
        }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &RawPhoneNumber {
        &self.from
    }

    pub fn url(&self) -> &CallbackUrl {
        &self.url
    }

    pub fn options(&self) -> &CallOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallFilter {
    pub to: Option<RawPhoneNumber>,
    pub from: Option<RawPhoneNumber>,
    pub status: Option<CallStatus>,
    pub paging: Paging,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What to do with a call that is already in progress.
pub enum CallInterrupt {
    /// End an answered call.
    Hangup,
    /// End a call that has not been answered yet.
    Cancel,
    /// Continue the call with the InboundXML at `url`.
    Redirect {
        url: CallbackUrl,
        method: Option<HttpMethod>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Which leg of a call hears digits sent with `send_digits`.
pub enum DigitsDirection {
    In,
    #[default]
    Out,
}

impl DigitsDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsOptions {
    pub status_callback: Option<CallbackUrl>,
    pub status_callback_method: Option<HttpMethod>,
    /// Split bodies over 160 characters into several messages instead of truncating.
    pub allow_multiple: bool,
}

#[derive(Debug, Clone)]
pub struct SendSms {
    to: RawPhoneNumber,
    from: RawPhoneNumber,
    body: MessageBody,
    options: SmsOptions,
}

impl SendSms {
    pub fn new(
        to: RawPhoneNumber,
        from: RawPhoneNumber,
        body: MessageBody,
        options: SmsOptions,
    ) -> Self {
        Self {
            to,
            from,
            body,
            options,
        }
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn from(&self) -> &RawPhoneNumber {
        &self.from
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn options(&self) -> &SmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct SmsFilter {
    pub to: Option<RawPhoneNumber>,
    pub from: Option<RawPhoneNumber>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Default)]
pub struct ConferenceFilter {
    pub friendly_name: Option<FriendlyName>,
    pub status: Option<ConferenceStatus>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingFilter {
    /// Only recordings made during this call.
    pub call_sid: Option<Sid>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Default)]
pub struct TranscriptionFilter {
    pub status: Option<TranscriptionStatus>,
    pub paging: Paging,
}

#[derive(Debug, Clone, Default)]
pub struct TranscribeOptions {
    pub callback: Option<CallbackUrl>,
    pub callback_method: Option<HttpMethod>,
    pub quality: Option<TranscribeQuality>,
}

#[derive(Debug, Clone, Default)]
pub struct SipDomainOptions {
    pub friendly_name: Option<FriendlyName>,
    pub voice_url: Option<CallbackUrl>,
    pub voice_method: Option<HttpMethod>,
    pub voice_fallback_url: Option<CallbackUrl>,
    pub voice_fallback_method: Option<HttpMethod>,
    pub voice_status_callback: Option<CallbackUrl>,
    pub voice_status_callback_method: Option<HttpMethod>,
}

#[derive(Debug, Clone)]
pub struct CreateSipDomain {
    domain_name: DomainName,
    options: SipDomainOptions,
}

impl CreateSipDomain {
    pub fn new(domain_name: DomainName, options: SipDomainOptions) -> Self {
        Self {
            domain_name,
            options,
        }
    }

    pub fn domain_name(&self) -> &DomainName {
        &self.domain_name
    }

    pub fn options(&self) -> &SipDomainOptions {
        &self.options
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Destination classes a fraud control rule applies to; `None` leaves a class unchanged.
pub struct FraudRuleOptions {
    pub mobile: Option<bool>,
    pub landline: Option<bool>,
    pub sms: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageFilter {
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
    /// Numeric product id, e.g. outbound calls or inbound SMS.
    pub product: Option<u32>,
    pub paging: Paging,
}
