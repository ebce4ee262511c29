//! Typed Rust client for the Zang cloud telephony API.
//!
//! Two halves live in this crate:
//!
//! - [`inboundxml`]: a builder for the XML documents a webhook returns to
//!   control a live call. Nesting rules are checked at compile time.
//! - [`ZangClient`]: an async REST client for accounts, calls, SMS,
//!   conferences, recordings, transcriptions, SIP domains, fraud control and
//!   usage reports. It follows the same layering throughout: a domain layer of
//!   strong types, a transport layer for wire-format quirks, and a small client
//!   layer orchestrating requests.
//!
//! ```rust,no_run
//! use zang::{Auth, CallOptions, CallbackUrl, MakeCall, RawPhoneNumber, ZangClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zang::ZangError> {
//!     let client = ZangClient::new(Auth::from_env()?);
//!     let request = MakeCall::new(
//!         RawPhoneNumber::new("+15555550100")?,
//!         RawPhoneNumber::new("+15555550199")?,
//!         CallbackUrl::new("https://example.com/voice.xml")?,
//!         CallOptions::default(),
//!     );
//!     let call = client.make_call(&request).await?;
//!     println!("{} is {}", call.sid, call.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod inboundxml;
mod transport;

pub use client::{ACCOUNT_SID_ENV, AUTH_TOKEN_ENV, Auth, ZangClient, ZangClientBuilder, ZangError};
pub use domain::{
    Account, AccountSid, AuthToken, Call, CallFilter, CallInterrupt, CallOptions, CallStatus,
    CallbackUrl, Conference, ConferenceFilter, ConferenceStatus, CountryCode, CreateSipDomain,
    Digits, DigitsDirection, DomainName, FraudControlRule, FraudRuleOptions, FriendlyName,
    MakeCall, MessageBody, Page, PageSize, Paging, PhoneNumber, RawPhoneNumber, Recording,
    RecordingFilter, SendSms, Sid, SipDomain, SipDomainOptions, SmsFilter, SmsMessage, SmsOptions,
    SmsStatus, TranscribeOptions, Transcription, TranscriptionFilter, TranscriptionStatus, Usage,
    UsageFilter, ValidationError,
};
