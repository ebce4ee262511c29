//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CallFilter, CallInterrupt, CallOptions, ConferenceFilter, CreateSipDomain, DigitsDirection,
    FraudRuleOptions, MakeCall, Paging, RecordingFilter, SendSms, SipDomainOptions, SmsFilter,
    SmsOptions, TranscribeOptions, TranscriptionFilter, UsageFilter,
};
pub use response::{
    Account, Call, CallStatus, Conference, ConferenceStatus, FraudControlRule, Page, Recording,
    SipDomain, SmsMessage, SmsStatus, Transcription, TranscriptionStatus, Usage,
};
pub use validation::ValidationError;
pub use value::{
    AccountSid, AuthToken, CallbackUrl, CountryCode, Digits, DomainName, FriendlyName,
    MessageBody, PageSize, PhoneNumber, RawPhoneNumber, Sid,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_sid_rejects_empty() {
        assert!(matches!(
            AccountSid::new("   "),
            Err(ValidationError::Empty {
                field: AccountSid::FIELD
            })
        ));
    }

    #[test]
    fn auth_token_rejects_empty() {
        assert!(matches!(
            AuthToken::new(""),
            Err(ValidationError::Empty {
                field: AuthToken::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::HR), " 091 234 5678 ").unwrap();
        assert_eq!(pn.raw(), "091 234 5678");
        assert_eq!(pn.e164(), "+385912345678");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::US), "(415) 555-2671").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+14155552671");
    }

    #[test]
    fn paging_defaults_leave_everything_to_the_platform() {
        let paging = Paging::default();
        assert_eq!(paging.page, None);
        assert_eq!(paging.page_size, None);

        let paging = Paging::new(2, PageSize::new(10).unwrap());
        assert_eq!(paging.page, Some(2));
        assert_eq!(paging.page_size.map(PageSize::value), Some(10));
    }

    #[test]
    fn make_call_keeps_its_parts() {
        let call = MakeCall::new(
            RawPhoneNumber::new("+15555550100").unwrap(),
            RawPhoneNumber::new("+15555550199").unwrap(),
            CallbackUrl::new("https://example.com/voice.xml").unwrap(),
            CallOptions::default(),
        );
        assert_eq!(call.to().raw(), "+15555550100");
        assert_eq!(call.from().raw(), "+15555550199");
        assert_eq!(call.url().as_str(), "https://example.com/voice.xml");
        assert!(!call.options().record);
    }
}
