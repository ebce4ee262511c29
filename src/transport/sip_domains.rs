use serde::Deserialize;

use crate::domain::{CallbackUrl, CreateSipDomain, DomainName, FriendlyName, Page, SipDomain};

use super::common::{Params, TransportError, decode_page, push, push_method, push_opt, sid};

#[derive(Debug, Deserialize)]
struct SipDomainJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    domain_name: Option<String>,
    #[serde(default)]
    friendly_name: Option<String>,
    #[serde(default)]
    voice_url: Option<String>,
    #[serde(default)]
    voice_method: Option<String>,
    #[serde(default)]
    voice_fallback_url: Option<String>,
    #[serde(default)]
    voice_status_callback: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

fn domain_from_json(parsed: SipDomainJson) -> Result<SipDomain, TransportError> {
    Ok(SipDomain {
        sid: sid("sid", parsed.sid)?,
        domain_name: parsed.domain_name.ok_or(TransportError::MissingField {
            field: "domain_name",
        })?,
        friendly_name: parsed.friendly_name,
        voice_url: parsed.voice_url,
        voice_method: parsed.voice_method,
        voice_fallback_url: parsed.voice_fallback_url,
        voice_status_callback: parsed.voice_status_callback,
        date_created: parsed.date_created,
        uri: parsed.uri,
    })
}

pub fn encode_create_domain_form(request: &CreateSipDomain) -> Vec<(String, String)> {
    let mut params = Params::new();
    let options = request.options();

    push(&mut params, DomainName::FIELD, request.domain_name().as_str());
    push_opt(
        &mut params,
        FriendlyName::FIELD,
        options.friendly_name.as_ref().map(FriendlyName::as_str),
    );
    push_opt(
        &mut params,
        "VoiceUrl",
        options.voice_url.as_ref().map(CallbackUrl::as_str),
    );
    push_method(&mut params, "VoiceMethod", options.voice_method);
    push_opt(
        &mut params,
        "VoiceFallbackUrl",
        options.voice_fallback_url.as_ref().map(CallbackUrl::as_str),
    );
    push_method(
        &mut params,
        "VoiceFallbackMethod",
        options.voice_fallback_method,
    );
    push_opt(
        &mut params,
        "VoiceStatusCallback",
        options.voice_status_callback.as_ref().map(CallbackUrl::as_str),
    );
    push_method(
        &mut params,
        "VoiceStatusCallbackMethod",
        options.voice_status_callback_method,
    );

    params
}

pub fn decode_domain(body: &str) -> Result<SipDomain, TransportError> {
    domain_from_json(serde_json::from_str(body)?)
}

pub fn decode_domain_page(body: &str) -> Result<Page<SipDomain>, TransportError> {
    decode_page(body, domain_from_json)
}

#[cfg(test)]
mod tests {
    use crate::domain::SipDomainOptions;
    use crate::inboundxml::HttpMethod;

    use super::*;

    #[test]
    fn create_domain_encodes_name_and_voice_settings() {
        let request = CreateSipDomain::new(
            DomainName::new("acme.sip.zang.io").unwrap(),
            SipDomainOptions {
                friendly_name: Some(FriendlyName::new("Acme").unwrap()),
                voice_url: Some(CallbackUrl::new("https://example.com/sip.xml").unwrap()),
                voice_method: Some(HttpMethod::Post),
                ..Default::default()
            },
        );
        assert_eq!(
            encode_create_domain_form(&request),
            vec![
                ("DomainName".to_owned(), "acme.sip.zang.io".to_owned()),
                ("FriendlyName".to_owned(), "Acme".to_owned()),
                ("VoiceUrl".to_owned(), "https://example.com/sip.xml".to_owned()),
                ("VoiceMethod".to_owned(), "POST".to_owned()),
            ]
        );
    }

    #[test]
    fn decodes_domain_and_page() {
        let json = r#"{"sid": "DO3", "domain_name": "acme.sip.zang.io", "voice_method": "POST"}"#;
        let domain = decode_domain(json).unwrap();
        assert_eq!(domain.domain_name, "acme.sip.zang.io");
        assert_eq!(domain.voice_method.as_deref(), Some("POST"));

        let json = r#"{"domains": [{"sid": "DO1", "domain_name": "a.sip.zang.io"}]}"#;
        assert_eq!(decode_domain_page(json).unwrap().items.len(), 1);
    }

    #[test]
    fn domain_without_name_is_rejected() {
        assert!(matches!(
            decode_domain(r#"{"sid": "DO3"}"#),
            Err(TransportError::MissingField {
                field: "domain_name"
            })
        ));
    }
}
