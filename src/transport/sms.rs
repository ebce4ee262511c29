use serde::Deserialize;

use crate::domain::{CallbackUrl, MessageBody, Page, SendSms, SmsFilter, SmsMessage, SmsStatus};

use super::common::{
    Params, TransportError, decode_page, encode_paging, push, push_flag, push_method, push_opt,
    sid,
};
use super::money::{TransportMoney, money};

#[derive(Debug, Deserialize)]
struct SmsJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    date_sent: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

fn sms_from_json(parsed: SmsJson) -> Result<SmsMessage, TransportError> {
    Ok(SmsMessage {
        sid: sid("sid", parsed.sid)?,
        to: parsed.to,
        from: parsed.from,
        body: parsed.body,
        status: SmsStatus::from_wire(parsed.status.as_deref().unwrap_or_default()),
        direction: parsed.direction,
        price: money(parsed.price),
        date_sent: parsed.date_sent,
        uri: parsed.uri,
    })
}

pub fn encode_send_sms_form(request: &SendSms) -> Vec<(String, String)> {
    let mut params = Params::new();
    let options = request.options();

    push(&mut params, "To", request.to().raw());
    push(&mut params, "From", request.from().raw());
    push(&mut params, MessageBody::FIELD, request.body().as_str());
    push_opt(
        &mut params,
        "StatusCallback",
        options.status_callback.as_ref().map(CallbackUrl::as_str),
    );
    push_method(
        &mut params,
        "StatusCallbackMethod",
        options.status_callback_method,
    );
    push_flag(&mut params, "AllowMultiple", options.allow_multiple);

    params
}

pub fn encode_sms_filter_query(filter: &SmsFilter) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_opt(&mut params, "To", filter.to.as_ref().map(|number| number.raw()));
    push_opt(
        &mut params,
        "From",
        filter.from.as_ref().map(|number| number.raw()),
    );
    encode_paging(&mut params, &filter.paging);
    params
}

pub fn decode_sms(body: &str) -> Result<SmsMessage, TransportError> {
    sms_from_json(serde_json::from_str(body)?)
}

pub fn decode_sms_page(body: &str) -> Result<Page<SmsMessage>, TransportError> {
    decode_page(body, sms_from_json)
}

#[cfg(test)]
mod tests {
    use crate::domain::{RawPhoneNumber, SmsOptions};

    use super::*;

    #[test]
    fn send_sms_encodes_body_verbatim() {
        let request = SendSms::new(
            RawPhoneNumber::new("+15555550100").unwrap(),
            RawPhoneNumber::new("+15555550199").unwrap(),
            MessageBody::new(" Your code is 1234 ").unwrap(),
            SmsOptions {
                allow_multiple: true,
                ..Default::default()
            },
        );
        assert_eq!(
            encode_send_sms_form(&request),
            vec![
                ("To".to_owned(), "+15555550100".to_owned()),
                ("From".to_owned(), "+15555550199".to_owned()),
                ("Body".to_owned(), " Your code is 1234 ".to_owned()),
                ("AllowMultiple".to_owned(), "true".to_owned()),
            ]
        );
    }

    #[test]
    fn decodes_sms_and_page() {
        let json = r#"{"sid": "SM42", "to": "+15555550100", "body": "hi", "status": "sent", "price": "0.0050"}"#;
        let sms = decode_sms(json).unwrap();
        assert_eq!(sms.sid.as_str(), "SM42");
        assert_eq!(sms.status, SmsStatus::Sent);
        assert_eq!(sms.price.as_deref(), Some("0.0050"));

        let json = r#"{"total": 1, "sms_messages": [{"sid": "SM1", "status": "received"}]}"#;
        let page = decode_sms_page(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].status, SmsStatus::Received);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            decode_sms("{ nope"),
            Err(TransportError::Json(_))
        ));
    }
}
