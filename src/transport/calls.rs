use serde::Deserialize;

use crate::domain::{
    Call, CallFilter, CallInterrupt, CallStatus, CallbackUrl, Digits, DigitsDirection, MakeCall,
    Page,
};

use super::common::{
    Params, TransportCount, TransportError, TransportFlag, count, decode_page, encode_paging, flag,
    optional_sid, push, push_flag, push_method, push_opt, sid,
};
use super::money::{TransportMoney, money};

#[derive(Debug, Deserialize)]
struct CallJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    parent_call_sid: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    duration: Option<TransportCount>,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    answered_by: Option<String>,
    #[serde(default)]
    caller_id_blocked: Option<TransportFlag>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

fn call_from_json(parsed: CallJson) -> Result<Call, TransportError> {
    Ok(Call {
        sid: sid("sid", parsed.sid)?,
        parent_call_sid: optional_sid("parent_call_sid", parsed.parent_call_sid)?,
        to: parsed.to,
        from: parsed.from,
        status: CallStatus::from_wire(parsed.status.as_deref().unwrap_or_default()),
        direction: parsed.direction,
        duration: count(parsed.duration),
        price: money(parsed.price),
        answered_by: parsed.answered_by,
        caller_id_blocked: flag(parsed.caller_id_blocked),
        date_created: parsed.date_created,
        start_time: parsed.start_time,
        end_time: parsed.end_time,
        uri: parsed.uri,
    })
}

pub fn encode_make_call_form(request: &MakeCall) -> Vec<(String, String)> {
    let mut params = Params::new();
    let options = request.options();

    push(&mut params, "To", request.to().raw());
    push(&mut params, "From", request.from().raw());
    push(&mut params, CallbackUrl::FIELD, request.url().as_str());
    push_method(&mut params, "Method", options.method);
    push_opt(
        &mut params,
        "FallbackUrl",
        options.fallback_url.as_ref().map(CallbackUrl::as_str),
    );
    push_method(&mut params, "FallbackMethod", options.fallback_method);
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
    push_opt(
        &mut params,
        "HeartbeatUrl",
        options.heartbeat_url.as_ref().map(CallbackUrl::as_str),
    );
    push_opt(
        &mut params,
        "ForwardedFrom",
        options.forwarded_from.as_ref().map(|number| number.raw()),
    );
    push_opt(&mut params, "CallerName", options.caller_name.as_deref());
    push_opt(
        &mut params,
        Digits::FIELD,
        options.send_digits.as_ref().map(Digits::as_str),
    );
    push_opt(
        &mut params,
        "Timeout",
        options.timeout.map(|timeout| timeout.to_string()),
    );
    push_flag(&mut params, "HideCallerId", options.hide_caller_id);
    push_flag(&mut params, "Record", options.record);
    push_opt(
        &mut params,
        "IfMachine",
        options.if_machine.map(|value| value.as_str()),
    );
    push_opt(
        &mut params,
        "IfMachineUrl",
        options.if_machine_url.as_ref().map(CallbackUrl::as_str),
    );

    params
}

pub fn encode_call_filter_query(filter: &CallFilter) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_opt(&mut params, "To", filter.to.as_ref().map(|number| number.raw()));
    push_opt(
        &mut params,
        "From",
        filter.from.as_ref().map(|number| number.raw()),
    );
    push_opt(&mut params, "Status", filter.status.as_ref().map(CallStatus::as_str));
    encode_paging(&mut params, &filter.paging);
    params
}

pub fn encode_interrupt_call_form(interrupt: &CallInterrupt) -> Vec<(String, String)> {
    let mut params = Params::new();
    match interrupt {
        CallInterrupt::Hangup => push(&mut params, "Status", "completed"),
        CallInterrupt::Cancel => push(&mut params, "Status", "canceled"),
        CallInterrupt::Redirect { url, method } => {
            push(&mut params, CallbackUrl::FIELD, url.as_str());
            push_method(&mut params, "Method", *method);
        }
    }
    params
}

pub fn encode_send_digits_form(
    digits: &Digits,
    direction: DigitsDirection,
) -> Vec<(String, String)> {
    let mut params = Params::new();
    push(&mut params, "PlayDtmf", digits.as_str());
    push(&mut params, "PlayDtmfDirection", direction.as_str());
    params
}

pub fn decode_call(body: &str) -> Result<Call, TransportError> {
    call_from_json(serde_json::from_str(body)?)
}

pub fn decode_call_page(body: &str) -> Result<Page<Call>, TransportError> {
    decode_page(body, call_from_json)
}
