use serde::Deserialize;

use crate::domain::{
    CallbackUrl, Page, Transcription, TranscriptionFilter, TranscriptionStatus, TranscribeOptions,
};

use super::common::{
    Params, TransportCount, TransportError, count, decode_page, encode_paging, optional_sid,
    push_method, push_opt, sid,
};
use super::money::{TransportMoney, money};

#[derive(Debug, Deserialize)]
struct TranscriptionJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    recording_sid: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    transcription_text: Option<String>,
    #[serde(default)]
    duration: Option<TransportCount>,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

fn transcription_from_json(parsed: TranscriptionJson) -> Result<Transcription, TransportError> {
    Ok(Transcription {
        sid: sid("sid", parsed.sid)?,
        recording_sid: optional_sid("recording_sid", parsed.recording_sid)?,
        status: TranscriptionStatus::from_wire(parsed.status.as_deref().unwrap_or_default()),
        transcription_text: parsed.transcription_text,
        duration: count(parsed.duration),
        price: money(parsed.price),
        date_created: parsed.date_created,
        uri: parsed.uri,
    })
}

pub fn encode_transcription_filter_query(filter: &TranscriptionFilter) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_opt(
        &mut params,
        "Status",
        filter.status.as_ref().map(TranscriptionStatus::as_str),
    );
    encode_paging(&mut params, &filter.paging);
    params
}

pub fn encode_transcribe_form(options: &TranscribeOptions) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_opt(
        &mut params,
        "TranscribeCallback",
        options.callback.as_ref().map(CallbackUrl::as_str),
    );
    push_method(&mut params, "CallbackMethod", options.callback_method);
    push_opt(
        &mut params,
        "TranscribeQuality",
        options.quality.map(|quality| quality.as_str()),
    );
    params
}

pub fn decode_transcription(body: &str) -> Result<Transcription, TransportError> {
    transcription_from_json(serde_json::from_str(body)?)
}

pub fn decode_transcription_page(body: &str) -> Result<Page<Transcription>, TransportError> {
    decode_page(body, transcription_from_json)
}
