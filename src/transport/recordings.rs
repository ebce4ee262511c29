use serde::Deserialize;

use crate::domain::{Page, Recording};

use super::common::{
    TransportCount, TransportError, count, decode_page, optional_sid, sid,
};
use super::money::{TransportMoney, money};

#[derive(Debug, Deserialize)]
struct RecordingJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    call_sid: Option<String>,
    #[serde(default)]
    duration: Option<TransportCount>,
    #[serde(default)]
    recording_url: Option<String>,
    #[serde(default)]
    price: Option<TransportMoney>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

fn recording_from_json(parsed: RecordingJson) -> Result<Recording, TransportError> {
    Ok(Recording {
        sid: sid("sid", parsed.sid)?,
        call_sid: optional_sid("call_sid", parsed.call_sid)?,
        duration: count(parsed.duration),
        recording_url: parsed.recording_url,
        price: money(parsed.price),
        date_created: parsed.date_created,
        uri: parsed.uri,
    })
}

pub fn decode_recording(body: &str) -> Result<Recording, TransportError> {
    recording_from_json(serde_json::from_str(body)?)
}

pub fn decode_recording_page(body: &str) -> Result<Page<Recording>, TransportError> {
    decode_page(body, recording_from_json)
}
