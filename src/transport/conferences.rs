use serde::Deserialize;

use crate::domain::{Conference, ConferenceFilter, ConferenceStatus, FriendlyName, Page};

use super::common::{
    Params, TransportCount, TransportError, count, decode_page, encode_paging, push_opt, sid,
};

#[derive(Debug, Deserialize)]
struct ConferenceJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    friendly_name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    active_participants_count: Option<TransportCount>,
    #[serde(default)]
    run_time: Option<TransportCount>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

fn conference_from_json(parsed: ConferenceJson) -> Result<Conference, TransportError> {
    Ok(Conference {
        sid: sid("sid", parsed.sid)?,
        friendly_name: parsed.friendly_name,
        status: ConferenceStatus::from_wire(parsed.status.as_deref().unwrap_or_default()),
        active_participants_count: count(parsed.active_participants_count),
        run_time: count(parsed.run_time),
        date_created: parsed.date_created,
        date_updated: parsed.date_updated,
        uri: parsed.uri,
    })
}

pub fn encode_conference_filter_query(filter: &ConferenceFilter) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_opt(
        &mut params,
        FriendlyName::FIELD,
        filter.friendly_name.as_ref().map(FriendlyName::as_str),
    );
    push_opt(
        &mut params,
        "Status",
        filter.status.as_ref().map(ConferenceStatus::as_str),
    );
    encode_paging(&mut params, &filter.paging);
    params
}

pub fn decode_conference(body: &str) -> Result<Conference, TransportError> {
    conference_from_json(serde_json::from_str(body)?)
}

pub fn decode_conference_page(body: &str) -> Result<Page<Conference>, TransportError> {
    decode_page(body, conference_from_json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_conference() {
        let json = r#"{"sid": "CF9", "friendly_name": "room42", "status": "in-progress", "active_participants_count": 3}"#;
        let conference = decode_conference(json).unwrap();
        assert_eq!(conference.friendly_name.as_deref(), Some("room42"));
        assert_eq!(conference.status, ConferenceStatus::InProgress);
        assert_eq!(conference.active_participants_count, Some(3));
    }

    #[test]
    fn filter_uses_friendly_name_and_status() {
        let filter = ConferenceFilter {
            friendly_name: Some(FriendlyName::new("room42").unwrap()),
            status: Some(ConferenceStatus::Completed),
            ..Default::default()
        };
        assert_eq!(
            encode_conference_filter_query(&filter),
            vec![
                ("FriendlyName".to_owned(), "room42".to_owned()),
                ("Status".to_owned(), "completed".to_owned()),
            ]
        );
    }

    #[test]
    fn decodes_conference_page() {
        let json = r#"{"num_pages": 1, "conferences": [{"sid": "CF1", "status": "init"}]}"#;
        let page = decode_conference_page(json).unwrap();
        assert_eq!(page.items[0].status, ConferenceStatus::Init);
    }
}
