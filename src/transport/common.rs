use serde::Deserialize;

use crate::domain::{Page, Paging, PageSize, Sid, ValidationError};
use crate::inboundxml::HttpMethod;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response field {field} is invalid: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("response is missing {field}")]
    MissingField { field: &'static str },
}

/// Error envelope returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub more_info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorJson {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    more_info: Option<String>,
}

/// Decode the platform error envelope, if `body` is one.
pub fn decode_api_error(body: &str) -> Option<ApiErrorBody> {
    let parsed = serde_json::from_str::<ApiErrorJson>(body).ok()?;
    if parsed.code.is_none() && parsed.message.is_none() {
        return None;
    }
    Some(ApiErrorBody {
        code: parsed.code,
        message: parsed.message,
        more_info: parsed.more_info,
    })
}

/// Paged list envelope. The collection key differs per resource.
#[derive(Debug, Deserialize)]
pub(super) struct PageJson<T> {
    #[serde(default)]
    page: Option<TransportCount>,
    #[serde(default)]
    num_pages: Option<TransportCount>,
    #[serde(default)]
    page_size: Option<TransportCount>,
    #[serde(default)]
    total: Option<TransportCount>,
    #[serde(default)]
    start: Option<TransportCount>,
    #[serde(default)]
    end: Option<TransportCount>,
    #[serde(
        default = "Vec::new",
        rename = "items",
        alias = "calls",
        alias = "sms_messages",
        alias = "conferences",
        alias = "recordings",
        alias = "transcriptions",
        alias = "domains",
        alias = "frauds",
        alias = "usages"
    )]
    items: Vec<T>,
}

impl<T> PageJson<T> {
    pub(super) fn into_page<U>(
        self,
        convert: impl FnMut(T) -> Result<U, TransportError>,
    ) -> Result<Page<U>, TransportError> {
        let items = self
            .items
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            page: count(self.page).unwrap_or(0),
            num_pages: count(self.num_pages).unwrap_or(1),
            page_size: count(self.page_size).unwrap_or(PageSize::DEFAULT),
            total: count(self.total).unwrap_or(items.len() as u32),
            start: count(self.start).unwrap_or(0),
            end: count(self.end).unwrap_or(0),
            items,
        })
    }
}

pub(super) fn decode_page<T, U>(
    body: &str,
    convert: impl FnMut(T) -> Result<U, TransportError>,
) -> Result<Page<U>, TransportError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str::<PageJson<T>>(body)?.into_page(convert)
}

/// Count returned as either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(super) enum TransportCount {
    Number(u32),
    String(String),
}

impl TransportCount {
    pub(super) fn value(self) -> Option<u32> {
        match self {
            Self::Number(value) => Some(value),
            Self::String(value) => value.trim().parse().ok(),
        }
    }
}

/// Flag returned as a JSON bool, `0`/`1`, or a string of either.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(super) enum TransportFlag {
    Bool(bool),
    Number(u8),
    String(String),
}

impl TransportFlag {
    pub(super) fn value(self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(value),
            Self::Number(value) => Some(value != 0),
            Self::String(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

pub(super) fn count(value: Option<TransportCount>) -> Option<u32> {
    value.and_then(TransportCount::value)
}

pub(super) fn flag(value: Option<TransportFlag>) -> Option<bool> {
    value.and_then(TransportFlag::value)
}

pub(super) fn sid(field: &'static str, value: Option<String>) -> Result<Sid, TransportError> {
    let value = value.ok_or(TransportError::MissingField { field })?;
    Sid::new(value).map_err(|source| TransportError::InvalidField { field, source })
}

pub(super) fn optional_sid(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<Sid>, TransportError> {
    match value {
        Some(value) if !value.trim().is_empty() => sid(field, Some(value)).map(Some),
        _ => Ok(None),
    }
}

pub(super) type Params = Vec<(String, String)>;

pub(super) fn push(params: &mut Params, key: &str, value: impl Into<String>) {
    params.push((key.to_owned(), value.into()));
}

pub(super) fn push_opt<T>(params: &mut Params, key: &str, value: Option<T>)
where
    T: Into<String>,
{
    if let Some(value) = value {
        push(params, key, value);
    }
}

pub(super) fn push_method(params: &mut Params, key: &str, method: Option<HttpMethod>) {
    push_opt(params, key, method.map(|method| method.as_str()));
}

/// Flags are only sent when set, so the platform default applies otherwise.
pub(super) fn push_flag(params: &mut Params, key: &str, value: bool) {
    if value {
        push(params, key, "true");
    }
}

pub(super) fn push_bool(params: &mut Params, key: &str, value: Option<bool>) {
    push_opt(params, key, value.map(|value| value.to_string()));
}

pub fn encode_paging(params: &mut Vec<(String, String)>, paging: &Paging) {
    push_opt(params, "Page", paging.page.map(|page| page.to_string()));
    push_opt(
        params,
        PageSize::FIELD,
        paging.page_size.map(|size| size.value().to_string()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_envelope_is_recognized() {
        let body = r#"{"status": 401, "code": 10004, "message": "Unauthorized", "more_info": "https://docs.zang.io/errors/10004"}"#;
        let err = decode_api_error(body).unwrap();
        assert_eq!(err.code, Some(10004));
        assert_eq!(err.message.as_deref(), Some("Unauthorized"));
        assert_eq!(
            err.more_info.as_deref(),
            Some("https://docs.zang.io/errors/10004")
        );

        assert_eq!(decode_api_error(r#"{"sid": "CA1"}"#), None);
        assert_eq!(decode_api_error("<html>bad gateway</html>"), None);
    }

    #[test]
    fn counts_and_flags_accept_strings() {
        assert_eq!(TransportCount::String(" 12 ".to_owned()).value(), Some(12));
        assert_eq!(TransportCount::String("n/a".to_owned()).value(), None);
        assert_eq!(TransportFlag::Number(0).value(), Some(false));
        assert_eq!(TransportFlag::String("True".to_owned()).value(), Some(true));
        assert_eq!(TransportFlag::String("maybe".to_owned()).value(), None);
    }

    #[test]
    fn page_envelope_reads_any_collection_key() {
        let json = r#"{
            "page": 1, "num_pages": "3", "page_size": 2, "total": 5,
            "start": 2, "end": 3,
            "recordings": [{"sid": "RE1"}, {"sid": "RE2"}]
        }"#;

        #[derive(Deserialize)]
        struct Item {
            sid: String,
        }

        let page = decode_page::<Item, _>(json, |item| Ok(item.sid)).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.num_pages, 3);
        assert_eq!(page.total, 5);
        assert_eq!(page.start, 2);
        assert_eq!(page.end, 3);
        assert_eq!(page.items, vec!["RE1".to_owned(), "RE2".to_owned()]);
    }

    #[test]
    fn empty_page_envelope_uses_defaults() {
        let page = decode_page::<serde_json::Value, _>("{}", |item| Ok(item)).unwrap();
        assert_eq!(page.page, 0);
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.page_size, PageSize::DEFAULT);
        assert!(page.items.is_empty());
    }

    #[test]
    fn paging_is_encoded_only_when_set() {
        let mut params = Vec::new();
        encode_paging(&mut params, &Paging::default());
        assert!(params.is_empty());

        encode_paging(&mut params, &Paging::new(3, PageSize::new(20).unwrap()));
        assert_eq!(
            params,
            vec![
                ("Page".to_owned(), "3".to_owned()),
                ("PageSize".to_owned(), "20".to_owned()),
            ]
        );
    }
}
