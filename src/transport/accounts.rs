use serde::Deserialize;

use crate::domain::{Account, FriendlyName};

use super::common::{Params, TransportError, push, sid};
use super::money::{TransportMoney, money};

#[derive(Debug, Deserialize)]
struct AccountJson {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    friendly_name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    account_balance: Option<TransportMoney>,
    #[serde(default)]
    time_zone: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

pub fn encode_update_account_form(friendly_name: &FriendlyName) -> Vec<(String, String)> {
    let mut params = Params::new();
    push(&mut params, FriendlyName::FIELD, friendly_name.as_str());
    params
}

pub fn decode_account(body: &str) -> Result<Account, TransportError> {
    let parsed = serde_json::from_str::<AccountJson>(body)?;
    Ok(Account {
        sid: sid("sid", parsed.sid)?,
        friendly_name: parsed.friendly_name,
        status: parsed.status,
        account_balance: money(parsed.account_balance),
        time_zone: parsed.time_zone,
        date_created: parsed.date_created,
        date_updated: parsed.date_updated,
        uri: parsed.uri,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_account() {
        let json = r#"
        {
          "sid": "AC0123456789abcdef",
          "friendly_name": "Support line",
          "status": "active",
          "account_balance": 12.5000,
          "time_zone": "UTC",
          "date_created": "Mon, 12 Feb 2018 10:00:00 +0000",
          "uri": "/v2/Accounts/AC0123456789abcdef.json"
        }
        "#;
        let account = decode_account(json).unwrap();
        assert_eq!(account.sid.as_str(), "AC0123456789abcdef");
        assert_eq!(account.friendly_name.as_deref(), Some("Support line"));
        assert_eq!(account.account_balance.as_deref(), Some("12.5000"));
        assert_eq!(account.date_updated, None);
    }

    #[test]
    fn missing_sid_is_reported() {
        let err = decode_account(r#"{"friendly_name": "x"}"#).unwrap_err();
        assert!(matches!(err, TransportError::MissingField { field: "sid" }));
    }

    #[test]
    fn encodes_friendly_name() {
        let params = encode_update_account_form(&FriendlyName::new("Sales").unwrap());
        assert_eq!(params, vec![("FriendlyName".to_owned(), "Sales".to_owned())]);
    }
}
