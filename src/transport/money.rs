use serde::Deserialize;
use serde::de::Error as _;
use serde_json::value::RawValue;

/// Amount field (`price`, `account_balance`, costs) sent as a JSON string or number.
///
/// Numbers keep their raw token, so `0.0350` stays `"0.0350"` rather than
/// being reformatted as `0.035`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMoney(String);

impl TransportMoney {
    fn from_token(token: &str) -> Result<Self, serde_json::Error> {
        if token.starts_with('"') {
            return serde_json::from_str::<String>(token).map(Self);
        }
        let numeric = token.starts_with(|c: char| c == '-' || c.is_ascii_digit());
        if !numeric {
            return Err(serde_json::Error::custom(format!(
                "expected an amount as JSON string or number, got {token}"
            )));
        }
        Ok(Self(token.to_owned()))
    }
}

impl<'de> Deserialize<'de> for TransportMoney {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::from_token(raw.get()).map_err(D::Error::custom)
    }
}

pub(super) fn money(value: Option<TransportMoney>) -> Option<String> {
    value.map(|amount| amount.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(default)]
        price: Option<TransportMoney>,
    }

    fn price(json: &str) -> Option<String> {
        money(serde_json::from_str::<Priced>(json).unwrap().price)
    }

    #[test]
    fn numbers_keep_their_original_token() {
        assert_eq!(price(r#"{"price": 0.0350}"#).as_deref(), Some("0.0350"));
        assert_eq!(price(r#"{"price": -1.20}"#).as_deref(), Some("-1.20"));
    }

    #[test]
    fn strings_and_null_are_accepted() {
        assert_eq!(price(r#"{"price": "0.02"}"#).as_deref(), Some("0.02"));
        assert_eq!(price(r#"{"price": null}"#), None);
        assert_eq!(price("{}"), None);
    }

    #[test]
    fn other_json_is_rejected() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": true}"#).is_err());
        assert!(TransportMoney::from_token("[1]").is_err());
    }
}
