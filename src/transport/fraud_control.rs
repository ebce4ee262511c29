use serde::Deserialize;

use crate::domain::{CountryCode, FraudControlRule, FraudRuleOptions, Page};

use super::common::{Params, TransportError, TransportFlag, decode_page, flag, push_bool};

#[derive(Debug, Deserialize)]
struct FraudRuleJson {
    #[serde(default)]
    country_code: Option<String>,
    #[serde(default)]
    country_name: Option<String>,
    #[serde(default)]
    country_prefix: Option<String>,
    #[serde(default)]
    mobile_enabled: Option<TransportFlag>,
    #[serde(default)]
    landline_enabled: Option<TransportFlag>,
    #[serde(default)]
    sms_enabled: Option<TransportFlag>,
    #[serde(default)]
    is_lock: Option<TransportFlag>,
    #[serde(default)]
    date_created: Option<String>,
}

/// Rules usually arrive wrapped in an object keyed by their state.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FraudRuleEnvelope {
    Blocked { blocked: FraudRuleJson },
    Authorized { authorized: FraudRuleJson },
    Bare(FraudRuleJson),
}

impl FraudRuleEnvelope {
    fn into_rule(self) -> FraudRuleJson {
        match self {
            Self::Blocked { blocked } => blocked,
            Self::Authorized { authorized } => authorized,
            Self::Bare(rule) => rule,
        }
    }
}

fn rule_from_json(parsed: FraudRuleJson) -> Result<FraudControlRule, TransportError> {
    let field = "country_code";
    let country_code = parsed
        .country_code
        .ok_or(TransportError::MissingField { field })?;
    Ok(FraudControlRule {
        country_code: CountryCode::new(country_code)
            .map_err(|source| TransportError::InvalidField { field, source })?,
        country_name: parsed.country_name,
        country_prefix: parsed.country_prefix,
        mobile_enabled: flag(parsed.mobile_enabled).unwrap_or(false),
        landline_enabled: flag(parsed.landline_enabled).unwrap_or(false),
        sms_enabled: flag(parsed.sms_enabled).unwrap_or(false),
        is_lock: flag(parsed.is_lock).unwrap_or(false),
        date_created: parsed.date_created,
    })
}

pub fn encode_fraud_rule_form(options: &FraudRuleOptions) -> Vec<(String, String)> {
    let mut params = Params::new();
    push_bool(&mut params, "MobileEnabled", options.mobile);
    push_bool(&mut params, "LandlineEnabled", options.landline);
    push_bool(&mut params, "SmsEnabled", options.sms);
    params
}

pub fn decode_fraud_rule(body: &str) -> Result<FraudControlRule, TransportError> {
    rule_from_json(serde_json::from_str::<FraudRuleEnvelope>(body)?.into_rule())
}

pub fn decode_fraud_rule_page(body: &str) -> Result<Page<FraudControlRule>, TransportError> {
    decode_page(body, |entry: FraudRuleEnvelope| rule_from_json(entry.into_rule()))
}
