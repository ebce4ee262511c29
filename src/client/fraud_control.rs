use crate::domain::{CountryCode, FraudControlRule, FraudRuleOptions, Page, Paging};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    /// Stop outbound traffic of the chosen classes to a country.
    pub async fn block_destination(
        &self,
        country_code: &CountryCode,
        options: &FraudRuleOptions,
    ) -> Result<FraudControlRule, ZangError> {
        self.set_fraud_rule("Block", country_code, options).await
    }

    /// Allow outbound traffic of the chosen classes to a country.
    pub async fn authorize_destination(
        &self,
        country_code: &CountryCode,
        options: &FraudRuleOptions,
    ) -> Result<FraudControlRule, ZangError> {
        self.set_fraud_rule("Authorize", country_code, options).await
    }

    pub async fn list_fraud_control_rules(
        &self,
        paging: &Paging,
    ) -> Result<Page<FraudControlRule>, ZangError> {
        let mut params = Vec::new();
        transport::encode_paging(&mut params, paging);
        let body = self.execute(Method::Get, "/Fraud", params).await?;
        Ok(transport::decode_fraud_rule_page(&body)?)
    }

    async fn set_fraud_rule(
        &self,
        action: &str,
        country_code: &CountryCode,
        options: &FraudRuleOptions,
    ) -> Result<FraudControlRule, ZangError> {
        let params = transport::encode_fraud_rule_form(options);
        let path = format!("/Fraud/{action}/{}", country_code.as_str());
        let body = self.execute(Method::Post, &path, params).await?;
        Ok(transport::decode_fraud_rule(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakeTransport, assert_param, make_client};
    use super::*;

    #[tokio::test]
    async fn block_and_authorize_post_to_their_paths() {
        let transport = FakeTransport::new(
            200,
            r#"{"blocked": {"country_code": "CU", "mobile_enabled": false}}"#,
        );
        let client = make_client(transport.clone());
        let country = CountryCode::new("cu").unwrap();
        let options = FraudRuleOptions {
            mobile: Some(false),
            ..Default::default()
        };

        let rule = client.block_destination(&country, &options).await.unwrap();
        assert_eq!(rule.country_code.as_str(), "CU");
        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://example.invalid/v2/Accounts/AC123/Fraud/Block/CU.json"
        );
        assert_param(&request.params, "MobileEnabled", "false");

        client
            .authorize_destination(&country, &options)
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v2/Accounts/AC123/Fraud/Authorize/CU.json"
        );
    }

    #[tokio::test]
    async fn list_rules_reads_fraud_root() {
        let transport = FakeTransport::new(
            200,
            r#"{"frauds": [{"authorized": {"country_code": "US", "sms_enabled": true}}]}"#,
        );
        let client = make_client(transport.clone());
        let page = client
            .list_fraud_control_rules(&Paging::default())
            .await
            .unwrap();
        assert!(page.items[0].sms_enabled);
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v2/Accounts/AC123/Fraud.json"
        );
    }
}
