use crate::domain::{Account, FriendlyName};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    /// Fetch the account the client is authenticated as.
    pub async fn get_account(&self) -> Result<Account, ZangError> {
        let body = self.execute(Method::Get, "", Vec::new()).await?;
        Ok(transport::decode_account(&body)?)
    }

    /// Rename the account.
    pub async fn update_account(&self, friendly_name: &FriendlyName) -> Result<Account, ZangError> {
        let params = transport::encode_update_account_form(friendly_name);
        let body = self.execute(Method::Post, "", params).await?;
        Ok(transport::decode_account(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakeTransport, assert_param, make_client};
    use super::*;

    const ACCOUNT_JSON: &str = r#"{"sid": "AC123", "friendly_name": "Sales", "status": "active"}"#;

    #[tokio::test]
    async fn get_account_reads_account_root() {
        let transport = FakeTransport::new(200, ACCOUNT_JSON);
        let client = make_client(transport.clone());

        let account = client.get_account().await.unwrap();
        assert_eq!(account.sid.as_str(), "AC123");
        assert_eq!(account.status.as_deref(), Some("active"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://example.invalid/v2/Accounts/AC123.json");
    }

    #[tokio::test]
    async fn update_account_posts_friendly_name() {
        let transport = FakeTransport::new(200, ACCOUNT_JSON);
        let client = make_client(transport.clone());

        let name = FriendlyName::new("Sales").unwrap();
        client.update_account(&name).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_param(&request.params, "FriendlyName", "Sales");
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let client = make_client(FakeTransport::new(200, "{ not json }"));
        let err = client.get_account().await.unwrap_err();
        assert!(matches!(err, ZangError::Parse(_)));
    }
}
