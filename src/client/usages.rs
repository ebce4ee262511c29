use crate::domain::{Page, Sid, Usage, UsageFilter};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    pub async fn get_usage(&self, usage_sid: &Sid) -> Result<Usage, ZangError> {
        let body = self
            .execute(Method::Get, &format!("/Usages/{usage_sid}"), Vec::new())
            .await?;
        Ok(transport::decode_usage(&body)?)
    }

    /// Usage records, filtered by day/month/year and product.
    pub async fn list_usages(&self, filter: &UsageFilter) -> Result<Page<Usage>, ZangError> {
        let params = transport::encode_usage_filter_query(filter);
        let body = self.execute(Method::Get, "/Usages", params).await?;
        Ok(transport::decode_usage_page(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fake::{FakeTransport, assert_param, make_client};
    use super::*;

    #[tokio::test]
    async fn list_usages_sends_period_filter() {
        let transport = FakeTransport::new(200, r#"{"usages": [{"sid": "UR1", "quantity": 3}]}"#);
        let client = make_client(transport.clone());
        let filter = UsageFilter {
            year: Some(2018),
            ..Default::default()
        };
        let page = client.list_usages(&filter).await.unwrap();
        assert_eq!(page.items[0].quantity, Some(3));

        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://example.invalid/v2/Accounts/AC123/Usages.json"
        );
        assert_param(&request.params, "Year", "2018");
    }

    #[tokio::test]
    async fn get_usage_by_sid() {
        let transport = FakeTransport::new(200, r#"{"sid": "UR1", "product": "Outbound SMS"}"#);
        let client = make_client(transport.clone());
        let usage = client.get_usage(&Sid::new("UR1").unwrap()).await.unwrap();
        assert_eq!(usage.product.as_deref(), Some("Outbound SMS"));
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v2/Accounts/AC123/Usages/UR1.json"
        );
    }
}
