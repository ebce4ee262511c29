use crate::domain::{Conference, ConferenceFilter, Page, Sid};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    pub async fn get_conference(&self, conference_sid: &Sid) -> Result<Conference, ZangError> {
        let body = self
            .execute(
                Method::Get,
                &format!("/Conferences/{conference_sid}"),
                Vec::new(),
            )
            .await?;
        Ok(transport::decode_conference(&body)?)
    }

    pub async fn list_conferences(
        &self,
        filter: &ConferenceFilter,
    ) -> Result<Page<Conference>, ZangError> {
        let params = transport::encode_conference_filter_query(filter);
        let body = self.execute(Method::Get, "/Conferences", params).await?;
        Ok(transport::decode_conference_page(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::ConferenceStatus;

    use super::super::fake::{FakeTransport, assert_param, make_client};
    use super::*;

    #[tokio::test]
    async fn get_conference_by_sid() {
        let transport = FakeTransport::new(200, r#"{"sid": "CF1", "status": "completed"}"#);
        let client = make_client(transport.clone());
        let conference = client
            .get_conference(&Sid::new("CF1").unwrap())
            .await
            .unwrap();
        assert_eq!(conference.status, ConferenceStatus::Completed);
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v2/Accounts/AC123/Conferences/CF1.json"
        );
    }

    #[tokio::test]
    async fn list_conferences_filters_by_status() {
        let transport = FakeTransport::new(200, r#"{"conferences": []}"#);
        let client = make_client(transport.clone());
        let filter = ConferenceFilter {
            status: Some(ConferenceStatus::InProgress),
            ..Default::default()
        };
        client.list_conferences(&filter).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_param(&request.params, "Status", "in-progress");
    }
}
