use crate::domain::{Page, SendSms, Sid, SmsFilter, SmsMessage};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    pub async fn send_sms(&self, request: &SendSms) -> Result<SmsMessage, ZangError> {
        let params = transport::encode_send_sms_form(request);
        let body = self.execute(Method::Post, "/SMS/Messages", params).await?;
        Ok(transport::decode_sms(&body)?)
    }

    pub async fn get_sms(&self, sms_sid: &Sid) -> Result<SmsMessage, ZangError> {
        let body = self
            .execute(Method::Get, &format!("/SMS/Messages/{sms_sid}"), Vec::new())
            .await?;
        Ok(transport::decode_sms(&body)?)
    }

    pub async fn list_sms(&self, filter: &SmsFilter) -> Result<Page<SmsMessage>, ZangError> {
        let params = transport::encode_sms_filter_query(filter);
        let body = self.execute(Method::Get, "/SMS/Messages", params).await?;
        Ok(transport::decode_sms_page(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{MessageBody, RawPhoneNumber, SmsOptions, SmsStatus};

    use super::super::fake::{FakeTransport, assert_param, make_client};
    use super::*;

    #[tokio::test]
    async fn send_sms_posts_to_messages() {
        let transport = FakeTransport::new(200, r#"{"sid": "SM1", "status": "queued"}"#);
        let client = make_client(transport.clone());

        let request = SendSms::new(
            RawPhoneNumber::new("+15555550100").unwrap(),
            RawPhoneNumber::new("+15555550199").unwrap(),
            MessageBody::new("hello").unwrap(),
            SmsOptions::default(),
        );
        let sms = client.send_sms(&request).await.unwrap();
        assert_eq!(sms.status, SmsStatus::Queued);

        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://example.invalid/v2/Accounts/AC123/SMS/Messages.json"
        );
        assert_param(&request.params, "Body", "hello");
    }

    #[tokio::test]
    async fn get_and_list_sms() {
        let transport = FakeTransport::new(200, r#"{"sid": "SM1", "status": "delivered"}"#);
        let client = make_client(transport.clone());
        let sms = client.get_sms(&Sid::new("SM1").unwrap()).await.unwrap();
        assert_eq!(sms.status, SmsStatus::Delivered);
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/v2/Accounts/AC123/SMS/Messages/SM1.json"
        );

        let transport = FakeTransport::new(200, r#"{"sms_messages": [{"sid": "SM1"}]}"#);
        let client = make_client(transport.clone());
        let page = client.list_sms(&SmsFilter::default()).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(transport.last_request().params.is_empty());
    }
}
