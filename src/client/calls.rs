use crate::domain::{
    Call, CallFilter, CallInterrupt, Digits, DigitsDirection, MakeCall, Page, Sid,
};
use crate::transport;

use super::{Method, ZangClient, ZangError};

impl ZangClient {
    /// Place an outbound call. The platform fetches InboundXML from the request's URL once the
    /// call connects.
    pub async fn make_call(&self, request: &MakeCall) -> Result<Call, ZangError> {
        let params = transport::encode_make_call_form(request);
        let body = self.execute(Method::Post, "/Calls", params).await?;
        Ok(transport::decode_call(&body)?)
    }

    pub async fn get_call(&self, call_sid: &Sid) -> Result<Call, ZangError> {
        let body = self
            .execute(Method::Get, &format!("/Calls/{call_sid}"), Vec::new())
            .await?;
        Ok(transport::decode_call(&body)?)
    }

    pub async fn list_calls(&self, filter: &CallFilter) -> Result<Page<Call>, ZangError> {
        let params = transport::encode_call_filter_query(filter);
        let body = self.execute(Method::Get, "/Calls", params).await?;
        Ok(transport::decode_call_page(&body)?)
    }

    /// Hang up, cancel or redirect a live call.
    pub async fn interrupt_call(
        &self,
        call_sid: &Sid,
        interrupt: &CallInterrupt,
    ) -> Result<Call, ZangError> {
        let params = transport::encode_interrupt_call_form(interrupt);
        let body = self
            .execute(Method::Post, &format!("/Calls/{call_sid}"), params)
            .await?;
        Ok(transport::decode_call(&body)?)
    }

    /// Play DTMF tones into a live call.
    pub async fn send_digits(
        &self,
        call_sid: &Sid,
        digits: &Digits,
        direction: DigitsDirection,
    ) -> Result<Call, ZangError> {
        let params = transport::encode_send_digits_form(digits, direction);
        let body = self
            .execute(Method::Post, &format!("/Calls/{call_sid}"), params)
            .await?;
        Ok(transport::decode_call(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{CallOptions, CallStatus, CallbackUrl, RawPhoneNumber};
    use crate::inboundxml::HttpMethod;

    use super::super::fake::{FakeTransport, assert_param, make_client};
    use super::*;

    const CALL_JSON: &str = r#"
    {
      "sid": "CA42",
      "to": "+15555550100",
      "from": "+15555550199",
      "status": "queued",
      "direction": "outbound-api"
    }
    "#;

    #[tokio::test]
    async fn make_call_posts_form_to_calls() {
        let transport = FakeTransport::new(200, CALL_JSON);
        let client = make_client(transport.clone());

        let request = MakeCall::new(
            RawPhoneNumber::new("+15555550100").unwrap(),
            RawPhoneNumber::new("+15555550199").unwrap(),
            CallbackUrl::new("https://example.com/voice.xml").unwrap(),
            CallOptions {
                hide_caller_id: true,
                ..Default::default()
            },
        );
        let call = client.make_call(&request).await.unwrap();
        assert_eq!(call.sid.as_str(), "CA42");
        assert_eq!(call.status, CallStatus::Queued);

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url,
            "https://example.invalid/v2/Accounts/AC123/Calls.json"
        );
        assert_param(&request.params, "To", "+15555550100");
        assert_param(&request.params, "From", "+15555550199");
        assert_param(&request.params, "Url", "https://example.com/voice.xml");
        assert_param(&request.params, "HideCallerId", "true");
    }

    #[tokio::test]
    async fn get_and_list_calls_use_get() {
        let transport = FakeTransport::new(200, CALL_JSON);
        let client = make_client(transport.clone());
        client.get_call(&Sid::new("CA42").unwrap()).await.unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url,
            "https://example.invalid/v2/Accounts/AC123/Calls/CA42.json"
        );

        let transport = FakeTransport::new(200, r#"{"total": 0, "calls": []}"#);
        let client = make_client(transport.clone());
        let filter = CallFilter {
            to: Some(RawPhoneNumber::new("+15555550100").unwrap()),
            ..Default::default()
        };
        let page = client.list_calls(&filter).await.unwrap();
        assert!(page.items.is_empty());

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_param(&request.params, "To", "+15555550100");
    }

    #[tokio::test]
    async fn interrupt_and_send_digits_post_to_the_call() {
        let transport = FakeTransport::new(200, CALL_JSON);
        let client = make_client(transport.clone());
        let sid = Sid::new("CA42").unwrap();

        client
            .interrupt_call(
                &sid,
                &CallInterrupt::Redirect {
                    url: CallbackUrl::new("https://example.com/next.xml").unwrap(),
                    method: Some(HttpMethod::Get),
                },
            )
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(
            request.url,
            "https://example.invalid/v2/Accounts/AC123/Calls/CA42.json"
        );
        assert_param(&request.params, "Url", "https://example.com/next.xml");
        assert_param(&request.params, "Method", "GET");

        client
            .send_digits(&sid, &Digits::new("1234#").unwrap(), DigitsDirection::Out)
            .await
            .unwrap();
        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_param(&request.params, "PlayDtmf", "1234#");
        assert_param(&request.params, "PlayDtmfDirection", "out");
    }
}
