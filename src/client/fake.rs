use std::sync::{Arc, Mutex};

use super::{
    Auth, BoxFuture, HttpRequest, HttpResponse, HttpTransport, Method, StdError, ZangClient,
};

#[derive(Debug, Clone)]
pub(super) struct RecordedRequest {
    pub(super) method: Method,
    pub(super) url: String,
    pub(super) params: Vec<(String, String)>,
    pub(super) credentials: (String, String),
}

#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<RecordedRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub(super) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status: response_status,
            body: response_body.into(),
        }))
    }

    pub(super) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response,
            })),
        }
    }

    pub(super) fn last_request(&self) -> RecordedRequest {
        let state = self.state.lock().unwrap();
        state.last_request.clone().expect("no request was sent")
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
        auth: &'a Auth,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            state.last_request = Some(RecordedRequest {
                method: request.method,
                url: request.url,
                params: request.params,
                credentials: (
                    auth.account_sid().as_str().to_owned(),
                    auth.auth_token().as_str().to_owned(),
                ),
            });
            match &state.response {
                Ok(response) => Ok(response.clone()),
                Err(message) => Err(message.clone().into()),
            }
        })
    }
}

pub(super) fn make_client(transport: FakeTransport) -> ZangClient {
    ZangClient {
        auth: Auth::new("AC123", "token").unwrap(),
        base_url: "https://example.invalid/v2".to_owned(),
        http: Arc::new(transport),
    }
}

pub(super) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
    assert!(
        params.iter().any(|(k, v)| k == key && v == value),
        "missing param {key}={value}; got: {params:?}"
    );
}
