//! Client layer: orchestrates transport calls and maps transport ↔ domain.
//!
//! Every connector operation is a method on [`ZangClient`]; they share one
//! request path that applies basic auth, maps non-2xx answers to
//! [`ZangError`] and decodes the JSON body.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AccountSid, AuthToken, ValidationError};
use crate::transport::{self, TransportError};

mod accounts;
mod calls;
mod conferences;
mod fraud_control;
mod recordings;
mod sip_domains;
mod sms;
mod transcriptions;
mod usages;

#[cfg(test)]
mod fake;

const DEFAULT_BASE_URL: &str = "https://api.zang.io/v2";

/// Environment variable read by [`Auth::from_env`] for the account sid.
pub const ACCOUNT_SID_ENV: &str = "ZANG_ACCOUNT_SID";
/// Environment variable read by [`Auth::from_env`] for the auth token.
pub const AUTH_TOKEN_ENV: &str = "ZANG_AUTH_TOKEN";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: String,
    /// Form body for `POST`, query string otherwise.
    params: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
        auth: &'a Auth,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
        auth: &'a Auth,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let builder = match request.method {
                Method::Post => self.client.post(&request.url).form(&request.params),
                Method::Get => self
                    .client
                    .get(url::Url::parse_with_params(&request.url, &request.params)?),
                Method::Delete => self
                    .client
                    .delete(url::Url::parse_with_params(&request.url, &request.params)?),
            };
            let response = builder
                .basic_auth(
                    auth.account_sid().as_str(),
                    Some(auth.auth_token().as_str()),
                )
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Credentials for the REST API: account sid and auth token, sent as HTTP basic auth.
pub struct Auth {
    account_sid: AccountSid,
    auth_token: AuthToken,
}

impl Auth {
    /// Validate and pair the two credentials.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_sid: AccountSid::new(account_sid)?,
            auth_token: AuthToken::new(auth_token)?,
        })
    }

    /// Read [`ACCOUNT_SID_ENV`] and [`AUTH_TOKEN_ENV`].
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ValidationError> {
        let account_sid = lookup(ACCOUNT_SID_ENV).ok_or(ValidationError::MissingEnvVar {
            name: ACCOUNT_SID_ENV,
        })?;
        let auth_token = lookup(AUTH_TOKEN_ENV).ok_or(ValidationError::MissingEnvVar {
            name: AUTH_TOKEN_ENV,
        })?;
        Self::new(account_sid, auth_token)
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ZangClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (the platform's error envelope),
/// - validation/parse failures.
pub enum ZangError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code without an error envelope.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The platform rejected the request and explained why.
    #[error("API error {code:?} (HTTP {status}): {message:?}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: Option<String>,
        more_info: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The client could not be configured as requested.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ZangError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for ZangError {
    fn from(err: TransportError) -> Self {
        Self::Parse(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`ZangClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct ZangClientBuilder {
    auth: Auth,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ZangClientBuilder {
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API root (default `https://api.zang.io/v2`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`ZangClient`].
    ///
    /// Fails with [`ZangError::Config`] when the base URL is not an absolute `http(s)` URL.
    pub fn build(self) -> Result<ZangClient, ZangError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| ZangError::Transport(Box::new(err)))?;

        Ok(ZangClient {
            auth: self.auth,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<String, ZangError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed)
        .map_err(|err| ZangError::Config(format!("invalid base URL {trimmed:?}: {err}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ZangError::Config(format!(
            "base URL must use http or https: {trimmed:?}"
        )));
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone)]
/// High-level Zang REST client.
///
/// Cheap to clone; clones share one connection pool. Every operation issues
/// exactly one request.
pub struct ZangClient {
    auth: Auth,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ZangClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZangClient")
            .field("account_sid", self.auth.account_sid())
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ZangClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`ZangClient::builder`].
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(auth: Auth) -> ZangClientBuilder {
        ZangClientBuilder::new(auth)
    }

    /// Account every request is made against.
    pub fn account_sid(&self) -> &AccountSid {
        self.auth.account_sid()
    }

    /// `{base}/Accounts/{AccountSid}{path}.json`
    fn resource_url(&self, path: &str) -> String {
        format!(
            "{}/Accounts/{}{}.json",
            self.base_url,
            self.auth.account_sid().as_str(),
            path
        )
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, ZangError> {
        let request = HttpRequest {
            method,
            url: self.resource_url(path),
            params,
        };
        tracing::debug!(method = method.as_str(), path, "sending request");

        let response = self
            .http
            .send(request, &self.auth)
            .await
            .map_err(ZangError::Transport)?;
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            "received response"
        );

        if (200..=299).contains(&response.status) {
            return Ok(response.body);
        }

        if let Some(api) = transport::decode_api_error(&response.body) {
            tracing::warn!(
                status = response.status,
                code = ?api.code,
                message = ?api.message,
                "API returned an error"
            );
            return Err(ZangError::Api {
                status: response.status,
                code: api.code,
                message: api.message,
                more_info: api.more_info,
            });
        }

        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        Err(ZangError::HttpStatus {
            status: response.status,
            body,
        })
    }
}
