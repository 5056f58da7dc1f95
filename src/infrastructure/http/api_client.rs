//! Thin JSON client for the platform REST API.
//!
//! Every response passes through one decode path: 401 becomes
//! [`ApiError::SessionExpired`], other non-success statuses become
//! [`ApiError::RequestFailed`] carrying the status text, and bodies that do not
//! match the expected type fail closed as `RequestFailed` instead of leaking
//! half-populated values to callers.

use crate::domain::shared::errors::ApiError;
use crate::domain::user::credentials::CredentialProvider;
use reqwest::{Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

/// How a request treats the stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Never send a credential; a 401 means the submitted login was wrong.
    Anonymous,
    /// Send the credential when one is stored.
    Optional,
    /// Fail with [`ApiError::Unauthenticated`] before sending when no
    /// credential is stored.
    Required,
}

impl AuthMode {
    pub fn for_resource(requires_auth: bool) -> Self {
        if requires_auth {
            Self::Required
        } else {
            Self::Optional
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(
        settings: &ApiSettings,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ApiError> {
        let mut base = settings.base_url.trim().to_string();
        // Url::join drops the last segment of a base without a trailing slash.
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ApiError::Validation(format!("Invalid API base URL {}: {}", base, e)))?;

        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .build()?;

        tracing::info!(base_url = %base_url, timeout_secs = settings.timeout.as_secs(), "api client ready");
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `path`, which is always resolved below the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::request_failed(None, format!("Invalid endpoint {}: {}", path, e)))
    }

    pub async fn get<T>(&self, url: Url, auth: AuthMode) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.execute::<(), T>(Method::GET, url, None, auth).await
    }

    pub async fn send<B, T>(
        &self,
        method: Method,
        url: Url,
        body: &B,
        auth: AuthMode,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.execute(method, url, Some(body), auth).await
    }

    async fn execute<B, T>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        auth: AuthMode,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let token = match (auth, self.credentials.bearer_token()) {
            (AuthMode::Anonymous, _) => None,
            (AuthMode::Required, None) => {
                tracing::debug!(%method, %url, "no credential for authenticated endpoint");
                return Err(ApiError::Unauthenticated);
            }
            (_, token) => token,
        };

        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api response"
        );

        if status == StatusCode::UNAUTHORIZED && auth != AuthMode::Anonymous {
            tracing::info!(%url, "credential rejected, session expired");
            return Err(ApiError::SessionExpired);
        }

        let bytes = response.bytes().await?;
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string();
            return Err(ApiError::RequestFailed {
                status: Some(status.as_u16()),
                message,
                details: error_details(&bytes),
            });
        }

        decode_body(&bytes)
    }
}

/// Decodes a success body; an empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        bytes
    };
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(decode_error = %e, "response body did not match the expected shape");
        ApiError::malformed(e)
    })
}

/// Keys whose message summarises the whole error body.
const HEADLINE_KEYS: [&str; 2] = ["error", "detail"];

/// Every human-readable string in an error body.
///
/// Handles `{"detail": ...}`, `{"error": ..., "details": [...]}` and
/// field-to-messages maps alike. A top-level `error` or `detail` comes first,
/// the remaining keys follow in key order.
fn error_details(bytes: &[u8]) -> Vec<String> {
    let Ok(value) = serde_json::from_slice::<Value>(bytes) else {
        return Vec::new();
    };
    let mut messages = Vec::new();
    match &value {
        Value::Object(map) => {
            for key in HEADLINE_KEYS {
                if let Some(headline) = map.get(key) {
                    collect_messages(headline, &mut messages);
                }
            }
            map.iter()
                .filter(|(key, _)| !HEADLINE_KEYS.contains(&key.as_str()))
                .for_each(|(_, v)| collect_messages(v, &mut messages));
        }
        other => collect_messages(other, &mut messages),
    }
    messages
}

fn collect_messages(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
        Value::Array(items) => items.iter().for_each(|v| collect_messages(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_messages(v, out)),
        _ => {}
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!(reqwest_timeout = %err);
        } else if err.is_connect() {
            tracing::warn!(reqwest_connect = %err);
        } else if err.is_decode() {
            tracing::warn!(reqwest_decode = %err);
            return ApiError::malformed(err);
        } else if err.is_builder() {
            tracing::error!(reqwest_builder = %err);
            return ApiError::request_failed(None, format!("Invalid request: {}", err));
        } else {
            tracing::error!(reqwest_error = %err);
        }
        ApiError::Transport(err.to_string())
    }
}
