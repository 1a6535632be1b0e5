//! Authenticated HTTP access to the backend.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use stockline_core::{ClientError, ClientResult, Session};

use crate::config::ApiConfig;

/// Fallback when the server gives no usable error message.
const GENERIC_ERROR: &str = "API request failed";

/// Single point of contact with the backend.
///
/// Owns the HTTP connection pool and a shared `Session`; every request reads
/// the current credential at send time. One attempt per call, no retries —
/// failures surface to the caller unchanged.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: Arc<Session>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Store or clear the bearer credential for all subsequent requests.
    ///
    /// Clearing means requests go out unauthenticated from now on.
    pub fn set_credential(&self, token: Option<&str>) {
        self.session.set_token(token);
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        self.request(Method::GET, path, query, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        let body = to_body(body)?;
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        let body = to_body(body)?;
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(Method::PUT, path, &[], None).await
    }

    /// Build and send one request.
    ///
    /// Contract: attaches `Authorization: Bearer <token>` when a credential
    /// is present; serializes structured bodies as JSON with the matching
    /// content type; appends the given (already non-empty) query pairs; maps
    /// a non-2xx status to `Api` with the server's `error` message, an
    /// unreachable server to `Transport`, and an undecodable success body to
    /// `Decode`. Every failure path is logged here.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(%url, error = %err, "request never reached the server");
                return Err(ClientError::transport(err.to_string()));
            }
        };

        let status = response.status();
        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(%url, error = %err, "response body could not be read");
                return Err(ClientError::transport(err.to_string()));
            }
        };

        if !status.is_success() {
            let message = error_message(&raw);
            tracing::error!(%url, status = status.as_u16(), %message, "server rejected the request");
            return Err(ClientError::api(status.as_u16(), message));
        }

        serde_json::from_str(&raw).map_err(|err| {
            tracing::error!(%url, error = %err, "success response failed to decode");
            ClientError::decode(err.to_string())
        })
    }
}

fn to_body(body: &impl Serialize) -> ClientResult<Value> {
    serde_json::to_value(body).map_err(|err| ClientError::decode(err.to_string()))
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Pull the server's `error` message out of a failure body, falling back to
/// a generic message for empty or non-JSON bodies.
fn error_message(raw: &str) -> String {
    serde_json::from_str::<ErrorBody>(raw)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}
