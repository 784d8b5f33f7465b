//! Shared HTTP client for the storefront backend.

use crate::error::ServiceError;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Session token shared by every HTTP service.
///
/// Setting it authorizes all subsequent requests; clearing it makes them
/// anonymous again.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(Arc<RwLock<Option<String>>>);

impl BearerToken {
    /// Authorize subsequent requests with `token`
    pub fn set(&self, token: impl Into<String>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Make subsequent requests anonymous
    pub fn clear(&self) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The current token
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// JSON client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
    token: BearerToken,
}

impl ApiClient {
    /// Build a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration, token: BearerToken) -> Result<Self, ServiceError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            token,
        })
    }

    /// The shared session token
    #[must_use]
    pub const fn token(&self) -> &BearerToken {
        &self.token
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match self.token.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// `GET path?query`, decoding the JSON response
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        decode(response).await
    }

    /// `method path` with a JSON body, decoding the JSON response
    pub(crate) async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(method, path).json(body).send().await?;
        decode(response).await
    }

    /// `method path` without a body, decoding the JSON response
    pub(crate) async fn send_empty<T>(&self, method: Method, path: &str) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        let response = self.request(method, path).send().await?;
        decode(response).await
    }

    /// `method path` without a body, ignoring the response body
    pub(crate) async fn execute(&self, method: Method, path: &str) -> Result<(), ServiceError> {
        let response = self.request(method, path).send().await?;
        check(response).await.map(drop)
    }
}

async fn check(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::debug!(status = status.as_u16(), ?message, "Backend returned an error");

    Err(ServiceError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let response = check(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ServiceError::Decode(e.to_string()))
}
