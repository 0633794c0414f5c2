//! Outbound client for the backend REST API.
//!
//! [`ApiClient`] is built once at startup and shared behind an `Arc` by the
//! domain APIs ([`AuthApi`], [`UsersApi`], [`UploadApi`]). It holds no
//! per-request state.

pub mod auth;
pub mod upload;
pub mod users;

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION},
    multipart::Form,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::error::ApiError,
    constants::{endpoints::Endpoint, Env, DEFAULT_API_TIMEOUT_MS, DEFAULT_API_URL},
    utils::bearer,
};

pub use auth::AuthApi;
pub use upload::UploadApi;
pub use users::UsersApi;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self { base_url: base_url.into(), timeout }
    }

    pub fn from_env(env: &Env) -> Self {
        Self::new(env.api_url.clone(), Duration::from_millis(env.api_timeout_ms))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Duration::from_millis(DEFAULT_API_TIMEOUT_MS))
    }
}

pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Form),
}

pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::GET, headers: HeaderMap::new(), body: RequestBody::Empty }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Default::default() }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn bearer(self, token: &str) -> Result<Self, ApiError> {
        let value = HeaderValue::from_str(&bearer(token))
            .map_err(|_| ApiError::invalid_request("Token contains invalid header characters"))?;
        Ok(self.header(AUTHORIZATION, value))
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::invalid_request(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Client)?;
        log::info!("ApiClient initialized for {}", config.base_url);
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.config.base_url, endpoint)
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            log::warn!("Request timed out after {:?}", self.config.timeout);
            ApiError::Timeout(self.config.timeout)
        } else {
            log::warn!("Network error: {err}");
            ApiError::Network(err)
        }
    }

    /// Issues `endpoint` with the method registered for it.
    pub async fn call<T>(&self, endpoint: Endpoint<'_>, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let options = RequestOptions { method: endpoint.method(), ..options };
        self.request(&endpoint.path(), options).await
    }

    /// Sends one request and decodes a 2xx JSON body into `T`.
    ///
    /// An empty 2xx body decodes as `null`. Non-2xx responses become
    /// [`ApiError::Http`] with the server's `message`.
    pub async fn request<T>(&self, endpoint: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        log::debug!("{} {}", options.method, url);

        let mut headers = Self::default_headers();
        headers.extend(options.headers);

        let builder = self.http.request(options.method, &url).headers(headers);
        let builder = match options.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            log::warn!("{url} answered {status}: {err}");
            return Err(err);
        }

        let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) { b"null" } else { &body[..] };
        serde_json::from_slice(body).map_err(|e| {
            log::warn!("Malformed response from {url}: {e}");
            ApiError::MalformedResponse(e.to_string().into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_base_plus_endpoint() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        assert_eq!(client.url("/users/abc"), "http://localhost:3001/api/users/abc");
        assert_eq!(client.config().timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn config_follows_environment() {
        let env = Env::from_lookup(|key| match key {
            "API_URL" => Some("https://backend.internal/api".into()),
            "API_TIMEOUT" => Some("2500".into()),
            _ => None,
        });
        let client = ApiClient::new(ApiConfig::from_env(&env)).unwrap();
        assert_eq!(client.url("/auth/me"), "https://backend.internal/api/auth/me");
        assert_eq!(client.config().timeout, Duration::from_millis(2500));
    }

    #[test]
    fn unparsable_timeout_falls_back_to_default() {
        let env = Env::from_lookup(|key| (key == "API_TIMEOUT").then(|| "soon".to_string()));
        let config = ApiConfig::from_env(&env);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_API_TIMEOUT_MS));
    }

    #[test]
    fn bearer_sets_authorization_header() {
        let options = RequestOptions::default().bearer("t0k3n").unwrap();
        assert_eq!(options.headers.get(AUTHORIZATION).unwrap(), "Bearer t0k3n");
    }

    #[test]
    fn bearer_rejects_header_breaking_tokens() {
        let err = RequestOptions::default().bearer("bad\ntoken").err().unwrap();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
