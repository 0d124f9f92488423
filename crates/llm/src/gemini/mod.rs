//! Google Gemini `generateContent` client

use crate::{ConfigError, Content, Model};
use anyhow::{Result, bail};
use compact_str::CompactString;
pub use request::{Request, Response};
use reqwest::{
    Client, Method,
    header::{self, HeaderMap, HeaderValue},
};

mod request;

/// The public Gemini API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// The model used when none is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Environment variables searched for the API key, in order.
pub const CREDENTIAL_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Read the API key from the environment.
///
/// The first non-empty variable of [`CREDENTIAL_VARS`] wins.
pub fn credential() -> Option<String> {
    credential_with(|name| std::env::var(name).ok())
}

/// Resolve the API key through `lookup` instead of the process environment.
pub fn credential_with(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    CREDENTIAL_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
}

/// The Gemini chat model
#[derive(Clone)]
pub struct Gemini {
    /// The HTTP client
    client: Client,

    /// The request headers, API key included
    headers: HeaderMap,

    /// The full `generateContent` URL
    endpoint: String,

    /// The model identifier
    model: CompactString,
}

impl Gemini {
    /// Create a client for `model` authenticated with `key`.
    ///
    /// `base_url` overrides [`DEFAULT_BASE_URL`], mostly for tests.
    pub fn new(
        client: Client,
        key: &str,
        model: &str,
        base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut key = HeaderValue::from_str(key)
            .map_err(|e| ConfigError::Client(format!("invalid API key: {e}")))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("x-goog-api-key", key);

        Ok(Self {
            client,
            headers,
            endpoint: endpoint(base_url.unwrap_or(DEFAULT_BASE_URL), model),
            model: model.into(),
        })
    }

    /// Create a client with the key found in the environment
    pub fn from_env(
        client: Client,
        model: &str,
        base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let key = credential().ok_or(ConfigError::MissingCredential(CREDENTIAL_VARS[0]))?;
        Self::new(client, &key, model, base_url)
    }

    /// The request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The `generateContent` URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The model identifier
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Model for Gemini {
    async fn send_message(&self, history: &[Content], message: &str) -> Result<String> {
        let body = Request::new(history, message);
        tracing::trace!("request: {}", serde_json::to_string(&body)?);
        let response = self
            .client
            .request(Method::POST, &self.endpoint)
            .headers(self.headers.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::trace!("response: {text}");
        if !status.is_success() {
            bail!("Gemini API error ({status}): {text}");
        }

        serde_json::from_str::<Response>(&text)?.text()
    }
}

/// Build the `generateContent` URL, accepting both `gemini-x` and
/// `models/gemini-x` forms of the model name.
fn endpoint(base_url: &str, model: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if model.starts_with("models/") {
        format!("{base}/v1beta/{model}:generateContent")
    } else {
        format!("{base}/v1beta/models/{model}:generateContent")
    }
}
