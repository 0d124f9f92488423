//! Per-session model construction.

use crate::config::LlmConfig;
use compact_str::CompactString;
use llm::{Client, ConfigError, Gemini, Model};

/// Builds the chat model for a new session.
///
/// Called once per session; a failure leaves that session offline.
pub trait Connect: Send + Sync + 'static {
    /// The model handed to the session's transport.
    type Model: Model + 'static;

    /// Construct a model, or report why it cannot be configured.
    fn connect(&self) -> Result<Self::Model, ConfigError>;
}

/// Connects sessions to Gemini with the key found in the environment.
#[derive(Clone)]
pub struct GeminiConnector {
    client: Client,
    model: CompactString,
    base_url: Option<String>,
}

impl GeminiConnector {
    /// Create a connector sharing `client` across sessions.
    pub fn new(client: Client, config: &LlmConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
        }
    }
}

impl Connect for GeminiConnector {
    type Model = Gemini;

    fn connect(&self) -> Result<Gemini, ConfigError> {
        Gemini::from_env(self.client.clone(), &self.model, self.base_url.as_deref())
    }
}
