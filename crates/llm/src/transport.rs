//! Chat transport: maps a transcript onto one remote request

use crate::{Content, Model, Transcript, Turn};

/// Reply returned when the transport was never configured.
pub const OFFLINE: &str = "⚠️ AI System Offline (Check API Key)";

/// Prefix of the reply returned when the remote call fails.
pub const TRANSMISSION_ERROR: &str = "⚠️ Transmission Error";

/// Why a transport could not be configured.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// None of the credential variables holds a value.
    #[error("{0} not found.")]
    MissingCredential(&'static str),
    /// The client could not be built from the credential.
    #[error("Error connecting to AI: {0}")]
    Client(String),
}

/// Errors raised by [`Transport::send`].
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// There is no turn to answer.
    #[error("cannot send an empty transcript")]
    EmptyTranscript,
}

/// The chat transport of one session.
///
/// Holds either a configured model or the reason configuration failed.
/// An unconfigured transport answers every call with [`OFFLINE`] and
/// never touches the network.
pub struct Transport<M> {
    model: Result<M, ConfigError>,
}

impl<M: Model> Transport<M> {
    /// Configure a transport from a model constructor.
    pub fn connect(configure: impl FnOnce() -> Result<M, ConfigError>) -> Self {
        let model = configure();
        if let Err(e) = &model {
            tracing::debug!("chat transport offline: {e}");
        }
        Self { model }
    }

    /// A transport around an already built model
    pub fn online(model: M) -> Self {
        Self { model: Ok(model) }
    }

    /// A transport that failed to configure
    pub fn offline(error: ConfigError) -> Self {
        Self { model: Err(error) }
    }

    /// Whether a model is configured
    pub fn is_online(&self) -> bool {
        self.model.is_ok()
    }

    /// The visible warning for a failed configuration.
    pub fn warning(&self) -> Option<String> {
        self.model.as_ref().err().map(|e| format!("❌ {e}"))
    }

    /// Send the transcript and return the reply text.
    ///
    /// Every turn but the last becomes history; the last turn is sent as
    /// the new message, prefixed with the system instruction. Remote
    /// failures come back as a [`TRANSMISSION_ERROR`] reply, not as `Err`.
    pub async fn send(&self, system: &str, transcript: &Transcript) -> Result<String, SendError> {
        let Some((last, prior)) = transcript.all().split_last() else {
            return Err(SendError::EmptyTranscript);
        };

        let model = match &self.model {
            Ok(model) => model,
            Err(_) => return Ok(OFFLINE.to_owned()),
        };

        let history = history(prior);
        let message = compose(system, last.content());
        tracing::debug!("sending message with {} history entries", history.len());
        match model.send_message(&history, &message).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::warn!("transmission failed: {e:#}");
                Ok(format!("{TRANSMISSION_ERROR}: {e:#}"))
            }
        }
    }
}

/// Convert turns into the role-tagged history, preserving order.
pub fn history(turns: &[Turn]) -> Vec<Content> {
    turns.iter().map(Content::from).collect()
}

/// Prefix the user's text with the system instruction.
pub fn compose(system: &str, text: &str) -> String {
    format!("{system}\n\nUser: {text}")
}
