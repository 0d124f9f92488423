//! Shared gateway state and the HTTP surface.

use crate::{GatewayConfig, provider::Connect, session::Session};
use llm::Transport;
use std::sync::Arc;

pub mod serve;
pub mod ws;

/// Shared state available to all request handlers.
///
/// Immutable after startup; per-connection state lives in [`Session`].
pub struct Gateway<C: Connect> {
    /// Gateway configuration.
    pub config: Arc<GatewayConfig>,
    /// Builds the chat model of each new session.
    pub connector: Arc<C>,
}

impl<C: Connect> Gateway<C> {
    /// Create the gateway state.
    pub fn new(config: GatewayConfig, connector: C) -> Self {
        Self {
            config: Arc::new(config),
            connector: Arc::new(connector),
        }
    }

    /// Open a new session, configuring its transport once.
    pub fn open_session(&self) -> Session<C::Model> {
        Session::new(Transport::connect(|| self.connector.connect()))
    }
}

impl<C: Connect> Clone for Gateway<C> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            connector: Arc::clone(&self.connector),
        }
    }
}
