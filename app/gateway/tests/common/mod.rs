//! Stub connector shared by the gateway tests.
#![allow(dead_code)]

use anyhow::Result;
use llm::{ConfigError, Content, Model};
use pulsage_gateway::Connect;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Deterministic model that echoes the message and counts calls.
#[derive(Clone, Default)]
pub struct Echo {
    pub calls: Arc<AtomicUsize>,
}

impl Model for Echo {
    async fn send_message(&self, history: &[Content], message: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("echo[{}]: {message}", history.len()))
    }
}

/// Hands out [`Echo`] models, or fails like a missing credential.
#[derive(Clone, Default)]
pub struct EchoConnector {
    pub offline: bool,
    pub calls: Arc<AtomicUsize>,
}

impl EchoConnector {
    pub fn online() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Connect for EchoConnector {
    type Model = Echo;

    fn connect(&self) -> Result<Echo, ConfigError> {
        if self.offline {
            return Err(ConfigError::MissingCredential("GEMINI_API_KEY"));
        }
        Ok(Echo {
            calls: Arc::clone(&self.calls),
        })
    }
}
