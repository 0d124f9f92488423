//! Chat sessions.
//!
//! A session lives exactly as long as one WebSocket connection and owns
//! that connection's transcript and chat transport. Nothing is shared
//! between sessions.

use anyhow::Result;
use compact_str::CompactString;
use llm::{Model, Transcript, Transport, Turn};
use std::time::{SystemTime, UNIX_EPOCH};

/// One interactive chat session.
pub struct Session<M> {
    id: CompactString,
    created_at: u64,
    transcript: Transcript,
    transport: Transport<M>,
}

impl<M: Model> Session<M> {
    /// Open a session around a configured (or offline) transport.
    pub fn new(transport: Transport<M>) -> Self {
        Self {
            id: CompactString::new(uuid::Uuid::new_v4().to_string()),
            created_at: unix_now(),
            transcript: Transcript::new(),
            transport,
        }
    }

    /// Session identifier (UUID v4).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp (unix seconds).
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Seconds since the session was opened.
    pub fn age(&self) -> u64 {
        unix_now().saturating_sub(self.created_at)
    }

    /// The conversation so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The configuration warning, if the transport is offline.
    pub fn warning(&self) -> Option<String> {
        self.transport.warning()
    }

    /// Whether the transport has a configured model.
    pub fn is_online(&self) -> bool {
        self.transport.is_online()
    }

    /// Record `text` as a user turn, ask the transport for a reply and
    /// record the reply as the assistant turn.
    ///
    /// Offline and transmission sentinels are recorded like any reply.
    pub async fn submit(&mut self, system: &str, text: impl Into<String>) -> Result<String> {
        self.transcript.append(Turn::user(text));
        let reply = self.transport.send(system, &self.transcript).await?;
        self.transcript.append(Turn::assistant(reply.as_str()));
        tracing::debug!(
            "session {} now holds {} turns",
            self.id,
            self.transcript.len()
        );
        Ok(reply)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
