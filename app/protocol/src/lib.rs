//! Pulsage wire types shared between the gateway and the dashboard page.

use compact_str::CompactString;
use llm::Turn;
use serde::{Deserialize, Serialize};

/// Current protocol version.
pub const PROTOCOL_VERSION: &str = "0.1";

/// Messages sent by the page to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Submit a user message and wait for the copilot's reply.
    Send {
        /// Message content.
        content: String,
    },
    /// Ask for the full transcript of this session.
    History,
    /// Ping the server (keepalive).
    Ping,
}

/// Messages sent by the gateway to the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session opened.
    Hello {
        /// Wire protocol version, [`PROTOCOL_VERSION`].
        protocol: CompactString,
        /// Session identifier.
        session_id: CompactString,
        /// Model answering in this session.
        model: CompactString,
    },
    /// The copilot could not be configured; sent once per session.
    Warning {
        /// Human-readable warning.
        message: String,
    },
    /// A submission was recorded and the remote call started.
    Pending,
    /// The copilot's reply to the last submission.
    Reply {
        /// Reply content, sentinel strings included.
        content: String,
    },
    /// The full transcript of this session.
    Transcript {
        /// Turns in conversation order.
        turns: Vec<Turn>,
    },
    /// Error response.
    Error {
        /// Error code.
        code: u16,
        /// Error message.
        message: String,
    },
    /// Pong response to client ping.
    Pong,
}

/// Panel contents of the dashboard page, served as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Page title.
    pub title: String,
    /// Line under the title.
    pub subtitle: String,
    /// Model answering the chat.
    pub model: CompactString,
    /// Whether the chat transport can be configured.
    pub online: bool,
    /// Status panel lines.
    pub status: Vec<String>,
    /// Notes panel text.
    pub notes: String,
    /// Telemetry placeholder text.
    pub telemetry: String,
}
