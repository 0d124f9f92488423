//! Transcript types and the chat transport for the Pulsage copilot.
//!
//! This crate provides the conversation model (`Turn`, `Transcript`), the
//! role-tagged history format sent upstream (`Content`), the `Model` seam
//! the transport submits through, the Gemini `generateContent` client, and
//! the `Transport` that maps a transcript to a single remote request.

pub use gemini::{
    CREDENTIAL_VARS, DEFAULT_BASE_URL, DEFAULT_MODEL, Gemini, credential, credential_with,
};
pub use message::{Author, Content, Part, Role, Transcript, Turn};
pub use model::Model;
pub use reqwest::{self, Client};
pub use transport::{
    ConfigError, OFFLINE, SendError, TRANSMISSION_ERROR, Transport, compose, history,
};

pub mod gemini;
mod message;
mod model;
mod transport;
