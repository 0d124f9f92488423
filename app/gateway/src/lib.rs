//! Pulsage gateway — serves the mission control dashboard and runs one
//! chat session per WebSocket connection.

pub mod cli;
pub mod config;
pub mod gateway;
pub mod page;
pub mod provider;
pub mod session;

pub use cli::Cli;
pub use config::GatewayConfig;
pub use gateway::{
    Gateway,
    serve::{ServeHandle, serve},
    ws::router,
};
pub use provider::{Connect, GeminiConnector};
pub use session::Session;
