//! Command-line arguments of the `pulsage` binary.

use crate::{
    GatewayConfig,
    gateway::serve::serve,
    provider::{Connect, GeminiConnector},
};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;

/// Pulsage mission control dashboard with a Gemini copilot.
#[derive(Parser, Debug)]
#[command(name = "pulsage", about = "Pulsage mission control dashboard")]
pub struct Cli {
    /// Path to the TOML configuration file.
    ///
    /// Defaults to `pulsage.toml` in the platform config directory, if present.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Address to bind, overriding `[server]` in the configuration.
    #[arg(long, short)]
    pub bind: Option<String>,
}

impl Cli {
    /// Load the configuration named on the command line, or the global one.
    pub fn load_config(&self) -> Result<GatewayConfig> {
        match &self.config {
            Some(path) => {
                let config = GatewayConfig::load(path)?;
                tracing::info!("loaded configuration from {}", path.display());
                Ok(config)
            }
            None => GatewayConfig::load_global(),
        }
    }

    /// The address to bind.
    pub fn bind_address(&self, config: &GatewayConfig) -> String {
        self.bind.clone().unwrap_or_else(|| config.bind_address())
    }

    /// Serve the dashboard until ctrl-c.
    pub async fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let bind = self.bind_address(&config);

        let connector = GeminiConnector::new(llm::Client::new(), &config.llm);
        match connector.connect() {
            Ok(model) => tracing::info!("copilot online with model {}", model.model()),
            Err(e) => tracing::warn!("❌ {e}"),
        }

        let handle = serve(config, connector, &bind).await?;
        shutdown_signal().await;
        handle.shutdown().await?;
        tracing::info!("gateway shut down");
        Ok(())
    }
}

/// Wait for ctrl-c signal for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
    }
}
