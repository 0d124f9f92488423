//! Gateway configuration loaded from TOML.

use anyhow::{Context, Result};
use compact_str::CompactString;
use llm::DEFAULT_MODEL;
use protocol::Dashboard;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config directory name under platform config dir.
pub const CONFIG_DIR: &str = "pulsage";
/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "pulsage.toml";

/// Instruction placed before every user message.
///
/// The surrounding newlines are part of the prompt sent upstream.
pub const DEFAULT_SYSTEM_PROMPT: &str = "
You are a space-themed AI assistant embedded in a futuristic mission control interface.
Your role: Be concise, clear, helpful. Use a subtle sci-fi tone.
";

/// Resolve the global configuration directory (`~/.config/pulsage/` on unix).
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR))
}

/// Top-level gateway configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server bind configuration.
    pub server: ServerConfig,
    /// Chat model configuration.
    pub llm: LlmConfig,
    /// Dashboard panel contents.
    pub dashboard: DashboardConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8501,
        }
    }
}

/// Chat model configuration.
///
/// The API key is never read from here; it comes from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier.
    pub model: CompactString,
    /// Optional base URL override for the API host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Instruction prefixed to every user message.
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            base_url: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_owned(),
        }
    }
}

/// Dashboard panel contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title.
    pub title: String,
    /// Line under the title.
    pub subtitle: String,
    /// Status panel lines.
    pub status: Vec<String>,
    /// Notes panel text.
    pub notes: String,
    /// Telemetry placeholder text.
    pub telemetry: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "🚀 Pulsage Mission Control".to_owned(),
            subtitle: "Space-themed analytics with a FREE Gemini AI copilot".to_owned(),
            status: vec![
                "Navigation: Online".to_owned(),
                "Telemetry: Stable".to_owned(),
                "AI Model: Gemini 2.0 Flash".to_owned(),
            ],
            notes: "Dashboard active. Ready for launch.".to_owned(),
            telemetry: "📡 Telemetry data visualizations will appear here.".to_owned(),
        }
    }
}

impl GatewayConfig {
    /// Parse a TOML string into a `GatewayConfig`, expanding `${VAR}`
    /// references from the environment first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        toml::from_str(&expanded).context("invalid gateway configuration")
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Load the file in the global config dir, or defaults when absent.
    pub fn load_global() -> Result<Self> {
        match global_config_dir().map(|dir| dir.join(CONFIG_FILE)) {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// The `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// The dashboard description served to the page.
    pub fn dashboard(&self, online: bool) -> Dashboard {
        Dashboard {
            title: self.dashboard.title.clone(),
            subtitle: self.dashboard.subtitle.clone(),
            model: self.llm.model.clone(),
            online,
            status: self.dashboard.status.clone(),
            notes: self.dashboard.notes.clone(),
            telemetry: self.dashboard.telemetry.clone(),
        }
    }
}

/// Replace `${VAR}` with the variable's value; unset variables become empty.
fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            // unterminated, keep verbatim
            result.push_str(&rest[start..]);
            return result;
        };
        if let Ok(value) = std::env::var(&after[..end]) {
            result.push_str(&value);
        }
        rest = &after[end + 1..];
    }
    result.push_str(rest);
    result
}
