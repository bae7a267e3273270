//! Configuration file schema.

use insight_application::EngineParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration (`deep-insight.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model identifier passed to the gateway.
    pub model: String,
    /// Base URL of the chat-completions endpoint.
    pub base_url: String,
    /// Environment variable holding the API key. The key itself never
    /// lives in a config file.
    pub api_key_env: String,
    /// Per-call gateway timeout in seconds.
    pub gateway_timeout_secs: u64,
    /// Optional JSONL transcript log path.
    pub transcript_log: Option<PathBuf>,
    pub simulation: SimulationConfig,
}

/// Simulation tuning section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Overall deadline for a business-wide run, in seconds.
    pub deadline_secs: u64,
    /// Safety cap on iterations per interview.
    pub max_steps: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            model: "openai/gpt-oss-120b".to_string(),
            base_url: crate::providers::DEFAULT_BASE_URL.to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            gateway_timeout_secs: 30,
            transcript_log: None,
            simulation: SimulationConfig::default(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            deadline_secs: 120,
            max_steps: 50,
        }
    }
}

impl FileConfig {
    /// Engine parameters derived from this configuration.
    pub fn engine_params(&self) -> EngineParams {
        EngineParams {
            gateway_timeout: Duration::from_secs(self.gateway_timeout_secs),
            max_steps: self.simulation.max_steps,
            simulation_deadline: Duration::from_secs(self.simulation.deadline_secs),
        }
    }

    /// Resolve the API key from the configured environment variable.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.is_empty())
    }
}
