//! Configuration loading for claimguard
//!
//! Supports TOML configuration with embedded defaults.

use crate::rules::Agency;

use serde::Deserialize;
use std::path::PathBuf;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Agency applied when none is given on the command line
    pub default_agency: Agency,

    /// Enable audit logging
    pub audit_log: bool,

    /// Path to audit log file
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_agency: Agency::Fda,
            audit_log: true,
            audit_path: Some("~/.claimguard/audit.jsonl".to_string()),
        }
    }
}

/// LLM second-opinion configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Base URL of the OpenAI-compatible API
    pub api_base: String,

    /// Model requested for second opinions
    pub model: String,

    /// Completion token cap per request
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 256,
            temperature: 0.2,
            timeout_secs: 30,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub llm: LlmConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Self {
        let config_paths = [
            dirs::home_dir().map(|p| p.join(".claimguard/config.toml")),
            Some(PathBuf::from("/etc/claimguard/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Config::default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand ~ in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }

    /// Get the audit log path (expanded)
    pub fn audit_path(&self) -> Option<PathBuf> {
        self.general.audit_path.as_ref().map(|p| Self::expand_path(p))
    }
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
default_agency = "FDA"
audit_log = true
audit_path = "~/.claimguard/audit.jsonl"

[llm]
api_base = "https://api.openai.com/v1"
model = "gpt-3.5-turbo"
max_tokens = 256
temperature = 0.2
timeout_secs = 30
"#;
