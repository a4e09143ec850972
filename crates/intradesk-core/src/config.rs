use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{IntradeskError, Result};
use crate::types::AnswerMode;

/// Top-level configuration for Intradesk.
///
/// Loaded from `~/.intradesk/config.toml` by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntradeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl IntradeskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: IntradeskConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| IntradeskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Employee roster settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Path to the employee roster CSV.
    pub csv_path: String,
    /// Department that gets extra emphasis documents, if any.
    pub spotlight_department: Option<String>,
    /// Text rendered in place of empty fields.
    pub placeholder: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            csv_path: "data/roster.csv".to_string(),
            spotlight_department: None,
            placeholder: "N/A".to_string(),
        }
    }
}

/// Chat responder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Answer style selected at startup.
    pub mode: AnswerMode,
    /// Hosted model identifier passed to the pipeline.
    pub model: String,
    /// Sampling temperature passed to the pipeline.
    pub temperature: f32,
    /// Maximum accepted message length in characters.
    pub max_message_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            mode: AnswerMode::DocumentSearch,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.5,
            max_message_length: 2000,
        }
    }
}
