//! CLI argument definitions for the Intradesk binary.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use intradesk_core::config::IntradeskConfig;
use intradesk_core::types::AnswerMode;

/// Intradesk: employee roster documents and prompts for an internal RAG assistant.
#[derive(Parser, Debug)]
#[command(name = "intradesk", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert the roster CSV into retrieval documents and print them as JSON.
    Documents {
        /// Roster CSV (defaults to `roster.csv_path` from the config).
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Department to emphasize with extra documents.
        #[arg(long)]
        spotlight: Option<String>,
        /// Fail instead of printing an empty list when the roster is unreadable.
        #[arg(long)]
        strict: bool,
    },
    /// Print the icon identifier for a citation source.
    Icon {
        /// URL or file path.
        source: String,
    },
    /// Print the prompt templates used for an answer mode.
    Prompts {
        /// `document_search` or `general_inquiry` (defaults to `chat.mode`).
        #[arg(long, value_parser = parse_mode)]
        mode: Option<AnswerMode>,
    },
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > INTRADESK_CONFIG env var > ~/.intradesk/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("INTRADESK_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &IntradeskConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }
}

fn parse_mode(s: &str) -> Result<AnswerMode, String> {
    AnswerMode::parse(s)
        .ok_or_else(|| format!("unknown mode '{s}' (expected document_search or general_inquiry)"))
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".intradesk").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".intradesk").join("config.toml");
    }
    PathBuf::from("config.toml")
}
