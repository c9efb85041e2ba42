//! CLI command definitions.

pub mod areas;
pub mod sections;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{parse_timeout, Config};
use crate::error::Result;

/// CLI client for the labdesk back office API.
#[derive(Debug, Parser)]
#[command(name = "labdesk-client")]
#[command(about = "CLI client for the labdesk back office API", long_about = None)]
pub struct Cli {
    /// Server base URL [env: LABDESK_URL] [default: http://localhost:3000]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for the API [env: LABDESK_TOKEN]
    #[arg(long)]
    pub token: Option<String>,

    /// Request timeout in seconds [env: LABDESK_TIMEOUT_SECS] [default: 30]
    #[arg(long)]
    pub timeout_secs: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the client configuration: environment first, explicit flags on top.
    pub fn config(&self) -> Result<Config> {
        self.overlay(Config::from_env()?)
    }

    fn overlay(&self, mut config: Config) -> Result<Config> {
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url)?;
        }
        if self.token.is_some() {
            config = config.with_token(self.token.clone());
        }
        if let Some(timeout) = &self.timeout_secs {
            config = config.with_timeout(parse_timeout(Some(timeout.as_str()))?);
        }
        Ok(config)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Area management.
    Areas(areas::AreasCommand),
    /// Section management.
    Sections(sections::SectionsCommand),
}
