//! labdesk_client - HTTP client and CLI for the labdesk back office API.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

pub use client::LabdeskClient;
pub use config::Config;
pub use error::{ClientError, Result};
