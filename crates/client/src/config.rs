use std::{env, time::Duration};

use crate::error::{ClientError, Result};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration for `base_url` with no token and the default timeout.
    ///
    /// Fails if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Sets the bearer token. Blank tokens are ignored.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Replaces the base URL. Fails like [`Config::new`] on a bad URL.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
        self.base_url = normalize_base_url(base_url.as_ref())?;
        Ok(self)
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LABDESK_URL` - API base URL (default: "http://localhost:3000")
    /// - `LABDESK_TOKEN` - Bearer token (default: none)
    /// - `LABDESK_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("LABDESK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("LABDESK_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self::new(base_url)?
            .with_token(env::var("LABDESK_TOKEN").ok())
            .with_timeout(timeout))
    }
}

/// Parses a timeout in whole seconds. `None` yields the default.
pub fn parse_timeout(raw: Option<&str>) -> Result<Duration> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ClientError::Config("timeout must be at least 1 second".to_string())),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ClientError::Config(format!("timeout {:?}: {}", raw, e))),
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed =
        url::Url::parse(raw).map_err(|e| ClientError::Config(format!("{}: {}", raw, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::Config(format!(
            "{}: unsupported scheme {}",
            raw,
            parsed.scheme()
        )));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
