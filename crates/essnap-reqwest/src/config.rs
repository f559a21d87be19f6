//! Elasticsearch client configuration.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Result;

/// Default timeout for HTTP requests: 30 seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the signed Elasticsearch HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct EsClientConfig {
    /// Elasticsearch endpoint host
    #[cfg_attr(
        feature = "config",
        arg(
            long = "host",
            visible_alias = "elasticsearch-host",
            env = "ES_HOST"
        )
    )]
    pub host: String,

    /// Connect over plain HTTP instead of HTTPS
    #[cfg_attr(feature = "config", arg(long = "insecure", env = "ES_INSECURE"))]
    #[serde(default)]
    pub insecure: bool,

    /// HTTP request timeout in seconds
    #[cfg_attr(
        feature = "config",
        arg(long = "http-timeout", env = "HTTP_TIMEOUT", default_value = "30")
    )]
    #[serde(default = "default_timeout_secs")]
    pub http_timeout: u64,

    /// User-Agent header to send with requests
    #[cfg_attr(
        feature = "config",
        arg(long = "http-user-agent", env = "HTTP_USER_AGENT")
    )]
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for EsClientConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            insecure: false,
            http_timeout: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl EsClientConfig {
    /// Creates a configuration for the given endpoint host.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Base URL of the endpoint, https unless `insecure` is set.
    pub fn base_url(&self) -> Result<Url> {
        let scheme = if self.insecure { "http" } else { "https" };
        Ok(Url::parse(&format!("{scheme}://{}", self.host))?)
    }

    /// Returns the effective timeout, using default if zero.
    pub fn effective_timeout(&self) -> Duration {
        if self.http_timeout == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.http_timeout)
        }
    }

    /// Returns the effective user agent, using default if not set.
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent)
    }

    /// Returns the default user agent string.
    fn default_user_agent() -> String {
        format!("essnap/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Set the plain-HTTP flag.
    #[must_use]
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Set the timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.http_timeout = timeout_secs;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
