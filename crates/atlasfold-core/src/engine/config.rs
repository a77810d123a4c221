use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.esmatlas.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_USER_AGENT: &str = concat!("atlasfold/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid base URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,

    #[error("User agent cannot be empty")]
    EmptyUserAgent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Skips TLS certificate verification. Off unless explicitly requested.
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}

#[derive(Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_invalid_certs: Option<bool>,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = Some(accept);
        self
    }

    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let defaults = ClientConfig::default();

        let base_url = match self.base_url {
            Some(url) => {
                let trimmed = url.trim().trim_end_matches('/');
                let has_host = trimmed
                    .strip_prefix("https://")
                    .or_else(|| trimmed.strip_prefix("http://"))
                    .is_some_and(|rest| !rest.is_empty());
                if !has_host {
                    return Err(ConfigError::InvalidBaseUrl(url));
                }
                trimmed.to_string()
            }
            None => defaults.base_url,
        };

        let timeout = self.timeout.unwrap_or(defaults.timeout);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        let user_agent = self.user_agent.unwrap_or(defaults.user_agent);
        if user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }

        Ok(ClientConfig {
            base_url,
            timeout,
            user_agent,
            accept_invalid_certs: self
                .accept_invalid_certs
                .unwrap_or(defaults.accept_invalid_certs),
        })
    }
}
