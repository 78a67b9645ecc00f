//! Configuration (layered: code > env > `.env` file).

use std::collections::HashMap;
use std::path::Path;

use crate::error::{BeehiveError, Result};

/// Default Beehive API host.
pub const DEFAULT_HOST: &str = "beehive.neatocloud.com";

pub const ENV_HOST: &str = "BEEHIVE_HOST";
pub const ENV_BASE_URL: &str = "BEEHIVE_BASE_URL";
pub const ENV_CLIENT_ID: &str = "BEEHIVE_CLIENT_ID";
pub const ENV_SCOPES: &str = "BEEHIVE_SCOPES";
pub const ENV_REDIRECT_URL: &str = "BEEHIVE_REDIRECT_URL";

/// Connection and OAuth client settings for a [`Session`](crate::session::Session).
///
/// # Example
/// ```
/// use beehive::config::BeehiveConfig;
///
/// let config = BeehiveConfig::new()
///     .with_client_id("123")
///     .with_scopes("control_robots")
///     .with_redirect_url("https://app.example/callback");
/// assert_eq!(config.host(), "beehive.neatocloud.com");
/// assert_eq!(config.api_base(), "https://beehive.neatocloud.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeehiveConfig {
    host: String,
    base_url: Option<String>,
    client_id: Option<String>,
    scopes: Option<String>,
    redirect_url: Option<String>,
}

impl Default for BeehiveConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl BeehiveConfig {
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            base_url: None,
            client_id: None,
            scopes: None,
            redirect_url: None,
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // a missing .env is fine
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from a dotenv-formatted file without touching the process environment.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| BeehiveError::Configuration(format!("{}: {e}", path.display())))?;
        let mut values = HashMap::new();
        for entry in entries {
            let (key, value) = entry
                .map_err(|e| BeehiveError::Configuration(format!("{}: {e}", path.display())))?;
            values.insert(key, value);
        }
        Ok(Self::from_lookup(|key| values.get(key).cloned()))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();
        if let Some(host) = non_empty(ENV_HOST) {
            config.host = host;
        }
        config.base_url = non_empty(ENV_BASE_URL);
        config.client_id = non_empty(ENV_CLIENT_ID);
        config.scopes = non_empty(ENV_SCOPES);
        config.redirect_url = non_empty(ENV_REDIRECT_URL);
        config
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Send API requests to `base_url` instead of `https://{host}`.
    ///
    /// The authorization URL always uses `host`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }

    pub fn with_redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
        self.redirect_url = Some(redirect_url.into());
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Origin API requests are sent to, without a trailing slash.
    pub fn api_base(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.host),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn scopes(&self) -> Option<&str> {
        self.scopes.as_deref()
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }
}
