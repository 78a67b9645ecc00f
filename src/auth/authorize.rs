//! Authorization-endpoint URL construction and navigation.

use bon::Builder;

use crate::config::BeehiveConfig;
use crate::error::{BeehiveError, Result};

/// Parameters for the implicit-grant authorization request.
///
/// # Example
/// ```
/// use beehive::auth::LoginOptions;
///
/// let options = LoginOptions::builder()
///     .client_id("123")
///     .scopes("control_robots")
///     .redirect_url("https://app.example/callback")
///     .build();
/// assert_eq!(options.client_id, "123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct LoginOptions {
    pub client_id: String,
    pub scopes: String,
    pub redirect_url: String,
}

impl LoginOptions {
    /// Build options from the OAuth client settings in `config`.
    pub fn from_config(config: &BeehiveConfig) -> Result<Self> {
        let require = |value: Option<&str>, name: &str| {
            value.map(str::to_string).ok_or_else(|| {
                BeehiveError::Configuration(format!("{name} is required for login"))
            })
        };
        Ok(Self {
            client_id: require(config.client_id(), "client_id")?,
            scopes: require(config.scopes(), "scopes")?,
            redirect_url: require(config.redirect_url(), "redirect_url")?,
        })
    }
}

/// Authorization URL for `host`.
///
/// Parameters are concatenated as given, without encoding.
pub fn authorize_url(host: &str, options: &LoginOptions) -> String {
    format!(
        "https://{host}/oauth2/authorize?client_id={}&scope={}&response_type=token&redirect_uri={}",
        options.client_id, options.scopes, options.redirect_url
    )
}

/// Leaves the current context for a URL (a browser redirect, a printed link).
///
/// Failures are the navigator's business; callers get no signal back.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

/// Navigator that prints the URL for the user to open.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&self, url: &str) {
        println!("{url}");
    }
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, url: &str) {
        self(url)
    }
}
