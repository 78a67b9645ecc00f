//! Session identity and connectivity state.

use std::fmt;
use std::sync::{Arc, RwLock};

use crate::auth::{
    authorize_url, AuthorizationError, LoginOptions, Navigator, RedirectFragment,
    RedirectOutcome, Token,
};
use crate::config::BeehiveConfig;
use crate::http::shared_client;
use crate::util::{Clock, SystemClock};

/// Authenticated (or not) handle on the Beehive API.
///
/// Built once from the redirect the user landed on. Identity is fixed at
/// construction; only the last-known connectivity changes afterwards.
/// Clones share state, so a clone handed to a callback is the same session.
///
/// # Example
/// ```
/// use beehive::session::Session;
///
/// let session = Session::from_fragment("#access_token=abc&token_type=bearer&expires_in=1209600");
/// assert_eq!(session.access_token(), Some("abc"));
/// assert!(!session.authentication_error());
/// assert_eq!(session.connected(), None);
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    config: BeehiveConfig,
    token: Option<Token>,
    auth_error: Option<AuthorizationError>,
    connected: RwLock<Option<bool>>,
    client: reqwest::Client,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("host", &self.host())
            .field("token", &self.inner.token.as_ref().map(|_| ".."))
            .field("auth_error", &self.inner.auth_error)
            .field("connected", &self.connected())
            .finish()
    }
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Session against the default host from a redirect fragment (or full redirect URL).
    pub fn from_fragment(fragment: &str) -> Self {
        Self::builder().fragment(fragment).build()
    }

    pub fn from_config(config: BeehiveConfig, fragment: &str) -> Self {
        Self::builder().config(config).fragment(fragment).build()
    }

    pub fn host(&self) -> &str {
        self.inner.config.host()
    }

    pub fn config(&self) -> &BeehiveConfig {
        &self.inner.config
    }

    pub fn token(&self) -> Option<&Token> {
        self.inner.token.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.token().map(|t| t.access_token.as_str())
    }

    pub fn authorization_error(&self) -> Option<&AuthorizationError> {
        self.inner.auth_error.as_ref()
    }

    /// Whether the redirect reported an authorization error.
    ///
    /// An empty error code counts as no error.
    pub fn authentication_error(&self) -> bool {
        self.inner
            .auth_error
            .as_ref()
            .is_some_and(|e| !e.code.is_empty())
    }

    /// Last-known token validity; `None` until a connectivity check completes.
    pub fn connected(&self) -> Option<bool> {
        match self.inner.connected.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub(crate) fn set_connected(&self, value: bool) {
        match self.inner.connected.write() {
            Ok(mut guard) => *guard = Some(value),
            Err(poisoned) => *poisoned.into_inner() = Some(value),
        }
    }

    /// True when both handles refer to the same session.
    pub fn ptr_eq(&self, other: &Session) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Authorization URL for this session's host.
    pub fn authorize_url(&self, options: &LoginOptions) -> String {
        authorize_url(self.host(), options)
    }

    /// Send the user to the authorization endpoint.
    pub fn login(&self, options: &LoginOptions, navigator: &dyn Navigator) {
        let url = self.authorize_url(options);
        tracing::debug!(client_id = %options.client_id, "Navigating to authorization endpoint");
        navigator.navigate(&url);
    }

    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.inner.client
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }
}

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<BeehiveConfig>,
    fragment: Option<String>,
    client: Option<reqwest::Client>,
    clock: Option<Arc<dyn Clock>>,
}

impl SessionBuilder {
    pub fn config(mut self, config: BeehiveConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Redirect fragment to read identity from.
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Use a dedicated client instead of the shared one.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Build the session. Never fails; unusable fragments yield an
    /// unauthenticated session.
    pub fn build(self) -> Session {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let fragment = self.fragment.unwrap_or_default();
        let (token, auth_error) =
            match RedirectFragment::parse(&fragment).into_outcome(clock.now()) {
                RedirectOutcome::Granted(token) => (Some(token), None),
                RedirectOutcome::Denied(error) => {
                    tracing::debug!(error = %error, "Redirect reported an authorization error");
                    (None, Some(error))
                }
                RedirectOutcome::Unauthenticated => (None, None),
            };

        Session {
            inner: Arc::new(SessionInner {
                config: self.config.unwrap_or_default(),
                token,
                auth_error,
                connected: RwLock::new(None),
                client: self.client.unwrap_or_else(|| shared_client().clone()),
                clock,
            }),
        }
    }
}
