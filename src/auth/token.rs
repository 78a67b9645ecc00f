use chrono::{DateTime, Duration, Utc};

/// Bearer token granted through the implicit-grant redirect.
///
/// # Example
/// ```
/// use beehive::auth::Token;
/// use chrono::Utc;
///
/// let token = Token {
///     access_token: "f9fbd7c3".to_string(),
///     token_type: Some("bearer".to_string()),
///     expires_in: Some(1_209_600),
///     issued_at: Utc::now(),
/// };
/// assert!(!token.is_expired(Utc::now()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: Option<String>,
    /// Lifetime in seconds as reported by the authorization server.
    pub expires_in: Option<u64>,
    /// Clock time at which the redirect was parsed.
    pub issued_at: DateTime<Utc>,
}

impl Token {
    /// Token with no type or lifetime information.
    pub fn bare(access_token: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            expires_in: None,
            issued_at,
        }
    }

    /// Instant after which the server is expected to reject the token.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in?).ok()?;
        self.issued_at.checked_add_signed(Duration::try_seconds(secs)?)
    }

    /// Informational only; a token without a lifetime never reports expiry.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().map(|exp| now >= exp).unwrap_or(false)
    }

    /// Value for the `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}
