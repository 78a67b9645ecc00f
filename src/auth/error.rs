use thiserror::Error;

/// Error reported by the authorization server in the redirect fragment.
///
/// This is observational state on a [`Session`](crate::session::Session),
/// not something construction raises. Convert into
/// [`BeehiveError`](crate::error::BeehiveError) with `?` when a caller wants
/// to bail out on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}{}", .description.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
pub struct AuthorizationError {
    /// OAuth2 error code, e.g. `access_denied`.
    pub code: String,
    /// Human-readable detail from `error_description`.
    pub description: Option<String>,
}

impl AuthorizationError {
    pub fn new(code: impl Into<String>, description: Option<String>) -> Self {
        Self {
            code: code.into(),
            description,
        }
    }
}
