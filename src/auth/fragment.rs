//! Implicit-grant redirect fragment parsing.

use chrono::{DateTime, Utc};

use super::error::AuthorizationError;
use super::token::Token;

/// What a redirect fragment says about the login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// The server granted a token.
    Granted(Token),
    /// The server reported an authorization failure.
    Denied(AuthorizationError),
    /// Empty, unrecognized, or contradictory fragment.
    Unauthenticated,
}

/// Recognized keys of a redirect fragment, taken verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectFragment {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl RedirectFragment {
    /// Parse a fragment.
    ///
    /// Accepts a bare fragment, one with a leading `#`, or a full URL, in
    /// which case everything after the first `#` is used. Values are not
    /// percent-decoded. Segments without `=` are skipped.
    pub fn parse(input: &str) -> Self {
        let fragment = match input.split_once('#') {
            Some((_, after)) => after,
            None => input,
        };

        let mut parsed = Self::default();
        for pair in fragment.split('&').filter(|p| !p.is_empty()) {
            let Some((key, value)) = pair.split_once('=') else {
                tracing::debug!(segment = pair, "Skipping fragment segment without value");
                continue;
            };
            let value = value.to_string();
            match key {
                "access_token" => parsed.access_token = Some(value),
                "token_type" => parsed.token_type = Some(value),
                "expires_in" => parsed.expires_in = Some(value),
                "error" => parsed.error = Some(value),
                "error_description" => parsed.error_description = Some(value),
                other => tracing::debug!(key = other, "Ignoring unrecognized fragment key"),
            }
        }
        parsed
    }

    /// Resolve the fragment into a single outcome.
    ///
    /// A fragment carrying both `access_token` and `error` is treated the same
    /// as one carrying neither.
    pub fn into_outcome(self, issued_at: DateTime<Utc>) -> RedirectOutcome {
        match (self.access_token, self.error) {
            (Some(access_token), None) => {
                let expires_in = self.expires_in.as_deref().and_then(|raw| {
                    raw.parse::<u64>()
                        .map_err(|_| {
                            tracing::debug!(expires_in = raw, "Ignoring non-numeric expires_in")
                        })
                        .ok()
                });
                RedirectOutcome::Granted(Token {
                    access_token,
                    token_type: self.token_type,
                    expires_in,
                    issued_at,
                })
            }
            (None, Some(code)) => {
                RedirectOutcome::Denied(AuthorizationError::new(code, self.error_description))
            }
            (Some(_), Some(code)) => {
                tracing::warn!(
                    error = %code,
                    "Redirect fragment carries both a token and an error; ignoring both"
                );
                RedirectOutcome::Unauthenticated
            }
            (None, None) => RedirectOutcome::Unauthenticated,
        }
    }
}
