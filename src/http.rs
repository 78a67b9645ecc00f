//! Shared HTTP client and Beehive header utilities.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::auth::Token;
use crate::error::{BeehiveError, Result};

/// Versioned media type every Beehive request accepts.
pub const BEEHIVE_MEDIA_TYPE: &str = "application/vnd.neato.beehive.v1+json";

/// Header carrying the request issue time.
pub const X_DATE: HeaderName = HeaderName::from_static("x-date");

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            })
    })
}

/// Build the signed header set: `Accept`, `X-Date`, and `Authorization`.
pub fn signed_headers(token: &Token, date: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BEEHIVE_MEDIA_TYPE));
    headers.insert(X_DATE, header_value(date, "X-Date")?);
    headers.insert(
        AUTHORIZATION,
        header_value(&token.authorization_value(), "Authorization")?,
    );
    Ok(headers)
}

fn header_value(value: &str, name: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| BeehiveError::InvalidArgument(format!("{name} header value is not valid")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn signed_headers_carry_media_type_date_and_bearer() {
        let token = Token::bare("1234567890", Utc::now());
        let headers = signed_headers(&token, "Tue, 15 Sep 2015 15:25:12 GMT").unwrap();
        assert_eq!(headers[ACCEPT], BEEHIVE_MEDIA_TYPE);
        assert_eq!(headers["x-date"], "Tue, 15 Sep 2015 15:25:12 GMT");
        assert_eq!(headers[AUTHORIZATION], "Bearer 1234567890");
    }

    #[test]
    fn control_characters_in_token_are_rejected() {
        let token = Token::bare("bad\ntoken", Utc::now());
        let err = signed_headers(&token, "Tue, 15 Sep 2015 15:25:12 GMT").unwrap_err();
        assert!(matches!(err, BeehiveError::InvalidArgument(_)));
    }

    #[test]
    fn empty_token_still_yields_bearer_scheme() {
        let token = Token::bare("", Utc::now());
        let headers = signed_headers(&token, "Tue, 15 Sep 2015 15:25:12 GMT").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer ");
    }
}
