//! Signed call primitive.
//!
//! Every request to the API goes through [`Session::call`], which stamps the
//! versioned `Accept` type, the issue time and the bearer token on it. The
//! returned [`Call`] is a lazy future with jQuery-style `done`/`fail`
//! registration: exactly one of the two chains runs, once, when it completes.

use std::future::IntoFuture;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::{BeehiveError, Result};
use crate::http::signed_headers;
use crate::session::Session;
use crate::util::http_date;

/// HTTP methods the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    /// Whether requests with this method send a JSON payload.
    pub fn carries_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct CallResponse {
    pub status: u16,
    pub headers: HeaderMap,
    /// Response text as received.
    pub raw: String,
    /// Parsed JSON body; `Null` when the body is empty.
    pub body: Value,
}

type DoneFn = Box<dyn FnOnce(&Session, &Value, &CallResponse) + Send>;
type FailFn = Box<dyn FnOnce(&Session, &BeehiveError) + Send>;
type AlwaysFn = Box<dyn FnOnce(&Session) + Send>;

/// In-flight signed call.
///
/// Nothing is sent until the call is awaited. Callbacks receive the
/// originating session.
#[must_use = "a Call does nothing until awaited"]
pub struct Call {
    session: Session,
    request: BoxFuture<'static, Result<CallResponse>>,
    done: Vec<DoneFn>,
    fail: Vec<FailFn>,
    always: Vec<AlwaysFn>,
}

impl Call {
    fn new(session: Session, request: BoxFuture<'static, Result<CallResponse>>) -> Self {
        Self {
            session,
            request,
            done: Vec::new(),
            fail: Vec::new(),
            always: Vec::new(),
        }
    }

    /// Session this call was issued from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run `f` with the parsed body and the response if the status is 2xx.
    pub fn done<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&Session, &Value, &CallResponse) + Send + 'static,
    {
        self.done.push(Box::new(f));
        self
    }

    /// Run `f` if the call fails: a non-2xx status or a transport error.
    pub fn fail<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&Session, &BeehiveError) + Send + 'static,
    {
        self.fail.push(Box::new(f));
        self
    }

    /// Run `f` after either outcome.
    pub fn always<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&Session) + Send + 'static,
    {
        self.always.push(Box::new(f));
        self
    }

    /// Await the call and deserialize a successful body into `T`.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.await?;
        Ok(serde_json::from_value(response.body)?)
    }
}

impl IntoFuture for Call {
    type Output = Result<CallResponse>;
    type IntoFuture = BoxFuture<'static, Result<CallResponse>>;

    fn into_future(self) -> Self::IntoFuture {
        let Call {
            session,
            request,
            done,
            fail,
            always,
        } = self;

        async move {
            let outcome = request.await;
            match &outcome {
                Ok(response) => {
                    for f in done {
                        f(&session, &response.body, response);
                    }
                }
                Err(error) => {
                    for f in fail {
                        f(&session, error);
                    }
                }
            }
            for f in always {
                f(&session);
            }
            outcome
        }
        .boxed()
    }
}

impl Session {
    /// Issue a signed request for `method` and `path`.
    ///
    /// `body` is sent as compact JSON for POST, PUT and PATCH and dropped for
    /// every other method. The `X-Date` header records the time of this call,
    /// not the time the future is first polled. Failures never surface here;
    /// they arrive on the returned call's failure path.
    pub fn call(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Call {
        let issued_at = self.clock().now();
        let url = format!("{}{}", self.config().api_base(), path);
        let request = self.build_request(method, &url, body, &http_date(issued_at));
        let client = self.client().clone();

        tracing::debug!(%method, %url, "Issuing signed call");

        let future = async move {
            let response = client.execute(request?).await?;
            read_response(method, &url, response).await
        };
        Call::new(self.clone(), future.boxed())
    }

    fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        date: &str,
    ) -> Result<reqwest::Request> {
        let token = self.token().ok_or(BeehiveError::Unauthenticated)?;
        let mut builder = self
            .client()
            .request(method.into(), url)
            .headers(signed_headers(token, date)?);
        match body {
            Some(body) if method.carries_body() => builder = builder.json(&body),
            Some(_) => tracing::debug!(%method, "Dropping body for method without payload"),
            None => {}
        }
        Ok(builder.build()?)
    }
}

async fn read_response(
    method: HttpMethod,
    url: &str,
    response: reqwest::Response,
) -> Result<CallResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let raw = response.text().await?;

    if !status.is_success() {
        tracing::debug!(%method, %url, status = status.as_u16(), "Signed call failed");
        return Err(BeehiveError::api(status.as_u16(), raw));
    }

    let body = if raw.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&raw)?
    };
    Ok(CallResponse {
        status: status.as_u16(),
        headers,
        raw,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn only_payload_methods_carry_body() {
        assert!(HttpMethod::Post.carries_body());
        assert!(HttpMethod::Put.carries_body());
        assert!(HttpMethod::Patch.carries_body());
        assert!(!HttpMethod::Get.carries_body());
        assert!(!HttpMethod::Delete.carries_body());
        assert!(!HttpMethod::Head.carries_body());
    }

    #[test]
    fn method_text_round_trips_case_insensitively() {
        assert_eq!(HttpMethod::from_str("post").unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert!(HttpMethod::from_str("TRACE").is_err());
    }

    #[test]
    fn empty_token_is_sent_as_bare_bearer_scheme() {
        let session = Session::from_fragment("#access_token=");
        let request = session
            .build_request(
                HttpMethod::Get,
                "https://beehive.neatocloud.com/users/me",
                None,
                "Tue, 15 Sep 2015 15:25:12 GMT",
            )
            .unwrap();

        assert_eq!(request.headers()["authorization"], "Bearer ");
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn unauthenticated_session_fails_without_sending() {
        let session = Session::from_fragment("");
        let err = session
            .call(HttpMethod::Get, "/users/me", None)
            .await
            .unwrap_err();
        assert!(matches!(err, BeehiveError::Unauthenticated));
    }
}
