//! Operations built on the signed call primitive.

use crate::call::{Call, HttpMethod};
use crate::session::Session;

/// Current user; also the endpoint used to validate the token.
pub const USER_PATH: &str = "/users/me";
/// Robots linked to the current user.
pub const ROBOTS_PATH: &str = "/users/me/robots";

impl Session {
    /// Probe the API to check whether the token is accepted.
    ///
    /// When the returned call completes, [`Session::connected`] reflects the
    /// outcome before any callbacks attached by the caller run. Every
    /// invocation sends a fresh request.
    pub fn is_connected(&self) -> Call {
        self.sessions_check()
            .done(|session, _, _| session.set_connected(true))
            .fail(|session, error| {
                tracing::debug!(error = %error, "Session check failed");
                session.set_connected(false);
            })
    }

    fn sessions_check(&self) -> Call {
        self.call(HttpMethod::Get, USER_PATH, None)
    }

    /// List the robots linked to the current user.
    pub fn get_robots(&self) -> Call {
        self.call(HttpMethod::Get, ROBOTS_PATH, None)
    }

    /// Fetch the current user's profile.
    pub fn get_user(&self) -> Call {
        self.call(HttpMethod::Get, USER_PATH, None)
    }
}
