//! Shared test helpers.

#![allow(dead_code)]

use beehive::config::BeehiveConfig;
use beehive::session::Session;
use beehive::util::FixedClock;
use chrono::{DateTime, TimeZone, Utc};
use wiremock::MockServer;

pub const TOKEN: &str = "1234567890";

/// `Tue, 15 Sep 2015 15:25:12 GMT`
pub fn request_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 9, 15, 15, 25, 12).unwrap()
}

/// Session holding [`TOKEN`] that sends requests to `server` at a fixed instant.
pub fn session_for(server: &MockServer) -> Session {
    session_with_fragment(server, &format!("#access_token={TOKEN}"))
}

pub fn session_with_fragment(server: &MockServer, fragment: &str) -> Session {
    Session::builder()
        .config(BeehiveConfig::new().with_base_url(server.uri()))
        .fragment(fragment)
        .clock(FixedClock(request_instant()))
        .build()
}
