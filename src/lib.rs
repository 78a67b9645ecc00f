//! Beehive — session and signed-request client for the Neato Beehive API.
//!
//! A [`Session`](session::Session) is built from the OAuth2 implicit-grant
//! redirect the user lands on. Every API request then goes through
//! [`Session::call`](session::Session::call), which signs it with the bearer
//! token, the versioned `Accept` type and an `X-Date` header.
//!
//! # Quick Start
//!
//! ```no_run
//! use beehive::prelude::*;
//!
//! # async fn example() -> beehive::error::Result<()> {
//! let session = Session::from_fragment("#access_token=abc&token_type=bearer&expires_in=1209600");
//! let robots = session
//!     .get_robots()
//!     .fail(|_, err| eprintln!("listing failed: {err}"))
//!     .await?;
//! println!("{}", robots.body);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod call;
pub mod config;
pub mod error;
pub mod http;
pub mod prelude;
pub mod session;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
