//! OAuth2 implicit-grant identity: redirect parsing, tokens, and login URLs.

pub mod authorize;
pub mod error;
pub mod fragment;
pub mod token;

pub use authorize::{authorize_url, LoginOptions, Navigator, StdoutNavigator};
pub use error::AuthorizationError;
pub use fragment::{RedirectFragment, RedirectOutcome};
pub use token::Token;
