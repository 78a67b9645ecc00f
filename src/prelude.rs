//! Convenience re-exports for common use.

pub use crate::auth::{AuthorizationError, LoginOptions, Navigator, StdoutNavigator, Token};
pub use crate::call::{Call, CallResponse, HttpMethod};
pub use crate::config::BeehiveConfig;
pub use crate::error::{BeehiveError, Result};
pub use crate::session::Session;
