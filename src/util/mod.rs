//! Utilities.

pub mod clock;

pub use clock::{http_date, Clock, FixedClock, SystemClock};
