//! Signed tree heads and their wire forms (RFC 6962 §3.5).

mod constants;
mod types;

pub use constants::*;
pub use types::*;
