mod catalog;
mod config;
pub mod error;
mod measurement;

pub use catalog::*;
pub use config::*;
pub use measurement::*;

/// `status` literal of successful probe and introspection responses
pub const STATUS_OK: &str = "ok";
/// `status` literal of every error response
pub const STATUS_ERROR: &str = "error";
