//! # Core Validation Errors
//!
//! Construction-time validation failures for the domain primitives defined
//! in this crate. Business-rule errors (temporal windows, authorization,
//! storage) live with the engine that raises them.

use thiserror::Error;

/// A domain primitive failed validation at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The string is not a plausible email address.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The string is not a recognized actor role.
    #[error("unknown role: {0:?}")]
    InvalidRole(String),

    /// The string is not a valid UTC timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
