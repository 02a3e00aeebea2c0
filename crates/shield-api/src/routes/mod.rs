//! # API Routes
//!
//! One module per resource, each exporting `router()`. Handlers are thin:
//! parse identifiers, narrow the actor, delegate to the engine, shape the
//! response. Business rules live in `shield-engine`.

pub mod companies;
pub mod documents;
pub mod employees;
pub mod reviews;

use crate::error::AppError;

/// Parse a path/body identifier, mapping failure to a validation error.
pub(crate) fn parse_id<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("malformed {what}: {raw:?}")))
}
