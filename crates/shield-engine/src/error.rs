//! # Engine Error Taxonomy
//!
//! The error surface of every engine operation. The HTTP layer maps each
//! variant onto a status code; nothing here retries — storage retries, if
//! any, belong to the caller or the infrastructure.

use thiserror::Error;

use shield_domain::ReviewError;

use crate::store::StoreError;

/// Errors raised by engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Bad input shape or range. Not retryable without changing input.
    #[error("validation error: {0}")]
    Validation(String),

    /// A new review was submitted too long after the employment ended.
    /// Applies to creation only; edits are exempt.
    #[error(
        "reviews must be submitted within {limit_days} days of employment end date \
         (employment ended {days_since_end} days ago)"
    )]
    TemporalWindow {
        /// Whole days between employment end and submission.
        days_since_end: i64,
        /// The window size.
        limit_days: i64,
    },

    /// The actor does not own the resource it tried to change.
    #[error("not authorized: {0}")]
    Authorization(String),

    /// The identifier does not resolve to a live record.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation conflicts with current state (e.g. re-deciding an
    /// already-moderated review).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The entity store failed; surfaced as-is, never retried here.
    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        match err {
            // A missing record is the caller's 404, not a storage fault.
            StoreError::NotFound { entity, id } => Self::NotFound(format!("{entity} {id}")),
            other => Self::Storage(other),
        }
    }
}

impl From<ReviewError> for EngineError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::CommentTooShort { .. } => Self::Validation(err.to_string()),
            ReviewError::AlreadyModerated { .. } => Self::Conflict(err.to_string()),
            // Soft-deleted records are invisible; surfacing them would
            // leak their existence.
            ReviewError::Deleted { review_id } => Self::NotFound(format!("review {review_id}")),
        }
    }
}

impl From<shield_core::ValidationError> for EngineError {
    fn from(err: shield_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shield_core::ReviewId;
    use shield_domain::ModerationStatus;

    #[test]
    fn temporal_window_message_names_the_rule() {
        let err = EngineError::TemporalWindow {
            days_since_end: 20,
            limit_days: 15,
        };
        let msg = err.to_string();
        assert!(msg.contains("within 15 days"));
        assert!(msg.contains("20 days ago"));
    }

    #[test]
    fn already_moderated_maps_to_conflict() {
        let err: EngineError = ReviewError::AlreadyModerated {
            review_id: ReviewId::new(),
            status: ModerationStatus::Approved,
        }
        .into();
        assert!(matches!(err, EngineError::Conflict(_)));
    }

    #[test]
    fn deleted_review_maps_to_not_found() {
        let err: EngineError = ReviewError::Deleted {
            review_id: ReviewId::new(),
        }
        .into();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn short_comment_maps_to_validation() {
        let err: EngineError = ReviewError::CommentTooShort { len: 10, min: 50 }.into();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: EngineError = StoreError::not_found("employee", "abc").into();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn store_unavailable_stays_a_storage_error() {
        let err: EngineError = StoreError::Unavailable("connection refused".to_string()).into();
        assert!(matches!(err, EngineError::Storage(_)));
    }
}
