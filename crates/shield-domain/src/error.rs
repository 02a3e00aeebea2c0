//! # Domain Errors
//!
//! Structured errors raised by entity state transitions and content
//! validation. All errors use `thiserror` derives; callers map them onto
//! their own taxonomy (the engine maps onto `EngineError`, the API onto
//! HTTP status codes).

use thiserror::Error;

use shield_core::ReviewId;

use crate::review::ModerationStatus;

/// Errors raised by [`crate::review::Review`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// The review comment is shorter than the required minimum.
    #[error("review comment must be at least {min} characters, got {len}")]
    CommentTooShort {
        /// Characters submitted.
        len: usize,
        /// Required minimum.
        min: usize,
    },

    /// A moderation decision was attempted on a review that is no longer
    /// pending. Moderation decisions are terminal; re-deciding is a
    /// conflict, not an overwrite.
    #[error("review {review_id} has already been moderated ({status})")]
    AlreadyModerated {
        /// The review in question.
        review_id: ReviewId,
        /// Its current, already-decided status.
        status: ModerationStatus,
    },

    /// An operation that requires an active review hit a soft-deleted one.
    #[error("review {review_id} has been deleted")]
    Deleted {
        /// The review in question.
        review_id: ReviewId,
    },
}
