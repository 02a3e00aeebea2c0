//! # Performance Review
//!
//! A company's review of an employee, with the moderation state machine
//! that gates whether it counts toward the trust score.
//!
//! ## Moderation States
//!
//! ```text
//! Pending ──approve()──▶ Approved (terminal)
//!    │
//!    └───reject()──────▶ Rejected (terminal)
//!
//! apply_edit() from any state ──▶ Pending
//! ```
//!
//! ## Design Choice: Validated Enum over Typestate
//!
//! The machine is a validated enum rather than typestate. Reviews are
//! stored and transmitted with the state unknown at compile time, and an
//! edit can move an already-decided review back to `Pending`; a typestate
//! encoding would force every caller through a dynamic wrapper anyway.
//! Invalid decisions return [`ReviewError::AlreadyModerated`].
//!
//! ## Invariants
//!
//! - At most one **active** review exists per (company, employee) pair;
//!   the storage layer enforces this atomically. This type only carries
//!   the `is_active` flag.
//! - Every content edit appends to the append-only `edit_history` and
//!   resets moderation to `Pending`: changed content must be re-reviewed
//!   before it counts toward anyone's score.
//! - Ratings are clamped to [1, 10] before they reach this type.

use serde::{Deserialize, Serialize};

use shield_core::{CompanyId, EmployeeId, ReviewId, Timestamp, UserId};

use crate::employment::EmploymentDetails;
use crate::error::ReviewError;
use crate::rating::RatingSet;

/// Minimum length of a review comment, in characters.
pub const MIN_COMMENT_CHARS: usize = 50;

// ── Moderation State ───────────────────────────────────────────────────

/// The moderation state of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    /// Awaiting an admin decision. Initial state; does not count toward
    /// the employee's score.
    Pending,
    /// Approved by an admin; counts toward the score. Terminal.
    Approved,
    /// Rejected by an admin; never counts. Terminal.
    Rejected,
}

impl ModerationStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether a decision has been made (no further decisions allowed).
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An admin's moderation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationDecision {
    /// Approve the review; it starts counting toward the score.
    Approve,
    /// Reject the review; it never counts.
    Reject,
}

impl ModerationDecision {
    /// The status this decision resolves to.
    pub fn resolved_status(&self) -> ModerationStatus {
        match self {
            Self::Approve => ModerationStatus::Approved,
            Self::Reject => ModerationStatus::Rejected,
        }
    }
}

// ── Content ────────────────────────────────────────────────────────────

/// The reviewable content of a review — everything a company writes,
/// after rating coercion. Shared between create and edit paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewContent {
    /// Coerced ratings, each in [1, 10].
    pub ratings: RatingSet,
    /// Employment context the review describes.
    pub employment: EmploymentDetails,
    /// Free-text assessment, at least [`MIN_COMMENT_CHARS`] characters.
    pub comment: String,
    /// Whether the company would rehire this employee.
    pub would_rehire: bool,
    /// Free-form labels.
    pub tags: Vec<String>,
}

impl ReviewContent {
    /// Validate content rules that apply to both create and edit.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::CommentTooShort`] when the comment is under
    /// the minimum length.
    pub fn validate(&self) -> Result<(), ReviewError> {
        let len = self.comment.chars().count();
        if len < MIN_COMMENT_CHARS {
            return Err(ReviewError::CommentTooShort {
                len,
                min: MIN_COMMENT_CHARS,
            });
        }
        Ok(())
    }
}

// ── Edit History ───────────────────────────────────────────────────────

/// The content snapshot recorded with each edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditChanges {
    /// Ratings after the edit.
    pub ratings: RatingSet,
    /// Comment after the edit.
    pub comment: String,
}

/// One entry in a review's append-only edit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    /// When the edit was applied.
    pub edited_at: Timestamp,
    /// The user who applied it.
    pub edited_by: UserId,
    /// What the content became.
    pub changes: EditChanges,
}

// ── Review ─────────────────────────────────────────────────────────────

/// A company's performance review of an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The reviewing company.
    pub company_id: CompanyId,
    /// The reviewed employee.
    pub employee_id: EmployeeId,
    /// Coerced ratings.
    pub ratings: RatingSet,
    /// Mean of the eight ratings, unrounded. Stored so aggregation never
    /// re-derives it against a different dimension set.
    pub average_rating: f64,
    /// Employment context.
    pub employment: EmploymentDetails,
    /// Free-text assessment.
    pub comment: String,
    /// Rehire verdict.
    pub would_rehire: bool,
    /// Free-form labels.
    pub tags: Vec<String>,
    /// Moderation state.
    pub moderation_status: ModerationStatus,
    /// False once soft-deleted.
    pub is_active: bool,
    /// Append-only log of content edits.
    pub edit_history: Vec<EditRecord>,
    /// When the review was created.
    pub created_at: Timestamp,
    /// When the review last changed (content or status).
    pub updated_at: Timestamp,
    /// When the review was soft-deleted, if it was.
    pub deleted_at: Option<Timestamp>,
}

impl Review {
    /// Construct a new pending review from validated content.
    ///
    /// The temporal submission-window rule is the caller's to enforce —
    /// it applies to creation only and needs the caller's clock.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::CommentTooShort`] when the content fails
    /// validation.
    pub fn create(
        company_id: CompanyId,
        employee_id: EmployeeId,
        content: ReviewContent,
        now: Timestamp,
    ) -> Result<Self, ReviewError> {
        content.validate()?;
        let average_rating = content.ratings.average();
        Ok(Self {
            id: ReviewId::new(),
            company_id,
            employee_id,
            ratings: content.ratings,
            average_rating,
            employment: content.employment,
            comment: content.comment,
            would_rehire: content.would_rehire,
            tags: content.tags,
            moderation_status: ModerationStatus::Pending,
            is_active: true,
            edit_history: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Overwrite the review's content, append an edit record, and reset
    /// moderation to `Pending`.
    ///
    /// Edits are exempt from the submission-window rule; an old review
    /// stays editable for as long as it is active.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Deleted`] for a soft-deleted review or
    /// [`ReviewError::CommentTooShort`] for invalid content.
    pub fn apply_edit(
        &mut self,
        content: ReviewContent,
        editor: UserId,
        now: Timestamp,
    ) -> Result<(), ReviewError> {
        if !self.is_active {
            return Err(ReviewError::Deleted { review_id: self.id });
        }
        content.validate()?;

        self.ratings = content.ratings;
        self.average_rating = content.ratings.average();
        self.employment = content.employment;
        self.comment = content.comment;
        self.would_rehire = content.would_rehire;
        self.tags = content.tags;
        self.edit_history.push(EditRecord {
            edited_at: now,
            edited_by: editor,
            changes: EditChanges {
                ratings: self.ratings,
                comment: self.comment.clone(),
            },
        });
        // Changed content must be re-reviewed before it counts again.
        self.moderation_status = ModerationStatus::Pending;
        self.updated_at = now;
        Ok(())
    }

    /// Apply a moderation decision to a pending review.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::AlreadyModerated`] when the review is not
    /// pending, and [`ReviewError::Deleted`] when it is soft-deleted.
    pub fn moderate(
        &mut self,
        decision: ModerationDecision,
        now: Timestamp,
    ) -> Result<(), ReviewError> {
        if !self.is_active {
            return Err(ReviewError::Deleted { review_id: self.id });
        }
        if self.moderation_status.is_decided() {
            return Err(ReviewError::AlreadyModerated {
                review_id: self.id,
                status: self.moderation_status,
            });
        }
        self.moderation_status = decision.resolved_status();
        self.updated_at = now;
        Ok(())
    }

    /// Soft-delete the review. Idempotent.
    pub fn soft_delete(&mut self, now: Timestamp) {
        if self.is_active {
            self.is_active = false;
            self.deleted_at = Some(now);
            self.updated_at = now;
        }
    }

    /// Whether this review contributes to the employee's trust score:
    /// active and approved.
    pub fn counts_toward_score(&self) -> bool {
        self.is_active && self.moderation_status == ModerationStatus::Approved
    }
}
