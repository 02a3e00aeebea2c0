//! # Document
//!
//! An identity/employment document uploaded against an employee, with the
//! auto-verification record computed at intake and the verification
//! status a human can later override.
//!
//! ## Invariant
//!
//! `Verified` is reached by exactly two mutually exclusive entry points:
//! the auto path ([`Document::record_auto_verification`], which requires
//! the confidence threshold) and the manual path
//! ([`Document::apply_manual_decision`], an explicit verifier action).
//! Both converge on the same status field.

use serde::{Deserialize, Serialize};

use shield_core::{DocumentId, EmployeeId, Timestamp, UserId};
use shield_verify::{AutoVerification, DocumentKind};

/// The verification state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Awaiting verification (auto-verification did not clear the bar).
    Pending,
    /// Verified, automatically or manually. Counts toward the employee's
    /// verification percentage.
    Verified,
    /// Rejected by a verifier.
    Rejected,
    /// Escalated for closer manual inspection.
    UnderReview,
}

impl VerificationStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
            Self::UnderReview => "under_review",
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verifier's manual decision on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualDecision {
    /// Mark the document verified.
    Verify,
    /// Reject the document.
    Reject,
    /// Escalate for closer inspection.
    Escalate,
}

impl ManualDecision {
    /// The status this decision resolves to.
    pub fn resolved_status(&self) -> VerificationStatus {
        match self {
            Self::Verify => VerificationStatus::Verified,
            Self::Reject => VerificationStatus::Rejected,
            Self::Escalate => VerificationStatus::UnderReview,
        }
    }
}

/// Metadata of the stored upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// Original file name as uploaded.
    pub file_name: String,
    /// Path of the stored file, relative to the document root.
    pub file_path: String,
    /// Stored size in bytes.
    pub file_size: u64,
    /// Declared MIME type.
    pub mime_type: String,
}

/// An uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// The employee the document belongs to.
    pub employee_id: EmployeeId,
    /// Document kind; selects the format rule.
    pub kind: DocumentKind,
    /// The document number as submitted.
    pub number: String,
    /// Stored-file metadata.
    pub file: FileMeta,
    /// Current verification status.
    pub status: VerificationStatus,
    /// Auto-verification record from intake.
    pub auto: AutoVerification,
    /// The verifier behind a manual decision, if one was made.
    pub verified_by: Option<UserId>,
    /// When the document was uploaded.
    pub uploaded_at: Timestamp,
    /// When the document last changed.
    pub updated_at: Timestamp,
}

impl Document {
    /// Construct a freshly uploaded, not-yet-verified document.
    pub fn new(
        employee_id: EmployeeId,
        kind: DocumentKind,
        number: impl Into<String>,
        file: FileMeta,
        now: Timestamp,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            employee_id,
            kind,
            number: number.into(),
            file,
            status: VerificationStatus::Pending,
            auto: AutoVerification::not_attempted(),
            verified_by: None,
            uploaded_at: now,
            updated_at: now,
        }
    }

    /// Persist the auto-verification outcome computed at intake. When the
    /// run passed, the document is verified on the spot; otherwise it
    /// stays pending for a human.
    pub fn record_auto_verification(&mut self, auto: AutoVerification, now: Timestamp) {
        if auto.passed {
            self.status = VerificationStatus::Verified;
        }
        self.auto = auto;
        self.updated_at = now;
    }

    /// Apply a manual verification decision, overriding whatever the auto
    /// path concluded.
    pub fn apply_manual_decision(
        &mut self,
        decision: ManualDecision,
        verifier: UserId,
        now: Timestamp,
    ) {
        self.status = decision.resolved_status();
        self.verified_by = Some(verifier);
        self.updated_at = now;
    }

    /// Whether this document counts toward the verification percentage.
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }
}
