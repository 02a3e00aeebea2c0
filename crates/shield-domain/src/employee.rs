//! # Employee
//!
//! The aggregation root of the trust score. An employee record is created
//! by the registering company; its derived fields are written exclusively
//! by the score recalculation engine through [`Employee::apply_score`] —
//! never from user input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shield_core::{CompanyId, EmailAddress, EmployeeId, Timestamp};

/// Verification percentage at or above which an employee is flagged
/// `verified`.
pub const VERIFIED_THRESHOLD_PERCENT: u8 = 80;

/// The derived score fields, computed in one pass by the recalculation
/// engine and applied atomically to the employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Aggregate trust score on a 0–100 scale. `None` when no approved
    /// review exists to derive it from — "unscored" is a distinct state,
    /// not a zero.
    pub overall_score: Option<u8>,
    /// Share of this employee's documents that are verified, 0–100.
    pub verification_percentage: u8,
    /// Count of verified documents.
    pub documents_verified: u32,
    /// Whether the verification percentage clears
    /// [`VERIFIED_THRESHOLD_PERCENT`].
    pub verified: bool,
}

impl ScoreSummary {
    /// The summary for an employee with no reviews and no documents.
    pub fn unscored() -> Self {
        Self {
            overall_score: None,
            verification_percentage: 0,
            documents_verified: 0,
            verified: false,
        }
    }
}

/// An employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Given name. Part of the identity key used at login.
    pub first_name: String,
    /// Family name. Part of the identity key used at login.
    pub last_name: String,
    /// Date of birth. Immutable identity key alongside the name.
    pub date_of_birth: NaiveDate,
    /// Contact address.
    pub email: EmailAddress,
    /// The company that registered this record.
    pub created_by: CompanyId,
    /// Derived trust-score fields; engine-owned.
    pub score: ScoreSummary,
    /// False once soft-deleted. Employees referenced by reviews are never
    /// hard-deleted.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record last changed.
    pub updated_at: Timestamp,
    /// When the record was soft-deleted, if it was.
    pub deleted_at: Option<Timestamp>,
}

impl Employee {
    /// Register a new employee record.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: NaiveDate,
        email: EmailAddress,
        created_by: CompanyId,
        now: Timestamp,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            email,
            created_by,
            score: ScoreSummary::unscored(),
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Apply freshly computed score fields. The single mutation path for
    /// everything derived.
    pub fn apply_score(&mut self, summary: ScoreSummary, now: Timestamp) {
        self.score = summary;
        self.updated_at = now;
    }

    /// Soft-delete the record. Idempotent.
    pub fn soft_delete(&mut self, now: Timestamp) {
        if self.is_active {
            self.is_active = false;
            self.deleted_at = Some(now);
            self.updated_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shield_core::temporal::timestamp_from_ymd_hms;

    fn employee() -> Employee {
        Employee::new(
            "Asha",
            "Nair",
            NaiveDate::from_ymd_opt(1994, 11, 2).unwrap(),
            EmailAddress::new("asha.nair@example.com").unwrap(),
            CompanyId::new(),
            timestamp_from_ymd_hms(2026, 1, 5, 9, 0, 0).unwrap(),
        )
    }

    #[test]
    fn new_employee_is_unscored() {
        let e = employee();
        assert_eq!(e.score, ScoreSummary::unscored());
        assert_eq!(e.score.overall_score, None);
        assert!(!e.score.verified);
        assert!(e.is_active);
    }

    #[test]
    fn apply_score_replaces_derived_fields() {
        let mut e = employee();
        let now = timestamp_from_ymd_hms(2026, 2, 1, 12, 0, 0).unwrap();
        e.apply_score(
            ScoreSummary {
                overall_score: Some(80),
                verification_percentage: 100,
                documents_verified: 3,
                verified: true,
            },
            now,
        );
        assert_eq!(e.score.overall_score, Some(80));
        assert!(e.score.verified);
        assert_eq!(e.updated_at, now);
    }

    #[test]
    fn soft_delete_is_idempotent() {
        let mut e = employee();
        let t1 = timestamp_from_ymd_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let t2 = timestamp_from_ymd_hms(2026, 2, 2, 12, 0, 0).unwrap();
        e.soft_delete(t1);
        e.soft_delete(t2);
        assert_eq!(e.deleted_at, Some(t1));
    }
}
