//! # Employment Details
//!
//! The employment context a review is written against, and the
//! submission-window arithmetic for the 15-day rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shield_core::Timestamp;

/// Days after the employment end date during which a new review may
/// still be filed.
pub const SUBMISSION_WINDOW_DAYS: i64 = 15;

/// The nature of the employment relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl EmploymentType {
    /// The canonical string identifier for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Internship => "internship",
            Self::Freelance => "freelance",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The employment the review describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentDetails {
    /// Role title held by the employee.
    pub designation: String,
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Last day of employment; `None` while still employed.
    pub end_date: Option<NaiveDate>,
    /// Relationship type.
    pub employment_type: EmploymentType,
}

impl EmploymentDetails {
    /// Whole days elapsed since the employment ended, as of `now`.
    ///
    /// `None` when the employment is ongoing. Negative when the recorded
    /// end date lies in the future.
    pub fn days_since_end(&self, now: Timestamp) -> Option<i64> {
        self.end_date.map(|end| now.days_since(end))
    }

    /// Whether a **new** review may still be filed against this
    /// employment as of `now`. Ongoing employment is always inside the
    /// window; ended employment allows [`SUBMISSION_WINDOW_DAYS`] days.
    pub fn within_submission_window(&self, now: Timestamp) -> bool {
        match self.days_since_end(now) {
            None => true,
            Some(days) => days <= SUBMISSION_WINDOW_DAYS,
        }
    }
}
