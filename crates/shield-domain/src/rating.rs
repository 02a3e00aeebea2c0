//! # Rating Dimensions
//!
//! The eight dimensions a company scores an employee on, the clamped
//! [`RatingSet`] stored on a review, and the lenient coercion from raw
//! submission input.
//!
//! Coercion never rejects: a missing or non-numeric dimension becomes the
//! minimum rating of 1, and out-of-range values clamp into [1, 10]. The
//! submission form drives honest input; the engine's job is to keep the
//! aggregate well-defined whatever arrives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lowest rating on every dimension.
pub const MIN_RATING: u8 = 1;
/// Highest rating on every dimension.
pub const MAX_RATING: u8 = 10;
/// Number of rating dimensions.
pub const DIMENSION_COUNT: usize = 8;

/// One of the eight scored dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingDimension {
    /// Command of the skills the role requires.
    TechnicalCompetence,
    /// Quality and consistency of delivered work.
    WorkQuality,
    /// Attendance, deadlines, dependability.
    Reliability,
    /// Written and spoken communication.
    Communication,
    /// Collaboration within and across teams.
    Teamwork,
    /// Honesty and ethical conduct.
    Integrity,
    /// Self-direction and ownership.
    Initiative,
    /// Workplace conduct and client-facing behavior.
    Professionalism,
}

impl RatingDimension {
    /// All dimensions, in canonical order.
    pub fn all() -> &'static [RatingDimension] {
        &[
            Self::TechnicalCompetence,
            Self::WorkQuality,
            Self::Reliability,
            Self::Communication,
            Self::Teamwork,
            Self::Integrity,
            Self::Initiative,
            Self::Professionalism,
        ]
    }

    /// The canonical string identifier for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TechnicalCompetence => "technical_competence",
            Self::WorkQuality => "work_quality",
            Self::Reliability => "reliability",
            Self::Communication => "communication",
            Self::Teamwork => "teamwork",
            Self::Integrity => "integrity",
            Self::Initiative => "initiative",
            Self::Professionalism => "professionalism",
        }
    }
}

impl std::fmt::Display for RatingDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, untrusted rating input as submitted.
///
/// Every field is an arbitrary JSON value so that strings, floats, nulls,
/// and absent fields all coerce instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRatings {
    pub technical_competence: Option<Value>,
    pub work_quality: Option<Value>,
    pub reliability: Option<Value>,
    pub communication: Option<Value>,
    pub teamwork: Option<Value>,
    pub integrity: Option<Value>,
    pub initiative: Option<Value>,
    pub professionalism: Option<Value>,
}

impl RawRatings {
    /// Build raw ratings with the same integer on every dimension, for
    /// fixtures and tests.
    pub fn uniform(value: i64) -> Self {
        let v = || Some(Value::from(value));
        Self {
            technical_competence: v(),
            work_quality: v(),
            reliability: v(),
            communication: v(),
            teamwork: v(),
            integrity: v(),
            initiative: v(),
            professionalism: v(),
        }
    }
}

/// The eight coerced ratings stored on a review, each in [1, 10].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSet {
    pub technical_competence: u8,
    pub work_quality: u8,
    pub reliability: u8,
    pub communication: u8,
    pub teamwork: u8,
    pub integrity: u8,
    pub initiative: u8,
    pub professionalism: u8,
}

impl RatingSet {
    /// Coerce raw submission input into a well-defined rating set.
    pub fn coerce(raw: &RawRatings) -> Self {
        Self {
            technical_competence: coerce_dimension(raw.technical_competence.as_ref()),
            work_quality: coerce_dimension(raw.work_quality.as_ref()),
            reliability: coerce_dimension(raw.reliability.as_ref()),
            communication: coerce_dimension(raw.communication.as_ref()),
            teamwork: coerce_dimension(raw.teamwork.as_ref()),
            integrity: coerce_dimension(raw.integrity.as_ref()),
            initiative: coerce_dimension(raw.initiative.as_ref()),
            professionalism: coerce_dimension(raw.professionalism.as_ref()),
        }
    }

    /// A uniform rating set, for fixtures and tests.
    pub fn uniform(value: u8) -> Self {
        let v = value.clamp(MIN_RATING, MAX_RATING);
        Self {
            technical_competence: v,
            work_quality: v,
            reliability: v,
            communication: v,
            teamwork: v,
            integrity: v,
            initiative: v,
            professionalism: v,
        }
    }

    /// The rating on a given dimension.
    pub fn get(&self, dimension: RatingDimension) -> u8 {
        match dimension {
            RatingDimension::TechnicalCompetence => self.technical_competence,
            RatingDimension::WorkQuality => self.work_quality,
            RatingDimension::Reliability => self.reliability,
            RatingDimension::Communication => self.communication,
            RatingDimension::Teamwork => self.teamwork,
            RatingDimension::Integrity => self.integrity,
            RatingDimension::Initiative => self.initiative,
            RatingDimension::Professionalism => self.professionalism,
        }
    }

    /// Arithmetic mean of the eight dimensions, unrounded.
    pub fn average(&self) -> f64 {
        let sum: u32 = RatingDimension::all()
            .iter()
            .map(|d| u32::from(self.get(*d)))
            .sum();
        f64::from(sum) / DIMENSION_COUNT as f64
    }
}

/// Coerce one raw dimension value to an integer in [1, 10].
///
/// Missing and non-numeric values become 1; numeric strings are accepted;
/// floats truncate toward zero before clamping.
fn coerce_dimension(value: Option<&Value>) -> u8 {
    let n: i64 = match value {
        Some(Value::Number(num)) => num
            .as_i64()
            .or_else(|| num.as_f64().map(|f| f as i64))
            .unwrap_or(i64::from(MIN_RATING)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| f as i64))
            .unwrap_or(i64::from(MIN_RATING)),
        _ => i64::from(MIN_RATING),
    };
    n.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uniform_set_average() {
        assert_eq!(RatingSet::uniform(8).average(), 8.0);
        assert_eq!(RatingSet::uniform(1).average(), 1.0);
    }

    #[test]
    fn mixed_average_is_unrounded() {
        let mut set = RatingSet::uniform(7);
        set.teamwork = 8;
        // (7*7 + 8) / 8 = 57/8
        assert_eq!(set.average(), 7.125);
    }

    #[test]
    fn coerce_missing_defaults_to_one() {
        let set = RatingSet::coerce(&RawRatings::default());
        assert_eq!(set, RatingSet::uniform(1));
    }

    #[test]
    fn coerce_clamps_out_of_range() {
        let raw = RawRatings {
            teamwork: Some(json!(14)),
            integrity: Some(json!(0)),
            reliability: Some(json!(-3)),
            ..RawRatings::uniform(5)
        };
        let set = RatingSet::coerce(&raw);
        assert_eq!(set.teamwork, 10);
        assert_eq!(set.integrity, 1);
        assert_eq!(set.reliability, 1);
        assert_eq!(set.communication, 5);
    }

    #[test]
    fn coerce_accepts_numeric_strings() {
        let raw = RawRatings {
            communication: Some(json!("9")),
            work_quality: Some(json!(" 6 ")),
            ..RawRatings::default()
        };
        let set = RatingSet::coerce(&raw);
        assert_eq!(set.communication, 9);
        assert_eq!(set.work_quality, 6);
    }

    #[test]
    fn coerce_non_numeric_defaults_to_one() {
        let raw = RawRatings {
            initiative: Some(json!("excellent")),
            professionalism: Some(json!(null)),
            teamwork: Some(json!({"score": 8})),
            ..RawRatings::default()
        };
        let set = RatingSet::coerce(&raw);
        assert_eq!(set.initiative, 1);
        assert_eq!(set.professionalism, 1);
        assert_eq!(set.teamwork, 1);
    }

    #[test]
    fn coerce_truncates_floats() {
        let raw = RawRatings {
            technical_competence: Some(json!(7.9)),
            ..RawRatings::default()
        };
        let set = RatingSet::coerce(&raw);
        assert_eq!(set.technical_competence, 7);
    }

    #[test]
    fn dimension_order_is_stable() {
        let names: Vec<&str> = RatingDimension::all().iter().map(|d| d.as_str()).collect();
        assert_eq!(
            names,
            [
                "technical_competence",
                "work_quality",
                "reliability",
                "communication",
                "teamwork",
                "integrity",
                "initiative",
                "professionalism",
            ]
        );
    }
}
