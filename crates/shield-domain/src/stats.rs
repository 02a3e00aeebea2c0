//! # Review Statistics
//!
//! Aggregate statistics over an employee's active reviews. Moderation
//! status is deliberately NOT filtered at this layer — callers decide
//! whether pending/rejected reviews belong in the view they are building
//! (the trust score itself only ever counts approved reviews, and is
//! computed by the engine, not here).

use serde::{Deserialize, Serialize};

use crate::rating::RatingDimension;
use crate::review::Review;

/// Mean rating on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionAverage {
    /// The dimension.
    pub dimension: RatingDimension,
    /// Mean across the considered reviews.
    pub average: f64,
}

/// Aggregate statistics for a set of reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Number of reviews considered.
    pub total_reviews: u32,
    /// Mean of the reviews' average ratings.
    pub overall_average: f64,
    /// Fraction of reviews with a positive rehire verdict, in [0, 1].
    pub would_rehire_rate: f64,
    /// Per-dimension means, in canonical dimension order.
    pub dimension_averages: Vec<DimensionAverage>,
}

impl ReviewStats {
    /// The zero-review aggregate: all means zero, empty-defaults rather
    /// than an error.
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            overall_average: 0.0,
            would_rehire_rate: 0.0,
            dimension_averages: RatingDimension::all()
                .iter()
                .map(|d| DimensionAverage {
                    dimension: *d,
                    average: 0.0,
                })
                .collect(),
        }
    }

    /// Compute statistics over the given reviews.
    ///
    /// The caller selects the population (typically the employee's active
    /// reviews); nothing is filtered here.
    pub fn compute(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::empty();
        }
        let n = reviews.len() as f64;

        let overall_average = reviews.iter().map(|r| r.average_rating).sum::<f64>() / n;
        let rehire_count = reviews.iter().filter(|r| r.would_rehire).count();

        let dimension_averages = RatingDimension::all()
            .iter()
            .map(|d| DimensionAverage {
                dimension: *d,
                average: reviews
                    .iter()
                    .map(|r| f64::from(r.ratings.get(*d)))
                    .sum::<f64>()
                    / n,
            })
            .collect();

        Self {
            total_reviews: reviews.len() as u32,
            overall_average,
            would_rehire_rate: rehire_count as f64 / n,
            dimension_averages,
        }
    }
}
