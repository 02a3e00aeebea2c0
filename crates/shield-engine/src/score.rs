//! # Score Recalculation Engine
//!
//! The single entry point that recomputes an employee's derived trust
//! fields. Every trigger — review approval, review deletion, document
//! verification, document deletion — funnels through
//! [`ScoreEngine::recompute`], so the Employee record is never mutated
//! by two divergent code paths.
//!
//! Recomputation reads current aggregate state rather than applying
//! deltas, which makes it idempotent and makes last-writer-wins safe
//! under concurrent triggers.

use std::sync::Arc;

use shield_core::{EmployeeId, Timestamp};
use shield_domain::employee::VERIFIED_THRESHOLD_PERCENT;
use shield_domain::ScoreSummary;

use crate::error::EngineError;
use crate::store::EntityStore;

/// Recomputes employee trust fields from current store state.
#[derive(Clone)]
pub struct ScoreEngine {
    store: Arc<dyn EntityStore>,
}

impl ScoreEngine {
    /// Create a score engine over the given store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Recompute and persist the employee's derived fields, returning the
    /// fresh summary.
    ///
    /// - `overall_score` = round(mean of approved active reviews' average
    ///   ratings × 10) on a 0–100 scale, or `None` when no approved
    ///   review exists — an employee with nothing to score is unscored,
    ///   not stale and not zero.
    /// - `verification_percentage` = round(verified documents ÷ total
    ///   documents × 100), 0 when there are no documents.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotFound`] when the employee does not resolve,
    /// [`EngineError::Storage`] on store failure.
    pub fn recompute(&self, employee_id: EmployeeId) -> Result<ScoreSummary, EngineError> {
        self.recompute_at(employee_id, Timestamp::now())
    }

    /// [`ScoreEngine::recompute`] against an explicit clock.
    pub fn recompute_at(
        &self,
        employee_id: EmployeeId,
        now: Timestamp,
    ) -> Result<ScoreSummary, EngineError> {
        let mut employee = self.store.employee(employee_id)?;

        let reviews = self.store.active_reviews_for_employee(employee_id)?;
        let counted: Vec<f64> = reviews
            .iter()
            .filter(|r| r.counts_toward_score())
            .map(|r| r.average_rating)
            .collect();

        let overall_score = if counted.is_empty() {
            None
        } else {
            let mean = counted.iter().sum::<f64>() / counted.len() as f64;
            Some((mean * 10.0).round() as u8)
        };

        let documents = self.store.documents_for_employee(employee_id)?;
        let total = documents.len();
        let verified_count = documents.iter().filter(|d| d.is_verified()).count();
        let verification_percentage = if total == 0 {
            0
        } else {
            ((verified_count as f64 / total as f64) * 100.0).round() as u8
        };

        let summary = ScoreSummary {
            overall_score,
            verification_percentage,
            documents_verified: verified_count as u32,
            verified: verification_percentage >= VERIFIED_THRESHOLD_PERCENT,
        };

        employee.apply_score(summary, now);
        self.store.update_employee(&employee)?;

        tracing::debug!(
            employee = %employee_id,
            overall_score = ?summary.overall_score,
            verification_percentage = summary.verification_percentage,
            "recomputed employee score"
        );

        Ok(summary)
    }
}
