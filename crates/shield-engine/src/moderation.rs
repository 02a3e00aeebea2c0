//! # Moderation Service
//!
//! Applies admin decisions to pending reviews. Approval is the single
//! path by which a review starts counting toward the employee's trust
//! score; the score recompute fires inside the same operation.
//!
//! Re-deciding an already-decided review is a conflict — moderation
//! decisions are terminal. An edit to the review's content resets it to
//! pending, which is the only way it re-enters this service's domain.

use std::sync::Arc;

use serde_json::json;

use shield_core::{ReviewId, Timestamp, UserId};
use shield_domain::{ModerationDecision, Review};

use crate::audit::{self, AuditEvent, AuditKind, AuditSink};
use crate::error::EngineError;
use crate::notify::{self, employee_topic, NotificationSink};
use crate::score::ScoreEngine;
use crate::store::EntityStore;

/// Admin moderation over submitted reviews.
#[derive(Clone)]
pub struct ModerationService {
    store: Arc<dyn EntityStore>,
    audit: Arc<dyn AuditSink>,
    notifier: Arc<dyn NotificationSink>,
    scores: ScoreEngine,
}

impl ModerationService {
    /// Wire a moderation service over the shared store and sinks.
    pub fn new(
        store: Arc<dyn EntityStore>,
        audit: Arc<dyn AuditSink>,
        notifier: Arc<dyn NotificationSink>,
        scores: ScoreEngine,
    ) -> Self {
        Self {
            store,
            audit,
            notifier,
            scores,
        }
    }

    /// Apply a moderation decision to a pending review.
    ///
    /// On approval the employee's score is recomputed before the call
    /// returns; rejection leaves the score untouched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] — review does not resolve or is deleted.
    /// - [`EngineError::Conflict`] — the review was already decided.
    pub fn moderate_review(
        &self,
        review_id: ReviewId,
        decision: ModerationDecision,
        admin: UserId,
    ) -> Result<Review, EngineError> {
        self.moderate_review_at(review_id, decision, admin, Timestamp::now())
    }

    /// [`ModerationService::moderate_review`] against an explicit clock.
    pub fn moderate_review_at(
        &self,
        review_id: ReviewId,
        decision: ModerationDecision,
        admin: UserId,
        now: Timestamp,
    ) -> Result<Review, EngineError> {
        let mut review = self.store.review(review_id)?;
        review.moderate(decision, now)?;
        self.store.update_review(&review)?;

        if review.counts_toward_score() {
            self.scores.recompute_at(review.employee_id, now)?;
        }

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(admin),
                AuditKind::ReviewModerated,
                json!({
                    "review_id": review_id,
                    "employee_id": review.employee_id,
                    "decision": decision,
                    "status": review.moderation_status,
                }),
                now,
            ),
        );
        notify::publish_best_effort(
            self.notifier.as_ref(),
            &employee_topic(review.employee_id),
            json!({
                "event": "review_update",
                "review_id": review_id,
                "status": review.moderation_status,
            }),
        );

        Ok(review)
    }
}
