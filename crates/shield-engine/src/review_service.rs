//! # Review Aggregation Core
//!
//! Submission (create-or-edit upsert), deletion, and statistics for
//! performance reviews.
//!
//! ## Upsert semantics
//!
//! One company gets one active review per employee. Submission looks up
//! the active review for the pair: present means **edit** (content
//! overwrite, edit-history append, moderation reset), absent means
//! **create** (temporal-window check, pending status). The store enforces
//! the pair constraint atomically; when two submitters race past the
//! lookup, the loser's insert fails the unique constraint and is retried
//! once as an edit of the winner's review.
//!
//! ## Temporal window
//!
//! New reviews are accepted only while the employment ended at most
//! [`SUBMISSION_WINDOW_DAYS`] days ago. Edits are exempt — an old review
//! stays correctable for as long as it is active.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use shield_core::{CompanyId, EmployeeId, ReviewId, Timestamp, UserId};
use shield_domain::{
    EmploymentDetails, RatingSet, RawRatings, Review, ReviewContent, ReviewStats,
    SUBMISSION_WINDOW_DAYS,
};

use crate::audit::{self, AuditEvent, AuditKind, AuditSink};
use crate::error::EngineError;
use crate::notify::{self, employee_topic, NotificationSink};
use crate::score::ScoreEngine;
use crate::store::{EntityStore, StoreError};

/// A review submission as it arrives from the HTTP layer: ratings still
/// raw, everything else already shaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Untrusted rating input; coerced, never rejected.
    pub ratings: RawRatings,
    /// Employment context.
    pub employment: EmploymentDetails,
    /// Free-text assessment.
    pub comment: String,
    /// Rehire verdict.
    pub would_rehire: bool,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ReviewSubmission {
    fn into_content(self) -> ReviewContent {
        ReviewContent {
            ratings: RatingSet::coerce(&self.ratings),
            employment: self.employment,
            comment: self.comment,
            would_rehire: self.would_rehire,
            tags: self.tags,
        }
    }
}

/// Review submission, deletion, and statistics.
#[derive(Clone)]
pub struct ReviewService {
    store: Arc<dyn EntityStore>,
    audit: Arc<dyn AuditSink>,
    notifier: Arc<dyn NotificationSink>,
    scores: ScoreEngine,
}

impl ReviewService {
    /// Wire a review service over the shared store and sinks.
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

    /// Submit a review: create a pending one, or edit the company's
    /// existing active review of this employee.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] — employee or company does not resolve.
    /// - [`EngineError::Validation`] — comment under the minimum length.
    /// - [`EngineError::TemporalWindow`] — new review outside the window.
    pub fn submit_review(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        submission: ReviewSubmission,
        actor: UserId,
    ) -> Result<Review, EngineError> {
        self.submit_review_at(company_id, employee_id, submission, actor, Timestamp::now())
    }

    /// [`ReviewService::submit_review`] against an explicit clock.
    pub fn submit_review_at(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        submission: ReviewSubmission,
        actor: UserId,
        now: Timestamp,
    ) -> Result<Review, EngineError> {
        let employee = self.store.employee(employee_id)?;
        if !employee.is_active {
            return Err(EngineError::NotFound(format!("employee {employee_id}")));
        }
        self.store.company(company_id)?;

        let content = submission.into_content();

        let (review, kind) = match self.store.active_review_for_pair(company_id, employee_id)? {
            Some(existing) => (
                self.edit_existing(existing, content, actor, now)?,
                AuditKind::ReviewUpdated,
            ),
            None => match self.create_new(company_id, employee_id, &content, now) {
                // Lost the create race: another submitter inserted the
                // pair's review after our lookup. Their review is the
                // active one; ours becomes an edit of it.
                Err(EngineError::Storage(StoreError::UniqueViolation { .. })) => {
                    let existing = self
                        .store
                        .active_review_for_pair(company_id, employee_id)?
                        .ok_or_else(|| {
                            EngineError::Storage(StoreError::Unavailable(
                                "active review vanished during upsert".to_string(),
                            ))
                        })?;
                    (
                        self.edit_existing(existing, content, actor, now)?,
                        AuditKind::ReviewUpdated,
                    )
                }
                other => (other?, AuditKind::ReviewCreated),
            },
        };

        // New and edited reviews are pending; approved is unreachable
        // through this path. Guarded anyway: a review that is somehow
        // approved after persistence must be reflected in the score.
        if review.counts_toward_score() {
            self.scores.recompute_at(employee_id, now)?;
        }

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(actor),
                kind,
                json!({
                    "review_id": review.id,
                    "company_id": company_id,
                    "employee_id": employee_id,
                }),
                now,
            ),
        );
        notify::publish_best_effort(
            self.notifier.as_ref(),
            &employee_topic(employee_id),
            json!({"event": "review_update", "review_id": review.id}),
        );

        Ok(review)
    }

    fn create_new(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
        content: &ReviewContent,
        now: Timestamp,
    ) -> Result<Review, EngineError> {
        if !content.employment.within_submission_window(now) {
            // within_submission_window is false only with an end date set.
            let days_since_end = content.employment.days_since_end(now).unwrap_or_default();
            return Err(EngineError::TemporalWindow {
                days_since_end,
                limit_days: SUBMISSION_WINDOW_DAYS,
            });
        }
        let review = Review::create(company_id, employee_id, content.clone(), now)?;
        self.store.insert_review(review.clone())?;
        Ok(review)
    }

    fn edit_existing(
        &self,
        mut review: Review,
        content: ReviewContent,
        actor: UserId,
        now: Timestamp,
    ) -> Result<Review, EngineError> {
        review.apply_edit(content, actor, now)?;
        self.store.update_review(&review)?;
        Ok(review)
    }

    /// Soft-delete a review owned by the requesting company, then
    /// recompute the employee's score — the aggregate must reflect the
    /// loss whether or not the review was counting.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] — review does not resolve or is
    ///   already deleted.
    /// - [`EngineError::Authorization`] — the requester is not the owner.
    pub fn delete_review(
        &self,
        review_id: ReviewId,
        requesting_company_id: CompanyId,
        actor: UserId,
    ) -> Result<(), EngineError> {
        self.delete_review_at(review_id, requesting_company_id, actor, Timestamp::now())
    }

    /// [`ReviewService::delete_review`] against an explicit clock.
    pub fn delete_review_at(
        &self,
        review_id: ReviewId,
        requesting_company_id: CompanyId,
        actor: UserId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let mut review = self.store.review(review_id)?;
        if !review.is_active {
            return Err(EngineError::NotFound(format!("review {review_id}")));
        }
        if review.company_id != requesting_company_id {
            return Err(EngineError::Authorization(format!(
                "review {review_id} is not owned by company {requesting_company_id}"
            )));
        }

        review.soft_delete(now);
        self.store.update_review(&review)?;
        self.scores.recompute_at(review.employee_id, now)?;

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(actor),
                AuditKind::ReviewDeleted,
                json!({
                    "review_id": review_id,
                    "company_id": requesting_company_id,
                    "employee_id": review.employee_id,
                }),
                now,
            ),
        );
        notify::publish_best_effort(
            self.notifier.as_ref(),
            &employee_topic(review.employee_id),
            json!({"event": "review_update", "review_id": review_id}),
        );

        Ok(())
    }

    /// Aggregate statistics over the employee's active reviews, any
    /// moderation status. Zero reviews yield empty defaults.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotFound`] when the employee does not resolve.
    pub fn review_stats(&self, employee_id: EmployeeId) -> Result<ReviewStats, EngineError> {
        self.store.employee(employee_id)?;
        let reviews = self.store.active_reviews_for_employee(employee_id)?;
        Ok(ReviewStats::compute(&reviews))
    }

    /// Fetch a review by id. Soft-deleted reviews read as not found.
    pub fn review(&self, review_id: ReviewId) -> Result<Review, EngineError> {
        let review = self.store.review(review_id)?;
        if !review.is_active {
            return Err(EngineError::NotFound(format!("review {review_id}")));
        }
        Ok(review)
    }
}
