//! Review lifecycle tests: upsert semantics, the temporal submission
//! window, moderation gating, and score recomputation.

mod common;

use shield_core::UserId;
use shield_domain::{ModerationDecision, ModerationStatus};
use shield_engine::{AuditKind, EngineError, EntityStore};

use common::{now, submission, submit, Harness};

// ── Upsert ─────────────────────────────────────────────────────────────

#[test]
fn second_submission_edits_instead_of_duplicating() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let first = submit(&h, company, employee, submission(8, None));

    let mut second = submission(6, None);
    second.comment =
        "Revised after the final quarter: output dipped but collaboration stayed strong.".to_string();
    let edited = submit(&h, company, employee, second.clone());

    // Same review, updated in place.
    assert_eq!(edited.id, first.id);
    assert_eq!(edited.comment, second.comment);
    assert_eq!(edited.edit_history.len(), 1);
    assert_eq!(edited.average_rating, 6.0);

    let active = h.store.active_reviews_for_employee(employee).unwrap();
    assert_eq!(active.len(), 1);

    // One created event, one updated event.
    assert_eq!(h.audit.events_of_kind(AuditKind::ReviewCreated).len(), 1);
    assert_eq!(h.audit.events_of_kind(AuditKind::ReviewUpdated).len(), 1);
}

#[test]
fn two_companies_hold_independent_reviews_of_one_employee() {
    let h = Harness::new();
    let company_a = h.company().id;
    let company_b = h.company().id;
    let employee = h.employee(company_a).id;

    submit(&h, company_a, employee, submission(8, None));
    submit(&h, company_b, employee, submission(5, None));

    assert_eq!(h.store.active_reviews_for_employee(employee).unwrap().len(), 2);
}

#[test]
fn unknown_employee_or_company_is_not_found() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let err = h
        .reviews
        .submit_review_at(
            company,
            shield_core::EmployeeId::new(),
            submission(7, None),
            UserId::new(),
            now(),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));

    let err = h
        .reviews
        .submit_review_at(
            shield_core::CompanyId::new(),
            employee,
            submission(7, None),
            UserId::new(),
            now(),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

#[test]
fn short_comment_is_a_validation_error() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let mut s = submission(7, None);
    s.comment = "Fine worker.".to_string();
    let err = h
        .reviews
        .submit_review_at(company, employee, s, UserId::new(), now())
        .unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));
}

// ── Temporal window ────────────────────────────────────────────────────

#[test]
fn new_review_twenty_days_after_end_is_rejected() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let err = h
        .reviews
        .submit_review_at(company, employee, submission(8, Some(20)), UserId::new(), now())
        .unwrap_err();
    match err {
        EngineError::TemporalWindow {
            days_since_end,
            limit_days,
        } => {
            assert_eq!(days_since_end, 20);
            assert_eq!(limit_days, 15);
        }
        other => panic!("expected TemporalWindow, got: {other:?}"),
    }
    // No write happened.
    assert!(h.store.active_reviews_for_employee(employee).unwrap().is_empty());
}

#[test]
fn new_review_ten_days_after_end_is_accepted() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, Some(10)));
    assert_eq!(review.moderation_status, ModerationStatus::Pending);
}

#[test]
fn edits_are_exempt_from_the_window() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    submit(&h, company, employee, submission(8, Some(10)));

    // A month later the employment end lies far outside the window,
    // but the existing review stays editable.
    let later = shield_core::temporal::timestamp_from_ymd_hms(2026, 4, 19, 10, 0, 0).unwrap();
    let edited = h
        .reviews
        .submit_review_at(company, employee, submission(6, Some(40)), UserId::new(), later)
        .unwrap();
    assert_eq!(edited.average_rating, 6.0);
    assert_eq!(edited.edit_history.len(), 1);
}

// ── Moderation gating ──────────────────────────────────────────────────

#[test]
fn pending_review_does_not_affect_the_score() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    submit(&h, company, employee, submission(8, None));

    let record = h.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, None);
}

#[test]
fn approval_recomputes_the_score() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();

    let record = h.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, Some(80));
}

#[test]
fn rejection_leaves_the_score_unchanged() {
    let h = Harness::new();
    let company_a = h.company().id;
    let company_b = h.company().id;
    let employee = h.employee(company_a).id;

    let approved = submit(&h, company_a, employee, submission(8, None));
    h.moderation
        .moderate_review_at(approved.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();

    let rejected = submit(&h, company_b, employee, submission(2, None));
    h.moderation
        .moderate_review_at(rejected.id, ModerationDecision::Reject, UserId::new(), now())
        .unwrap();

    let record = h.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, Some(80));
}

#[test]
fn re_moderating_a_decided_review_is_a_conflict() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();

    let err = h
        .moderation
        .moderate_review_at(review.id, ModerationDecision::Reject, UserId::new(), now())
        .unwrap_err();
    assert!(matches!(err, EngineError::Conflict(_)));
}

#[test]
fn moderation_publishes_a_review_update_notification() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();

    let topic = shield_engine::employee_topic(employee);
    let events = h.notifier.published(&topic);
    assert!(events
        .iter()
        .any(|e| e["event"] == "review_update" && e["status"] == "approved"));
}

// ── Score recomputation ────────────────────────────────────────────────

#[test]
fn recompute_is_idempotent() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(7, None));
    h.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();

    let first = h.scores.recompute_at(employee, now()).unwrap();
    let second = h.scores.recompute_at(employee, now()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.overall_score, Some(70));
}

#[test]
fn averages_across_companies_round_half_up() {
    let h = Harness::new();
    let company_a = h.company().id;
    let company_b = h.company().id;
    let employee = h.employee(company_a).id;

    for (company, rating) in [(company_a, 8), (company_b, 7)] {
        let review = submit(&h, company, employee, submission(rating, None));
        h.moderation
            .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
            .unwrap();
    }

    // mean(8, 7) = 7.5 → 75.
    let record = h.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, Some(75));
}

// ── Deletion ───────────────────────────────────────────────────────────

#[test]
fn delete_requires_ownership() {
    let h = Harness::new();
    let owner = h.company().id;
    let intruder = h.company().id;
    let employee = h.employee(owner).id;

    let review = submit(&h, owner, employee, submission(8, None));
    let err = h
        .reviews
        .delete_review_at(review.id, intruder, UserId::new(), now())
        .unwrap_err();
    assert!(matches!(err, EngineError::Authorization(_)));

    // Still there.
    assert_eq!(h.store.active_reviews_for_employee(employee).unwrap().len(), 1);
}

#[test]
fn deleting_the_only_counted_review_clears_the_score() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();
    assert_eq!(h.registry.employee(employee).unwrap().score.overall_score, Some(80));

    h.reviews
        .delete_review_at(review.id, company, UserId::new(), now())
        .unwrap();

    // The aggregate reflects the loss: no approved basis, no score.
    let record = h.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, None);
    assert!(h.store.active_reviews_for_employee(employee).unwrap().is_empty());
}

#[test]
fn deleted_review_frees_the_pair_for_a_fresh_submission() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.reviews
        .delete_review_at(review.id, company, UserId::new(), now())
        .unwrap();

    let fresh = submit(&h, company, employee, submission(5, None));
    assert_ne!(fresh.id, review.id);
    assert!(fresh.edit_history.is_empty());
}

#[test]
fn deleting_twice_is_not_found() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.reviews
        .delete_review_at(review.id, company, UserId::new(), now())
        .unwrap();
    let err = h
        .reviews
        .delete_review_at(review.id, company, UserId::new(), now())
        .unwrap_err();
    assert!(matches!(err, EngineError::NotFound(_)));
}

// ── Statistics ─────────────────────────────────────────────────────────

#[test]
fn stats_cover_active_reviews_of_any_status() {
    let h = Harness::new();
    let company_a = h.company().id;
    let company_b = h.company().id;
    let employee = h.employee(company_a).id;

    let approved = submit(&h, company_a, employee, submission(8, None));
    h.moderation
        .moderate_review_at(approved.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();
    submit(&h, company_b, employee, submission(4, None)); // stays pending

    let stats = h.reviews.review_stats(employee).unwrap();
    assert_eq!(stats.total_reviews, 2);
    assert_eq!(stats.overall_average, 6.0);
}

#[test]
fn stats_for_zero_reviews_are_empty_defaults() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let stats = h.reviews.review_stats(employee).unwrap();
    assert_eq!(stats.total_reviews, 0);
    assert_eq!(stats.overall_average, 0.0);
}

// ── Audit trail ────────────────────────────────────────────────────────

#[test]
fn lifecycle_leaves_an_unbroken_audit_chain() {
    let h = Harness::new();
    let company = h.company().id;
    let employee = h.employee(company).id;

    let review = submit(&h, company, employee, submission(8, None));
    h.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, UserId::new(), now())
        .unwrap();
    submit(&h, company, employee, submission(6, None));
    h.reviews
        .delete_review_at(review.id, company, UserId::new(), now())
        .unwrap();

    assert!(h.audit.verify_chain());
    assert_eq!(h.audit.events_of_kind(AuditKind::ReviewModerated).len(), 1);
    assert_eq!(h.audit.events_of_kind(AuditKind::ReviewDeleted).len(), 1);
}
