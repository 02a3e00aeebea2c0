//! End-to-end engine scenario: an employee's trust profile from first
//! review through edit, re-approval, and document verification.

use std::sync::Arc;

use chrono::NaiveDate;

use shield_core::temporal::timestamp_from_ymd_hms;
use shield_core::{CompanyId, EmployeeId, Timestamp, UserId};
use shield_domain::{
    EmploymentDetails, EmploymentType, FileMeta, ManualDecision, ModerationDecision,
    ModerationStatus, RawRatings,
};
use shield_engine::{
    DocumentService, EntityStore, MemoryAuditLog, MemoryNotifier, MemoryStore, ModerationService,
    NullFileStore, RegistryService, ReviewService, ReviewSubmission, ScoreEngine,
};
use shield_verify::DocumentKind;

struct Deployment {
    reviews: ReviewService,
    moderation: ModerationService,
    documents: DocumentService,
    registry: RegistryService,
}

fn deployment() -> Deployment {
    let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
    let audit = Arc::new(MemoryAuditLog::new());
    let notifier = Arc::new(MemoryNotifier::new());
    let scores = ScoreEngine::new(store.clone());
    Deployment {
        reviews: ReviewService::new(store.clone(), audit.clone(), notifier.clone(), scores.clone()),
        moderation: ModerationService::new(
            store.clone(),
            audit.clone(),
            notifier,
            scores.clone(),
        ),
        documents: DocumentService::new(
            store.clone(),
            audit.clone(),
            Arc::new(NullFileStore),
            scores,
        ),
        registry: RegistryService::new(store, audit),
    }
}

fn now() -> Timestamp {
    timestamp_from_ymd_hms(2026, 3, 20, 10, 0, 0).unwrap()
}

fn submission(rating: i64, ended_days_ago: i64) -> ReviewSubmission {
    ReviewSubmission {
        ratings: RawRatings::uniform(rating),
        employment: EmploymentDetails {
            designation: "Platform Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 8, 14).unwrap(),
            end_date: Some(
                now()
                    .date()
                    .checked_sub_signed(chrono::Duration::days(ended_days_ago))
                    .unwrap(),
            ),
            employment_type: EmploymentType::FullTime,
        },
        comment: "Owned the deployment pipeline end to end and left it in excellent shape."
            .to_string(),
        would_rehire: true,
        tags: vec!["platform".to_string()],
    }
}

fn onboard(d: &Deployment) -> (CompanyId, EmployeeId) {
    let company = d
        .registry
        .register_company_at(
            "Meridian Analytics Pvt Ltd".to_string(),
            "hr@meridian.example".to_string(),
            Some("27ABCPE1234F1Z5".to_string()),
            UserId::new(),
            now(),
        )
        .unwrap();
    let employee = d
        .registry
        .register_employee_at(
            company.id,
            "Asha".to_string(),
            "Nair".to_string(),
            NaiveDate::from_ymd_opt(1994, 11, 2).unwrap(),
            "asha.nair@example.com".to_string(),
            UserId::new(),
            now(),
        )
        .unwrap();
    (company.id, employee.id)
}

#[test]
fn trust_profile_from_review_lifecycle() {
    let d = deployment();
    let (company, employee) = onboard(&d);
    let hr_user = UserId::new();
    let admin = UserId::new();

    // Baseline: no reviews, unscored.
    assert_eq!(d.registry.employee(employee).unwrap().score.overall_score, None);

    // Company submits all-8s, employment ended 5 days ago: inside the
    // window, created pending.
    let review = d
        .reviews
        .submit_review_at(company, employee, submission(8, 5), hr_user, now())
        .unwrap();
    assert_eq!(review.moderation_status, ModerationStatus::Pending);
    assert_eq!(review.average_rating, 8.0);

    // Pending: score unchanged.
    assert_eq!(d.registry.employee(employee).unwrap().score.overall_score, None);

    // Admin approves: score becomes 80.
    d.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, admin, now())
        .unwrap();
    assert_eq!(
        d.registry.employee(employee).unwrap().score.overall_score,
        Some(80)
    );

    // Company lowers all ratings to 6. The edit re-enters moderation;
    // the published score keeps showing the last approved state.
    let edited = d
        .reviews
        .submit_review_at(company, employee, submission(6, 5), hr_user, now())
        .unwrap();
    assert_eq!(edited.id, review.id);
    assert_eq!(edited.edit_history.len(), 1);
    assert_eq!(edited.average_rating, 6.0);
    assert_eq!(edited.moderation_status, ModerationStatus::Pending);
    assert_eq!(
        d.registry.employee(employee).unwrap().score.overall_score,
        Some(80)
    );

    // Re-approval publishes the lowered score.
    d.moderation
        .moderate_review_at(edited.id, ModerationDecision::Approve, admin, now())
        .unwrap();
    assert_eq!(
        d.registry.employee(employee).unwrap().score.overall_score,
        Some(60)
    );
}

#[test]
fn trust_profile_combines_reviews_and_documents() {
    let d = deployment();
    let (company, employee) = onboard(&d);
    let admin = UserId::new();

    // Approved review → scored.
    let review = d
        .reviews
        .submit_review_at(company, employee, submission(9, 3), UserId::new(), now())
        .unwrap();
    d.moderation
        .moderate_review_at(review.id, ModerationDecision::Approve, admin, now())
        .unwrap();

    // Aadhaar auto-verifies; experience letter needs a human.
    d.documents
        .upload_document_at(
            employee,
            DocumentKind::Aadhaar,
            "234123412346".to_string(),
            FileMeta {
                file_name: "aadhaar.png".to_string(),
                file_path: "docs/aadhaar.png".to_string(),
                file_size: 48_000,
                mime_type: "image/png".to_string(),
            },
            UserId::new(),
            now(),
        )
        .unwrap();
    let letter = d
        .documents
        .upload_document_at(
            employee,
            DocumentKind::ExperienceLetter,
            "REL/2026/009".to_string(),
            FileMeta {
                file_name: "letter.pdf".to_string(),
                file_path: "docs/letter.pdf".to_string(),
                file_size: 22_000,
                mime_type: "application/pdf".to_string(),
            },
            UserId::new(),
            now(),
        )
        .unwrap();

    let record = d.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, Some(90));
    assert_eq!(record.score.verification_percentage, 50);
    assert!(!record.score.verified);

    // Manual verification of the letter completes the profile.
    d.documents
        .manual_verify_at(letter.id, ManualDecision::Verify, admin, now())
        .unwrap();
    let record = d.registry.employee(employee).unwrap();
    assert_eq!(record.score.verification_percentage, 100);
    assert_eq!(record.score.documents_verified, 2);
    assert!(record.score.verified);

    // Deleting the review clears the score but not verification.
    d.reviews
        .delete_review_at(review.id, company, UserId::new(), now())
        .unwrap();
    let record = d.registry.employee(employee).unwrap();
    assert_eq!(record.score.overall_score, None);
    assert_eq!(record.score.verification_percentage, 100);
}
