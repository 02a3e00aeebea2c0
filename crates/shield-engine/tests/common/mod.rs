//! Shared wiring for engine tests: an in-memory deployment of the full
//! engine plus fixture builders.

use std::sync::Arc;

use chrono::NaiveDate;

use shield_core::temporal::timestamp_from_ymd_hms;
use shield_core::{CompanyId, EmployeeId, Timestamp, UserId};
use shield_domain::{Company, Employee, EmploymentDetails, EmploymentType, FileMeta, RawRatings};
use shield_engine::{
    DocumentService, EntityStore, MemoryAuditLog, MemoryNotifier, MemoryStore, ModerationService,
    RegistryService, ReviewService, ReviewSubmission, ScoreEngine,
};

/// A fully wired in-memory engine.
pub struct Harness {
    pub store: Arc<MemoryStore>,
    pub audit: Arc<MemoryAuditLog>,
    pub notifier: Arc<MemoryNotifier>,
    pub scores: ScoreEngine,
    pub reviews: ReviewService,
    pub moderation: ModerationService,
    pub documents: DocumentService,
    pub registry: RegistryService,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_files(Arc::new(shield_engine::NullFileStore))
    }

    pub fn with_files(files: Arc<dyn shield_engine::FileStore>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let audit = Arc::new(MemoryAuditLog::new());
        let notifier = Arc::new(MemoryNotifier::new());

        let entity_store: Arc<dyn EntityStore> = store.clone();
        let scores = ScoreEngine::new(entity_store.clone());
        let reviews = ReviewService::new(
            entity_store.clone(),
            audit.clone(),
            notifier.clone(),
            scores.clone(),
        );
        let moderation = ModerationService::new(
            entity_store.clone(),
            audit.clone(),
            notifier.clone(),
            scores.clone(),
        );
        let documents = DocumentService::new(
            entity_store.clone(),
            audit.clone(),
            files,
            scores.clone(),
        );
        let registry = RegistryService::new(entity_store, audit.clone());

        Self {
            store,
            audit,
            notifier,
            scores,
            reviews,
            moderation,
            documents,
            registry,
        }
    }

    /// Register a company with a fixed-shape fixture.
    pub fn company(&self) -> Company {
        self.registry
            .register_company_at(
                "Meridian Analytics Pvt Ltd".to_string(),
                "hr@meridian.example".to_string(),
                None,
                UserId::new(),
                now(),
            )
            .unwrap()
    }

    /// Register an employee under the given company.
    pub fn employee(&self, company: CompanyId) -> Employee {
        self.registry
            .register_employee_at(
                company,
                "Asha".to_string(),
                "Nair".to_string(),
                NaiveDate::from_ymd_opt(1994, 11, 2).unwrap(),
                "asha.nair@example.com".to_string(),
                UserId::new(),
                now(),
            )
            .unwrap()
    }
}

/// The fixed "today" all engine tests submit against.
pub fn now() -> Timestamp {
    timestamp_from_ymd_hms(2026, 3, 20, 10, 0, 0).unwrap()
}

/// A submission with uniform ratings and an employment that ended the
/// given number of days before [`now`] (`None` = still employed).
pub fn submission(rating: i64, ended_days_ago: Option<i64>) -> ReviewSubmission {
    let end_date = ended_days_ago.map(|days| {
        now()
            .date()
            .checked_sub_signed(chrono::Duration::days(days))
            .unwrap()
    });
    ReviewSubmission {
        ratings: RawRatings::uniform(rating),
        employment: EmploymentDetails {
            designation: "Backend Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            end_date,
            employment_type: EmploymentType::FullTime,
        },
        comment: "Delivered reliable services quarter after quarter and mentored two juniors well."
            .to_string(),
        would_rehire: true,
        tags: vec!["engineering".to_string()],
    }
}

/// File metadata fixture for uploads.
pub fn file_meta(name: &str, size: u64, mime: &str) -> FileMeta {
    FileMeta {
        file_name: name.to_string(),
        file_path: format!("uploads/{name}"),
        file_size: size,
        mime_type: mime.to_string(),
    }
}

/// Shorthand: submit a review for (company, employee) at the fixed clock.
pub fn submit(
    h: &Harness,
    company: CompanyId,
    employee: EmployeeId,
    s: ReviewSubmission,
) -> shield_domain::Review {
    h.reviews
        .submit_review_at(company, employee, s, UserId::new(), now())
        .unwrap()
}
