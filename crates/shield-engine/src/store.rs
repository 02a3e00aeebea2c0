//! # Entity Store
//!
//! The persistence seam the engine writes through. The trait models a
//! document store with by-id lookup, filtered queries, and atomic
//! single-record updates — plus one domain-aware primitive,
//! [`EntityStore::insert_review`], which enforces the unique active-pair
//! constraint *inside* the store so that concurrent submitters cannot
//! both create a review for the same (company, employee) pair.
//!
//! The in-memory implementation lives in [`crate::memory`]; a SQL-backed
//! implementation would satisfy the same contract with a partial unique
//! index on `(company_id, employee_id) WHERE is_active`.

use thiserror::Error;

use shield_core::{CompanyId, DocumentId, EmployeeId, ReviewId};
use shield_domain::{Company, Document, Employee, Review};

/// Errors raised by store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given identifier.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind ("employee", "review", …).
        entity: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// An insert violated the unique active-review constraint.
    #[error("an active review already exists for company {company_id} and employee {employee_id}")]
    UniqueViolation {
        /// The reviewing company.
        company_id: CompanyId,
        /// The reviewed employee.
        employee_id: EmployeeId,
    },

    /// The backing store is unavailable or rejected the write.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Convenience constructor for [`StoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Durable storage for HireShield entities.
///
/// Implementations must provide at-least single-record atomicity: each
/// method observes or produces a consistent snapshot of the record(s) it
/// touches. [`EntityStore::insert_review`] must check the unique
/// active-pair constraint and insert in one atomic step.
pub trait EntityStore: Send + Sync {
    // ── companies ────────────────────────────────────────────────────

    /// Insert a newly registered company.
    fn insert_company(&self, company: Company) -> Result<(), StoreError>;

    /// Fetch a company by id.
    fn company(&self, id: CompanyId) -> Result<Company, StoreError>;

    // ── employees ────────────────────────────────────────────────────

    /// Insert a newly registered employee.
    fn insert_employee(&self, employee: Employee) -> Result<(), StoreError>;

    /// Fetch an employee by id.
    fn employee(&self, id: EmployeeId) -> Result<Employee, StoreError>;

    /// Persist an updated employee record.
    fn update_employee(&self, employee: &Employee) -> Result<(), StoreError>;

    // ── reviews ──────────────────────────────────────────────────────

    /// Fetch a review by id, soft-deleted ones included.
    fn review(&self, id: ReviewId) -> Result<Review, StoreError>;

    /// The active review for a (company, employee) pair, if any.
    fn active_review_for_pair(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
    ) -> Result<Option<Review>, StoreError>;

    /// Insert a new review, enforcing the unique active-pair constraint
    /// atomically.
    ///
    /// # Errors
    ///
    /// [`StoreError::UniqueViolation`] when an active review already
    /// exists for the pair — including one inserted by a concurrent
    /// caller after this caller last looked.
    fn insert_review(&self, review: Review) -> Result<(), StoreError>;

    /// Persist an updated review. Keeps the active-pair index consistent
    /// with the review's `is_active` flag.
    fn update_review(&self, review: &Review) -> Result<(), StoreError>;

    /// All active reviews for an employee, any moderation status.
    fn active_reviews_for_employee(&self, id: EmployeeId) -> Result<Vec<Review>, StoreError>;

    // ── documents ────────────────────────────────────────────────────

    /// Insert an uploaded document.
    fn insert_document(&self, document: Document) -> Result<(), StoreError>;

    /// Fetch a document by id.
    fn document(&self, id: DocumentId) -> Result<Document, StoreError>;

    /// Persist an updated document record.
    fn update_document(&self, document: &Document) -> Result<(), StoreError>;

    /// Remove a document record, returning it.
    fn remove_document(&self, id: DocumentId) -> Result<Document, StoreError>;

    /// All documents for an employee.
    fn documents_for_employee(&self, id: EmployeeId) -> Result<Vec<Document>, StoreError>;
}
