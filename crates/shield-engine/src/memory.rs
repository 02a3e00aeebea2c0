//! # In-Memory Entity Store
//!
//! The default [`EntityStore`] implementation: a single
//! `parking_lot::RwLock` over all collections plus the unique active-pair
//! index. One lock keeps every mutating operation atomic across the maps
//! it touches — in particular, the uniqueness check inside
//! [`MemoryStore::insert_review`] and the insert itself happen under the
//! same write guard, so concurrent submitters for one (company, employee)
//! pair cannot both create.
//!
//! Suitable for development, tests, and single-instance deployments;
//! state does not survive restarts.

use std::collections::HashMap;

use parking_lot::RwLock;

use shield_core::{CompanyId, DocumentId, EmployeeId, ReviewId};
use shield_domain::{Company, Document, Employee, Review};

use crate::store::{EntityStore, StoreError};

#[derive(Default)]
struct Inner {
    companies: HashMap<CompanyId, Company>,
    employees: HashMap<EmployeeId, Employee>,
    reviews: HashMap<ReviewId, Review>,
    documents: HashMap<DocumentId, Document>,
    /// Unique index: the active review per (company, employee) pair.
    active_pairs: HashMap<(CompanyId, EmployeeId), ReviewId>,
}

/// In-memory [`EntityStore`].
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    // ── companies ────────────────────────────────────────────────────

    fn insert_company(&self, company: Company) -> Result<(), StoreError> {
        self.inner.write().companies.insert(company.id, company);
        Ok(())
    }

    fn company(&self, id: CompanyId) -> Result<Company, StoreError> {
        self.inner
            .read()
            .companies
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("company", id))
    }

    // ── employees ────────────────────────────────────────────────────

    fn insert_employee(&self, employee: Employee) -> Result<(), StoreError> {
        self.inner.write().employees.insert(employee.id, employee);
        Ok(())
    }

    fn employee(&self, id: EmployeeId) -> Result<Employee, StoreError> {
        self.inner
            .read()
            .employees
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("employee", id))
    }

    fn update_employee(&self, employee: &Employee) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.employees.get_mut(&employee.id) {
            Some(slot) => {
                *slot = employee.clone();
                Ok(())
            }
            None => Err(StoreError::not_found("employee", employee.id)),
        }
    }

    // ── reviews ──────────────────────────────────────────────────────

    fn review(&self, id: ReviewId) -> Result<Review, StoreError> {
        self.inner
            .read()
            .reviews
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("review", id))
    }

    fn active_review_for_pair(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
    ) -> Result<Option<Review>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .active_pairs
            .get(&(company_id, employee_id))
            .and_then(|id| inner.reviews.get(id))
            .cloned())
    }

    fn insert_review(&self, review: Review) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        let pair = (review.company_id, review.employee_id);
        if review.is_active && inner.active_pairs.contains_key(&pair) {
            return Err(StoreError::UniqueViolation {
                company_id: review.company_id,
                employee_id: review.employee_id,
            });
        }
        if review.is_active {
            inner.active_pairs.insert(pair, review.id);
        }
        inner.reviews.insert(review.id, review);
        Ok(())
    }

    fn update_review(&self, review: &Review) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        if !inner.reviews.contains_key(&review.id) {
            return Err(StoreError::not_found("review", review.id));
        }
        let pair = (review.company_id, review.employee_id);
        if review.is_active {
            inner.active_pairs.insert(pair, review.id);
        } else if inner.active_pairs.get(&pair) == Some(&review.id) {
            inner.active_pairs.remove(&pair);
        }
        inner.reviews.insert(review.id, review.clone());
        Ok(())
    }

    fn active_reviews_for_employee(&self, id: EmployeeId) -> Result<Vec<Review>, StoreError> {
        Ok(self
            .inner
            .read()
            .reviews
            .values()
            .filter(|r| r.employee_id == id && r.is_active)
            .cloned()
            .collect())
    }

    // ── documents ────────────────────────────────────────────────────

    fn insert_document(&self, document: Document) -> Result<(), StoreError> {
        self.inner.write().documents.insert(document.id, document);
        Ok(())
    }

    fn document(&self, id: DocumentId) -> Result<Document, StoreError> {
        self.inner
            .read()
            .documents
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("document", id))
    }

    fn update_document(&self, document: &Document) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        match inner.documents.get_mut(&document.id) {
            Some(slot) => {
                *slot = document.clone();
                Ok(())
            }
            None => Err(StoreError::not_found("document", document.id)),
        }
    }

    fn remove_document(&self, id: DocumentId) -> Result<Document, StoreError> {
        self.inner
            .write()
            .documents
            .remove(&id)
            .ok_or_else(|| StoreError::not_found("document", id))
    }

    fn documents_for_employee(&self, id: EmployeeId) -> Result<Vec<Document>, StoreError> {
        Ok(self
            .inner
            .read()
            .documents
            .values()
            .filter(|d| d.employee_id == id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shield_core::temporal::timestamp_from_ymd_hms;
    use shield_core::Timestamp;
    use shield_domain::{
        EmploymentDetails, EmploymentType, RatingSet, ReviewContent,
    };

    fn now() -> Timestamp {
        timestamp_from_ymd_hms(2026, 3, 20, 10, 0, 0).unwrap()
    }

    fn content() -> ReviewContent {
        ReviewContent {
            ratings: RatingSet::uniform(7),
            employment: EmploymentDetails {
                designation: "Support Lead".to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                end_date: None,
                employment_type: EmploymentType::FullTime,
            },
            comment: "Handled escalations calmly and kept response times well inside target."
                .to_string(),
            would_rehire: true,
            tags: Vec::new(),
        }
    }

    fn review_for(company: CompanyId, employee: EmployeeId) -> Review {
        Review::create(company, employee, content(), now()).unwrap()
    }

    #[test]
    fn second_active_insert_for_pair_is_a_unique_violation() {
        let store = MemoryStore::new();
        let (company, employee) = (CompanyId::new(), EmployeeId::new());

        store.insert_review(review_for(company, employee)).unwrap();
        let err = store.insert_review(review_for(company, employee)).unwrap_err();
        assert!(matches!(err, StoreError::UniqueViolation { .. }));
    }

    #[test]
    fn different_pairs_do_not_collide() {
        let store = MemoryStore::new();
        let company = CompanyId::new();
        store.insert_review(review_for(company, EmployeeId::new())).unwrap();
        store.insert_review(review_for(company, EmployeeId::new())).unwrap();
        store
            .insert_review(review_for(CompanyId::new(), EmployeeId::new()))
            .unwrap();
    }

    #[test]
    fn soft_delete_frees_the_pair_slot() {
        let store = MemoryStore::new();
        let (company, employee) = (CompanyId::new(), EmployeeId::new());

        let mut review = review_for(company, employee);
        store.insert_review(review.clone()).unwrap();

        review.soft_delete(now());
        store.update_review(&review).unwrap();

        assert!(store
            .active_review_for_pair(company, employee)
            .unwrap()
            .is_none());
        // A fresh review for the pair is allowed again.
        store.insert_review(review_for(company, employee)).unwrap();
    }

    #[test]
    fn active_reviews_exclude_soft_deleted() {
        let store = MemoryStore::new();
        let employee = EmployeeId::new();

        let kept = review_for(CompanyId::new(), employee);
        let mut dropped = review_for(CompanyId::new(), employee);
        store.insert_review(kept.clone()).unwrap();
        store.insert_review(dropped.clone()).unwrap();

        dropped.soft_delete(now());
        store.update_review(&dropped).unwrap();

        let active = store.active_reviews_for_employee(employee).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, kept.id);
        // The soft-deleted review is still fetchable by id.
        assert!(store.review(dropped.id).is_ok());
    }

    #[test]
    fn concurrent_inserts_admit_exactly_one() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let (company, employee) = (CompanyId::new(), EmployeeId::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.insert_review(review_for(company, employee)))
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();
        assert_eq!(successes, 1);
    }

    #[test]
    fn missing_lookups_report_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.employee(EmployeeId::new()),
            Err(StoreError::NotFound { entity: "employee", .. })
        ));
        assert!(matches!(
            store.review(shield_core::ReviewId::new()),
            Err(StoreError::NotFound { entity: "review", .. })
        ));
        assert!(matches!(
            store.remove_document(DocumentId::new()),
            Err(StoreError::NotFound { entity: "document", .. })
        ));
    }
}
