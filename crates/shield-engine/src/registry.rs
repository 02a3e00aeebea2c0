//! # Registry Service
//!
//! Onboarding of companies and employee records. Companies own the
//! records they create; a GSTIN supplied at registration is
//! format-validated before it is stored.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use shield_core::{CompanyId, EmailAddress, EmployeeId, Timestamp, UserId};
use shield_domain::{Company, Employee};
use shield_verify::validate_gstin;

use crate::audit::{self, AuditEvent, AuditKind, AuditSink};
use crate::error::EngineError;
use crate::store::EntityStore;

/// Company and employee registration.
#[derive(Clone)]
pub struct RegistryService {
    store: Arc<dyn EntityStore>,
    audit: Arc<dyn AuditSink>,
}

impl RegistryService {
    /// Wire a registry service over the shared store and audit sink.
    pub fn new(store: Arc<dyn EntityStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    /// Register a company.
    ///
    /// # Errors
    ///
    /// [`EngineError::Validation`] for a malformed email or GSTIN.
    pub fn register_company(
        &self,
        name: String,
        email: String,
        gstin: Option<String>,
        actor: UserId,
    ) -> Result<Company, EngineError> {
        self.register_company_at(name, email, gstin, actor, Timestamp::now())
    }

    /// [`RegistryService::register_company`] against an explicit clock.
    pub fn register_company_at(
        &self,
        name: String,
        email: String,
        gstin: Option<String>,
        actor: UserId,
        now: Timestamp,
    ) -> Result<Company, EngineError> {
        if name.trim().is_empty() {
            return Err(EngineError::Validation("company name must not be empty".to_string()));
        }
        let email = EmailAddress::new(email)?;

        let gstin = match gstin {
            Some(raw) => {
                let check = validate_gstin(&raw);
                if !check.is_valid() {
                    return Err(EngineError::Validation(check.message));
                }
                Some(raw.trim().to_ascii_uppercase())
            }
            None => None,
        };

        let company = Company::new(name, email, gstin, now);
        self.store.insert_company(company.clone())?;

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(actor),
                AuditKind::CompanyRegistered,
                json!({"company_id": company.id, "name": company.name}),
                now,
            ),
        );

        Ok(company)
    }

    /// Register an employee record under the given company.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotFound`] — the registering company does not
    ///   resolve.
    /// - [`EngineError::Validation`] — malformed email or empty name.
    pub fn register_employee(
        &self,
        company_id: CompanyId,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        email: String,
        actor: UserId,
    ) -> Result<Employee, EngineError> {
        self.register_employee_at(
            company_id,
            first_name,
            last_name,
            date_of_birth,
            email,
            actor,
            Timestamp::now(),
        )
    }

    /// [`RegistryService::register_employee`] against an explicit clock.
    #[allow(clippy::too_many_arguments)]
    pub fn register_employee_at(
        &self,
        company_id: CompanyId,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        email: String,
        actor: UserId,
        now: Timestamp,
    ) -> Result<Employee, EngineError> {
        self.store.company(company_id)?;
        if first_name.trim().is_empty() || last_name.trim().is_empty() {
            return Err(EngineError::Validation("employee name must not be empty".to_string()));
        }
        let email = EmailAddress::new(email)?;

        let employee = Employee::new(first_name, last_name, date_of_birth, email, company_id, now);
        self.store.insert_employee(employee.clone())?;

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(actor),
                AuditKind::EmployeeRegistered,
                json!({"employee_id": employee.id, "company_id": company_id}),
                now,
            ),
        );

        Ok(employee)
    }

    /// Fetch an employee record. Soft-deleted records read as not found.
    pub fn employee(&self, id: EmployeeId) -> Result<Employee, EngineError> {
        let employee = self.store.employee(id)?;
        if !employee.is_active {
            return Err(EngineError::NotFound(format!("employee {id}")));
        }
        Ok(employee)
    }

    /// Fetch a company record.
    pub fn company(&self, id: CompanyId) -> Result<Company, EngineError> {
        Ok(self.store.company(id)?)
    }
}
