//! # Company
//!
//! The registering organization. Companies own the employee records they
//! create and the reviews they submit; ownership checks in the engine
//! compare against [`Company::id`].

use serde::{Deserialize, Serialize};

use shield_core::{CompanyId, EmailAddress, Timestamp};

/// A registered company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company identifier.
    pub id: CompanyId,
    /// Legal name.
    pub name: String,
    /// Contact address.
    pub email: EmailAddress,
    /// GST identification number, when registered. Format-validated at
    /// registration.
    pub gstin: Option<String>,
    /// False once soft-deleted.
    pub is_active: bool,
    /// When the company registered.
    pub created_at: Timestamp,
    /// When the record last changed.
    pub updated_at: Timestamp,
}

impl Company {
    /// Register a new company.
    pub fn new(
        name: impl Into<String>,
        email: EmailAddress,
        gstin: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id: CompanyId::new(),
            name: name.into(),
            email,
            gstin,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
