//! # Actor Roles
//!
//! The closed set of principal roles and the [`Actor`] carried into every
//! authorized operation.
//!
//! Role checks are exhaustive `match` expressions over [`Role`] at the
//! authorization boundary. The engine itself is role-agnostic: it receives
//! already-authorized identifiers and enforces ownership, not role.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::UserId;

/// The role of an acting principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator. Moderates reviews, may verify documents.
    Admin,
    /// Company account. Registers employees, submits and owns reviews.
    Company,
    /// Employee account. Reads its own score and report.
    Employee,
}

impl Role {
    /// The canonical string name of this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Company => "company",
            Self::Employee => "employee",
        }
    }

    /// Parse a role from its canonical string name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRole`] for anything outside the
    /// closed set.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "admin" => Ok(Self::Admin),
            "company" => Ok(Self::Company),
            "employee" => Ok(Self::Employee),
            other => Err(ValidationError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated principal: who is acting, and in what role.
///
/// Produced by the HTTP layer from gateway-supplied identity headers;
/// consumed by handlers for role dispatch and passed to the engine as the
/// audit actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user account.
    pub user_id: UserId,
    /// The role the account holds.
    pub role: Role,
}

impl Actor {
    /// Construct an actor.
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}
