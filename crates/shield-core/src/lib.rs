//! # shield-core — Foundational Types for HireShield
//!
//! The leaf crate of the workspace. Defines the domain primitives every
//! other crate builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `CompanyId`, `EmployeeId`,
//!    `ReviewId`, `DocumentId`, `UserId` — all distinct types. You cannot
//!    pass a `CompanyId` where an `EmployeeId` is expected, which matters in
//!    a system keyed on (company, employee) pairs.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with
//!    seconds precision. The employment-window rule is day arithmetic;
//!    mixed-offset timestamps would make "days since" ambiguous.
//!
//! 3. **One `Role` enum, exhaustive `match` everywhere.** Authorization
//!    branches on a closed set of roles, never on strings.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shield-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod actor;
pub mod error;
pub mod identity;
pub mod temporal;

pub use actor::{Actor, Role};
pub use error::ValidationError;
pub use identity::{CompanyId, DocumentId, EmailAddress, EmployeeId, ReviewId, UserId};
pub use temporal::Timestamp;
