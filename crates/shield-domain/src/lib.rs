//! # shield-domain — HireShield Domain Entities
//!
//! The entities the trust-score engine operates on, with their invariants
//! expressed in the types:
//!
//! - [`review::Review`] — a company's performance review of an employee,
//!   with clamped rating dimensions, an append-only edit history, and the
//!   pending → approved | rejected moderation state machine.
//! - [`employee::Employee`] — the aggregation root carrying the derived
//!   trust score; its score fields are mutated only through
//!   [`employee::Employee::apply_score`].
//! - [`document::Document`] — an uploaded identity document with its
//!   auto-verification record and status.
//! - [`company::Company`] — the registering organization.
//!
//! Entities validate their own state transitions; orchestration across
//! entities (upserts, score recomputation, audit) lives in `shield-engine`.

pub mod company;
pub mod document;
pub mod employee;
pub mod employment;
pub mod error;
pub mod rating;
pub mod review;
pub mod stats;

pub use company::Company;
pub use document::{Document, FileMeta, ManualDecision, VerificationStatus};
pub use employee::{Employee, ScoreSummary};
pub use employment::{EmploymentDetails, EmploymentType, SUBMISSION_WINDOW_DAYS};
pub use error::ReviewError;
pub use rating::{RatingDimension, RatingSet, RawRatings};
pub use review::{ModerationDecision, ModerationStatus, Review, ReviewContent};
pub use stats::{DimensionAverage, ReviewStats};
