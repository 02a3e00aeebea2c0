//! # shield-engine — The Trust-Score Engine
//!
//! Orchestrates the HireShield core: review submission with atomic
//! per-pair upsert, the moderation gate, document intake with synchronous
//! auto-verification, and the single score-recalculation entry point that
//! every trigger funnels through.
//!
//! ## Architecture
//!
//! ```text
//! ReviewService ──upsert/delete──▶ EntityStore ◀──intake/delete── DocumentService
//!       │                              ▲                                │
//! ModerationService ──approve──▶ ScoreEngine::recompute ◀───verify──────┘
//!                                      │
//!                              Employee derived fields
//! ```
//!
//! Every operation is request-scoped and synchronous; the engine holds no
//! background workers. Sinks (audit, notification) are fire-and-forget:
//! their failures are logged and swallowed, never propagated.
//!
//! All stores and sinks are injected `Arc<dyn …>` services with explicit
//! construction — no module-level singletons — so tests and multi-instance
//! deployments wire their own.

pub mod audit;
pub mod document_service;
pub mod error;
pub mod files;
pub mod memory;
pub mod moderation;
pub mod notify;
pub mod registry;
pub mod review_service;
pub mod score;
pub mod store;

pub use audit::{AuditEvent, AuditKind, AuditSink, AuditStatus, MemoryAuditLog};
pub use document_service::DocumentService;
pub use error::EngineError;
pub use files::{FileStore, LocalFileStore, NullFileStore};
pub use memory::MemoryStore;
pub use moderation::ModerationService;
pub use notify::{employee_topic, MemoryNotifier, NotificationSink};
pub use registry::RegistryService;
pub use review_service::{ReviewService, ReviewSubmission};
pub use score::ScoreEngine;
pub use store::{EntityStore, StoreError};
