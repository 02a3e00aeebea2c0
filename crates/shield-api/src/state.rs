//! # Application State
//!
//! Shared state for the axum application: configuration plus the wired
//! engine services. Everything is behind `Arc`s, so cloning per request
//! is cheap.
//!
//! Stores and sinks are constructed here at process start and injected
//! into the services — no module-level singletons anywhere in the
//! workspace, so tests and multi-instance deployments build their own
//! state.

use std::sync::Arc;

use shield_engine::{
    DocumentService, EntityStore, FileStore, LocalFileStore, MemoryAuditLog, MemoryNotifier,
    MemoryStore, ModerationService, NullFileStore, RegistryService, ReviewService, ScoreEngine,
};

use crate::config::Config;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration.
    pub config: Config,
    /// Score recalculation engine (administrative recompute).
    pub scores: ScoreEngine,
    /// Review submission, deletion, statistics.
    pub reviews: ReviewService,
    /// Admin moderation.
    pub moderation: ModerationService,
    /// Document intake and verification.
    pub documents: DocumentService,
    /// Company and employee onboarding.
    pub registry: RegistryService,
    /// The audit log, exposed for operator inspection.
    pub audit: Arc<MemoryAuditLog>,
    /// The notification hub the WebSocket layer drains.
    pub notifier: Arc<MemoryNotifier>,
}

impl AppState {
    /// Build a fully wired in-memory deployment from configuration.
    pub fn new(config: Config) -> Self {
        let files: Arc<dyn FileStore> = match &config.document_root {
            Some(root) => Arc::new(LocalFileStore::new(root.clone())),
            None => Arc::new(NullFileStore),
        };
        let store: Arc<dyn EntityStore> = Arc::new(MemoryStore::new());
        let audit = Arc::new(MemoryAuditLog::new());
        let notifier = Arc::new(MemoryNotifier::new());

        let scores = ScoreEngine::new(store.clone());
        let reviews = ReviewService::new(
            store.clone(),
            audit.clone(),
            notifier.clone(),
            scores.clone(),
        );
        let moderation = ModerationService::new(
            store.clone(),
            audit.clone(),
            notifier.clone(),
            scores.clone(),
        );
        let documents = DocumentService::new(store.clone(), audit.clone(), files, scores.clone());
        let registry = RegistryService::new(store, audit.clone());

        Self {
            config,
            scores,
            reviews,
            moderation,
            documents,
            registry,
            audit,
            notifier,
        }
    }
}
