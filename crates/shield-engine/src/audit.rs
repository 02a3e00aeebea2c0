//! # Audit Log Sink
//!
//! Append-only record of security-relevant events. Entries are chained:
//! each one carries the SHA-256 digest of its serialized content
//! concatenated with the previous entry's digest, so any mutation or
//! removal inside the log breaks every digest after it.
//!
//! The sink is fire-and-forget from the engine's perspective — a failure
//! to record an audit trail must never block the primary business
//! operation. The engine logs and swallows sink errors.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use shield_core::{Timestamp, UserId};

/// The kinds of events the platform audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditKind {
    CompanyRegistered,
    EmployeeRegistered,
    ReviewCreated,
    ReviewUpdated,
    ReviewModerated,
    ReviewDeleted,
    DocumentUploaded,
    DocumentVerified,
    DocumentRejected,
    DocumentEscalated,
    DocumentDeleted,
}

impl AuditKind {
    /// The canonical string identifier for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyRegistered => "company_registered",
            Self::EmployeeRegistered => "employee_registered",
            Self::ReviewCreated => "review_created",
            Self::ReviewUpdated => "review_updated",
            Self::ReviewModerated => "review_moderated",
            Self::ReviewDeleted => "review_deleted",
            Self::DocumentUploaded => "document_uploaded",
            Self::DocumentVerified => "document_verified",
            Self::DocumentRejected => "document_rejected",
            Self::DocumentEscalated => "document_escalated",
            Self::DocumentDeleted => "document_deleted",
        }
    }
}

impl std::fmt::Display for AuditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the audited operation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStatus {
    Success,
    Failure,
}

/// One audit event, as emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The acting user, when one exists (auto-verification has none).
    pub user_id: Option<UserId>,
    /// What happened.
    pub kind: AuditKind,
    /// Event-specific payload (ids, decisions, outcomes).
    pub data: serde_json::Value,
    /// Operation outcome.
    pub status: AuditStatus,
    /// When it happened.
    pub at: Timestamp,
}

impl AuditEvent {
    /// A successful event.
    pub fn success(
        user_id: Option<UserId>,
        kind: AuditKind,
        data: serde_json::Value,
        at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            kind,
            data,
            status: AuditStatus::Success,
            at,
        }
    }
}

/// Errors raised when appending to an audit sink.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The event could not be serialized for chaining.
    #[error("audit event serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An append-only audit sink.
pub trait AuditSink: Send + Sync {
    /// Append one event.
    ///
    /// Callers treat failures as non-fatal: log and continue.
    fn log_event(&self, event: AuditEvent) -> Result<(), AuditError>;
}

/// Append an event, swallowing sink failures.
///
/// The audit trail is best-effort by contract: a sink failure is logged
/// for operators and the business operation proceeds.
pub fn record(sink: &dyn AuditSink, event: AuditEvent) {
    if let Err(e) = sink.log_event(event) {
        tracing::warn!(error = %e, "audit sink rejected event; continuing");
    }
}

// ── In-memory chained log ──────────────────────────────────────────────

/// One stored entry: the event plus its position in the hash chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainedEntry {
    /// The audited event.
    pub event: AuditEvent,
    /// Digest of the previous entry; zeros for the first.
    pub prev_digest: String,
    /// SHA-256 over `prev_digest || serialized event`, hex-encoded.
    pub digest: String,
}

/// In-memory [`AuditSink`] with an integrity hash chain.
#[derive(Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<ChainedEntry>>,
}

/// Digest of the empty chain head.
const GENESIS_DIGEST: &str = "0000000000000000000000000000000000000000000000000000000000000000";

fn chain_digest(prev: &str, event_json: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prev.as_bytes());
    hasher.update(event_json.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

impl MemoryAuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<ChainedEntry> {
        self.entries.lock().clone()
    }

    /// Events of a given kind, oldest first.
    pub fn events_of_kind(&self, kind: AuditKind) -> Vec<AuditEvent> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.event.kind == kind)
            .map(|e| e.event.clone())
            .collect()
    }

    /// Recompute every digest and confirm the chain is unbroken.
    pub fn verify_chain(&self) -> bool {
        let entries = self.entries.lock();
        let mut prev = GENESIS_DIGEST.to_string();
        for entry in entries.iter() {
            if entry.prev_digest != prev {
                return false;
            }
            let json = match serde_json::to_string(&entry.event) {
                Ok(json) => json,
                Err(_) => return false,
            };
            if chain_digest(&prev, &json) != entry.digest {
                return false;
            }
            prev = entry.digest.clone();
        }
        true
    }
}

impl AuditSink for MemoryAuditLog {
    fn log_event(&self, event: AuditEvent) -> Result<(), AuditError> {
        let json = serde_json::to_string(&event)?;
        let mut entries = self.entries.lock();
        let prev_digest = entries
            .last()
            .map(|e| e.digest.clone())
            .unwrap_or_else(|| GENESIS_DIGEST.to_string());
        let digest = chain_digest(&prev_digest, &json);
        entries.push(ChainedEntry {
            event,
            prev_digest,
            digest,
        });
        Ok(())
    }
}
