//! # Document Intake Service
//!
//! Upload, verification, and deletion of employee documents. Intake runs
//! auto-verification synchronously: a passing run verifies the document
//! on the spot, anything else waits for a human. Every status movement
//! recomputes the employee's verification fields through the score
//! engine.

use std::sync::Arc;

use serde_json::json;

use shield_core::{DocumentId, EmployeeId, Timestamp, UserId};
use shield_domain::{Document, FileMeta, ManualDecision};
use shield_verify::{compute_auto_verification, DocumentKind};

use crate::audit::{self, AuditEvent, AuditKind, AuditSink};
use crate::error::EngineError;
use crate::files::FileStore;
use crate::score::ScoreEngine;
use crate::store::EntityStore;

/// Document upload, verification, and deletion.
#[derive(Clone)]
pub struct DocumentService {
    store: Arc<dyn EntityStore>,
    audit: Arc<dyn AuditSink>,
    files: Arc<dyn FileStore>,
    scores: ScoreEngine,
}

impl DocumentService {
    /// Wire a document service over the shared store, sinks, and file
    /// store.
    pub fn new(
        store: Arc<dyn EntityStore>,
        audit: Arc<dyn AuditSink>,
        files: Arc<dyn FileStore>,
        scores: ScoreEngine,
    ) -> Self {
        Self {
            store,
            audit,
            files,
            scores,
        }
    }

    /// Ingest an uploaded document: run auto-verification, persist, and
    /// recompute the employee's verification fields.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotFound`] when the employee does not resolve.
    pub fn upload_document(
        &self,
        employee_id: EmployeeId,
        kind: DocumentKind,
        number: String,
        file: FileMeta,
        actor: UserId,
    ) -> Result<Document, EngineError> {
        self.upload_document_at(employee_id, kind, number, file, actor, Timestamp::now())
    }

    /// [`DocumentService::upload_document`] against an explicit clock.
    pub fn upload_document_at(
        &self,
        employee_id: EmployeeId,
        kind: DocumentKind,
        number: String,
        file: FileMeta,
        actor: UserId,
        now: Timestamp,
    ) -> Result<Document, EngineError> {
        let employee = self.store.employee(employee_id)?;
        if !employee.is_active {
            return Err(EngineError::NotFound(format!("employee {employee_id}")));
        }

        let mut document = Document::new(employee_id, kind, number, file, now);
        let auto = compute_auto_verification(
            document.kind,
            &document.number,
            document.file.file_size,
            &document.file.mime_type,
        );
        document.record_auto_verification(auto, now);
        self.store.insert_document(document.clone())?;

        self.scores.recompute_at(employee_id, now)?;

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(actor),
                AuditKind::DocumentUploaded,
                json!({
                    "document_id": document.id,
                    "employee_id": employee_id,
                    "kind": document.kind,
                    "auto_verified": document.auto.passed,
                    "confidence": document.auto.confidence,
                }),
                now,
            ),
        );

        Ok(document)
    }

    /// Apply a manual verification decision, overriding the auto outcome.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotFound`] when the document does not resolve.
    pub fn manual_verify(
        &self,
        document_id: DocumentId,
        decision: ManualDecision,
        verifier: UserId,
    ) -> Result<Document, EngineError> {
        self.manual_verify_at(document_id, decision, verifier, Timestamp::now())
    }

    /// [`DocumentService::manual_verify`] against an explicit clock.
    pub fn manual_verify_at(
        &self,
        document_id: DocumentId,
        decision: ManualDecision,
        verifier: UserId,
        now: Timestamp,
    ) -> Result<Document, EngineError> {
        let mut document = self.store.document(document_id)?;
        document.apply_manual_decision(decision, verifier, now);
        self.store.update_document(&document)?;

        self.scores.recompute_at(document.employee_id, now)?;

        let kind = match decision {
            ManualDecision::Verify => AuditKind::DocumentVerified,
            ManualDecision::Reject => AuditKind::DocumentRejected,
            ManualDecision::Escalate => AuditKind::DocumentEscalated,
        };
        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(verifier),
                kind,
                json!({
                    "document_id": document_id,
                    "employee_id": document.employee_id,
                    "status": document.status,
                }),
                now,
            ),
        );

        Ok(document)
    }

    /// Delete a document: remove the stored file, drop the record, and
    /// recompute the employee's verification fields.
    ///
    /// File removal is best-effort — a storage hiccup leaves an orphaned
    /// file, not a dangling record.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotFound`] when the document does not resolve.
    pub fn delete_document(
        &self,
        document_id: DocumentId,
        actor: UserId,
    ) -> Result<(), EngineError> {
        self.delete_document_at(document_id, actor, Timestamp::now())
    }

    /// [`DocumentService::delete_document`] against an explicit clock.
    pub fn delete_document_at(
        &self,
        document_id: DocumentId,
        actor: UserId,
        now: Timestamp,
    ) -> Result<(), EngineError> {
        let document = self.store.remove_document(document_id)?;

        if let Err(e) = self.files.remove(&document.file.file_path) {
            tracing::warn!(
                error = %e,
                document = %document_id,
                "failed to remove stored file for deleted document"
            );
        }

        self.scores.recompute_at(document.employee_id, now)?;

        audit::record(
            self.audit.as_ref(),
            AuditEvent::success(
                Some(actor),
                AuditKind::DocumentDeleted,
                json!({
                    "document_id": document_id,
                    "employee_id": document.employee_id,
                    "kind": document.kind,
                }),
                now,
            ),
        );

        Ok(())
    }

    /// Fetch a document by id.
    pub fn document(&self, document_id: DocumentId) -> Result<Document, EngineError> {
        Ok(self.store.document(document_id)?)
    }
}
