//! # Document Routes
//!
//! Upload with synchronous auto-verification, retrieval of the
//! verification report, manual verification decisions, and deletion.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use shield_core::{DocumentId, EmployeeId};
use shield_domain::{Document, FileMeta, ManualDecision};
use shield_verify::DocumentKind;

use crate::auth::{AuthenticatedActor, CompanyActor, VerifierActor};
use crate::error::{AppError, ErrorBody};
use crate::routes::parse_id;
use crate::state::AppState;

/// Request to upload a document. The file itself is staged by the
/// upload-handling layer; this carries its metadata.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadDocumentRequest {
    /// Document kind (e.g. `aadhaar`, `pan`, `experience_letter`).
    #[schema(value_type = String)]
    pub kind: DocumentKind,
    /// The document number as printed.
    pub number: String,
    /// Original file name.
    pub file_name: String,
    /// Stored size in bytes.
    pub file_size: u64,
    /// Declared MIME type.
    pub mime_type: String,
}

/// Manual verification decision.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyDocumentRequest {
    /// `verify`, `reject`, or `escalate`.
    pub action: String,
}

/// One auto-verification check in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckResponse {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

/// Document representation in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub document_id: String,
    pub employee_id: String,
    pub kind: String,
    pub status: String,
    pub auto_verified: bool,
    pub confidence: u8,
    pub checks: Vec<CheckResponse>,
    pub uploaded_at: String,
}

fn document_to_response(d: &Document) -> DocumentResponse {
    DocumentResponse {
        document_id: d.id.to_string(),
        employee_id: d.employee_id.to_string(),
        kind: d.kind.to_string(),
        status: d.status.to_string(),
        auto_verified: d.auto.passed,
        confidence: d.auto.confidence,
        checks: d
            .auto
            .checks
            .iter()
            .map(|c| CheckResponse {
                name: c.name.clone(),
                passed: c.passed,
                detail: c.detail.clone(),
            })
            .collect(),
        uploaded_at: d.uploaded_at.to_string(),
    }
}

/// Build the document router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/employees/:id/documents", post(upload_document))
        .route("/v1/documents/:id", get(get_document).delete(delete_document))
        .route("/v1/documents/:id/verify", post(verify_document))
}

/// Upload a document; auto-verification runs before the response.
#[utoipa::path(
    post,
    path = "/v1/employees/{id}/documents",
    params(("id" = String, Path, description = "Employee identifier")),
    request_body = UploadDocumentRequest,
    responses(
        (status = 201, description = "Document ingested", body = DocumentResponse),
        (status = 404, description = "Unknown employee", body = ErrorBody),
        (status = 403, description = "Only company principals upload documents", body = ErrorBody),
    )
)]
pub(crate) async fn upload_document(
    State(state): State<AppState>,
    company: CompanyActor,
    Path(id): Path<String>,
    Json(body): Json<UploadDocumentRequest>,
) -> Result<(StatusCode, Json<DocumentResponse>), AppError> {
    let employee_id: EmployeeId = parse_id(&id, "employee id")?;
    let file = FileMeta {
        file_path: format!("{employee_id}/{}", body.file_name),
        file_name: body.file_name,
        file_size: body.file_size,
        mime_type: body.mime_type,
    };

    let document = state.documents.upload_document(
        employee_id,
        body.kind,
        body.number,
        file,
        company.user_id,
    )?;
    Ok((StatusCode::CREATED, Json(document_to_response(&document))))
}

/// Fetch a document with its verification report.
#[utoipa::path(
    get,
    path = "/v1/documents/{id}",
    params(("id" = String, Path, description = "Document identifier")),
    responses(
        (status = 200, description = "Document", body = DocumentResponse),
        (status = 404, description = "Unknown document", body = ErrorBody),
    )
)]
pub(crate) async fn get_document(
    State(state): State<AppState>,
    _actor: AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<DocumentResponse>, AppError> {
    let id: DocumentId = parse_id(&id, "document id")?;
    let document = state.documents.document(id)?;
    Ok(Json(document_to_response(&document)))
}

/// Apply a manual verification decision.
#[utoipa::path(
    post,
    path = "/v1/documents/{id}/verify",
    params(("id" = String, Path, description = "Document identifier")),
    request_body = VerifyDocumentRequest,
    responses(
        (status = 200, description = "Decision applied", body = DocumentResponse),
        (status = 404, description = "Unknown document", body = ErrorBody),
        (status = 403, description = "Employees cannot verify documents", body = ErrorBody),
    )
)]
pub(crate) async fn verify_document(
    State(state): State<AppState>,
    verifier: VerifierActor,
    Path(id): Path<String>,
    Json(body): Json<VerifyDocumentRequest>,
) -> Result<Json<DocumentResponse>, AppError> {
    let id: DocumentId = parse_id(&id, "document id")?;
    let decision = match body.action.as_str() {
        "verify" => ManualDecision::Verify,
        "reject" => ManualDecision::Reject,
        "escalate" => ManualDecision::Escalate,
        other => {
            return Err(AppError::Validation(format!(
                "unknown verification action: {other:?} (expected \"verify\", \"reject\", or \"escalate\")"
            )));
        }
    };

    let document = state.documents.manual_verify(id, decision, verifier.user_id)?;
    Ok(Json(document_to_response(&document)))
}

/// Delete a document and its stored file.
#[utoipa::path(
    delete,
    path = "/v1/documents/{id}",
    params(("id" = String, Path, description = "Document identifier")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 404, description = "Unknown document", body = ErrorBody),
    )
)]
pub(crate) async fn delete_document(
    State(state): State<AppState>,
    verifier: VerifierActor,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: DocumentId = parse_id(&id, "document id")?;
    state.documents.delete_document(id, verifier.user_id)?;
    Ok(StatusCode::NO_CONTENT)
}
