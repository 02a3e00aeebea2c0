//! # OpenAPI Document
//!
//! Auto-generated OpenAPI spec via utoipa derive macros, served at
//! `/openapi.json` outside the auth middleware.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::routes::{companies, documents, employees, reviews};
use crate::state::AppState;

/// The assembled API document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HireShield API",
        description = "Employment trust scores from moderated performance reviews and verified identity documents."
    ),
    paths(
        companies::register_company,
        employees::register_employee,
        employees::get_employee,
        employees::review_stats,
        employees::recompute,
        reviews::submit_review,
        reviews::get_review,
        reviews::delete_review,
        reviews::moderate_review,
        documents::upload_document,
        documents::get_document,
        documents::verify_document,
        documents::delete_document,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        companies::RegisterCompanyRequest,
        companies::CompanyResponse,
        employees::RegisterEmployeeRequest,
        employees::EmployeeResponse,
        employees::ScoreResponse,
        employees::ReviewStatsResponse,
        employees::DimensionAverageResponse,
        reviews::SubmitReviewRequest,
        reviews::ModerateReviewRequest,
        reviews::ReviewResponse,
        documents::UploadDocumentRequest,
        documents::VerifyDocumentRequest,
        documents::DocumentResponse,
        documents::CheckResponse,
    ))
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
