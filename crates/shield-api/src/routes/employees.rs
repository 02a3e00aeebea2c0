//! # Employee Routes
//!
//! Registration, the employee view with derived score fields, review
//! statistics, and administrative recompute-on-demand.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use shield_core::EmployeeId;
use shield_domain::{Employee, ReviewStats, ScoreSummary};

use crate::auth::{AdminActor, AuthenticatedActor, CompanyActor};
use crate::error::{AppError, ErrorBody};
use crate::routes::parse_id;
use crate::state::AppState;

/// Request to register an employee record.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterEmployeeRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth (identity key alongside the name).
    pub date_of_birth: NaiveDate,
    /// Contact email.
    pub email: String,
}

/// Derived score fields in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    /// 0–100 aggregate, absent while the employee is unscored.
    pub overall_score: Option<u8>,
    pub verification_percentage: u8,
    pub documents_verified: u32,
    pub verified: bool,
}

impl From<ScoreSummary> for ScoreResponse {
    fn from(s: ScoreSummary) -> Self {
        Self {
            overall_score: s.overall_score,
            verification_percentage: s.verification_percentage,
            documents_verified: s.documents_verified,
            verified: s.verified,
        }
    }
}

/// Employee representation in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeResponse {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_by: String,
    pub score: ScoreResponse,
    pub created_at: String,
}

fn employee_to_response(e: &Employee) -> EmployeeResponse {
    EmployeeResponse {
        employee_id: e.id.to_string(),
        first_name: e.first_name.clone(),
        last_name: e.last_name.clone(),
        email: e.email.to_string(),
        created_by: e.created_by.to_string(),
        score: e.score.into(),
        created_at: e.created_at.to_string(),
    }
}

/// Mean rating on one dimension.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DimensionAverageResponse {
    pub dimension: String,
    pub average: f64,
}

/// Aggregate review statistics.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewStatsResponse {
    pub total_reviews: u32,
    pub overall_average: f64,
    pub would_rehire_rate: f64,
    pub dimension_averages: Vec<DimensionAverageResponse>,
}

fn stats_to_response(stats: &ReviewStats) -> ReviewStatsResponse {
    ReviewStatsResponse {
        total_reviews: stats.total_reviews,
        overall_average: stats.overall_average,
        would_rehire_rate: stats.would_rehire_rate,
        dimension_averages: stats
            .dimension_averages
            .iter()
            .map(|d| DimensionAverageResponse {
                dimension: d.dimension.to_string(),
                average: d.average,
            })
            .collect(),
    }
}

/// Build the employee router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/employees", post(register_employee))
        .route("/v1/employees/:id", get(get_employee))
        .route("/v1/employees/:id/review-stats", get(review_stats))
        .route("/v1/employees/:id/recompute", post(recompute))
}

/// Register an employee record under the acting company.
#[utoipa::path(
    post,
    path = "/v1/employees",
    request_body = RegisterEmployeeRequest,
    responses(
        (status = 201, description = "Employee registered", body = EmployeeResponse),
        (status = 422, description = "Malformed input", body = ErrorBody),
        (status = 403, description = "Only company principals register employees", body = ErrorBody),
    )
)]
pub(crate) async fn register_employee(
    State(state): State<AppState>,
    company: CompanyActor,
    Json(body): Json<RegisterEmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let employee = state.registry.register_employee(
        company.company_id,
        body.first_name,
        body.last_name,
        body.date_of_birth,
        body.email,
        company.user_id,
    )?;
    Ok((StatusCode::CREATED, Json(employee_to_response(&employee))))
}

/// Fetch an employee with its derived score fields.
#[utoipa::path(
    get,
    path = "/v1/employees/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponse),
        (status = 404, description = "Unknown employee", body = ErrorBody),
    )
)]
pub(crate) async fn get_employee(
    State(state): State<AppState>,
    _actor: AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let id: EmployeeId = parse_id(&id, "employee id")?;
    let employee = state.registry.employee(id)?;
    Ok(Json(employee_to_response(&employee)))
}

/// Aggregate statistics over the employee's active reviews.
#[utoipa::path(
    get,
    path = "/v1/employees/{id}/review-stats",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Review statistics", body = ReviewStatsResponse),
        (status = 404, description = "Unknown employee", body = ErrorBody),
    )
)]
pub(crate) async fn review_stats(
    State(state): State<AppState>,
    _actor: AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<ReviewStatsResponse>, AppError> {
    let id: EmployeeId = parse_id(&id, "employee id")?;
    let stats = state.reviews.review_stats(id)?;
    Ok(Json(stats_to_response(&stats)))
}

/// Administrative recompute-on-demand.
#[utoipa::path(
    post,
    path = "/v1/employees/{id}/recompute",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Recomputed score fields", body = ScoreResponse),
        (status = 404, description = "Unknown employee", body = ErrorBody),
        (status = 403, description = "Admin only", body = ErrorBody),
    )
)]
pub(crate) async fn recompute(
    State(state): State<AppState>,
    _admin: AdminActor,
    Path(id): Path<String>,
) -> Result<Json<ScoreResponse>, AppError> {
    let id: EmployeeId = parse_id(&id, "employee id")?;
    let summary = state.scores.recompute(id)?;
    Ok(Json(summary.into()))
}
