//! # Review Routes
//!
//! HTTP surface for the review lifecycle: submission (create-or-edit
//! upsert), retrieval, owner deletion, and admin moderation. Handlers
//! validate identifiers and narrow the actor; the engine enforces the
//! upsert semantics, the temporal window, and the moderation state
//! machine.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use shield_core::{EmployeeId, ReviewId};
use shield_domain::{
    EmploymentDetails, ModerationDecision, RatingSet, RawRatings, Review,
};
use shield_engine::ReviewSubmission;

use crate::auth::{AdminActor, AuthenticatedActor, CompanyActor};
use crate::error::{AppError, ErrorBody};
use crate::routes::parse_id;
use crate::state::AppState;

/// Request to submit (create or edit) a review.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitReviewRequest {
    /// The reviewed employee.
    pub employee_id: String,
    /// Raw ratings; missing or non-numeric dimensions coerce to 1.
    #[schema(value_type = Object)]
    pub ratings: RawRatings,
    /// Employment context.
    #[schema(value_type = Object)]
    pub employment: EmploymentDetails,
    /// Free-text assessment, at least 50 characters.
    pub comment: String,
    /// Rehire verdict.
    pub would_rehire: bool,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Admin moderation decision.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateReviewRequest {
    /// `approve` or `reject`.
    pub action: String,
}

/// Review representation in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub review_id: String,
    pub company_id: String,
    pub employee_id: String,
    #[schema(value_type = Object)]
    pub ratings: RatingSet,
    pub average_rating: f64,
    pub comment: String,
    pub would_rehire: bool,
    pub tags: Vec<String>,
    pub moderation_status: String,
    pub edit_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

fn review_to_response(r: &Review) -> ReviewResponse {
    ReviewResponse {
        review_id: r.id.to_string(),
        company_id: r.company_id.to_string(),
        employee_id: r.employee_id.to_string(),
        ratings: r.ratings,
        average_rating: r.average_rating,
        comment: r.comment.clone(),
        would_rehire: r.would_rehire,
        tags: r.tags.clone(),
        moderation_status: r.moderation_status.to_string(),
        edit_count: r.edit_history.len(),
        created_at: r.created_at.to_string(),
        updated_at: r.updated_at.to_string(),
    }
}

/// Build the review router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/reviews", post(submit_review))
        .route("/v1/reviews/:id", get(get_review).delete(delete_review))
        .route("/v1/reviews/:id/moderate", post(moderate_review))
}

/// Submit a review: creates a pending review, or edits the acting
/// company's existing active review of the employee.
#[utoipa::path(
    post,
    path = "/v1/reviews",
    request_body = SubmitReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 200, description = "Existing review edited", body = ReviewResponse),
        (status = 422, description = "Validation failure or submission window exceeded", body = ErrorBody),
        (status = 404, description = "Unknown employee", body = ErrorBody),
        (status = 403, description = "Only company principals submit reviews", body = ErrorBody),
    )
)]
pub(crate) async fn submit_review(
    State(state): State<AppState>,
    company: CompanyActor,
    Json(body): Json<SubmitReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let employee_id: EmployeeId = parse_id(&body.employee_id, "employee id")?;
    let submission = ReviewSubmission {
        ratings: body.ratings,
        employment: body.employment,
        comment: body.comment,
        would_rehire: body.would_rehire,
        tags: body.tags,
    };

    let review =
        state
            .reviews
            .submit_review(company.company_id, employee_id, submission, company.user_id)?;

    let status = if review.edit_history.is_empty() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(review_to_response(&review))))
}

/// Fetch a review.
#[utoipa::path(
    get,
    path = "/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 200, description = "Review", body = ReviewResponse),
        (status = 404, description = "Unknown or deleted review", body = ErrorBody),
    )
)]
pub(crate) async fn get_review(
    State(state): State<AppState>,
    _actor: AuthenticatedActor,
    Path(id): Path<String>,
) -> Result<Json<ReviewResponse>, AppError> {
    let id: ReviewId = parse_id(&id, "review id")?;
    let review = state.reviews.review(id)?;
    Ok(Json(review_to_response(&review)))
}

/// Soft-delete a review owned by the acting company.
#[utoipa::path(
    delete,
    path = "/v1/reviews/{id}",
    params(("id" = String, Path, description = "Review identifier")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not the owning company", body = ErrorBody),
        (status = 404, description = "Unknown or deleted review", body = ErrorBody),
    )
)]
pub(crate) async fn delete_review(
    State(state): State<AppState>,
    company: CompanyActor,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id: ReviewId = parse_id(&id, "review id")?;
    state
        .reviews
        .delete_review(id, company.company_id, company.user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply an admin moderation decision to a pending review.
#[utoipa::path(
    post,
    path = "/v1/reviews/{id}/moderate",
    params(("id" = String, Path, description = "Review identifier")),
    request_body = ModerateReviewRequest,
    responses(
        (status = 200, description = "Decision applied", body = ReviewResponse),
        (status = 409, description = "Review already decided", body = ErrorBody),
        (status = 404, description = "Unknown or deleted review", body = ErrorBody),
        (status = 403, description = "Admin only", body = ErrorBody),
    )
)]
pub(crate) async fn moderate_review(
    State(state): State<AppState>,
    admin: AdminActor,
    Path(id): Path<String>,
    Json(body): Json<ModerateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let id: ReviewId = parse_id(&id, "review id")?;
    let decision = match body.action.as_str() {
        "approve" => ModerationDecision::Approve,
        "reject" => ModerationDecision::Reject,
        other => {
            return Err(AppError::Validation(format!(
                "unknown moderation action: {other:?} (expected \"approve\" or \"reject\")"
            )));
        }
    };

    let review = state.moderation.moderate_review(id, decision, admin.user_id)?;
    Ok(Json(review_to_response(&review)))
}
