//! # Company Routes
//!
//! Registration of companies. A GSTIN supplied at registration is
//! format-validated by the verification engine before it is stored.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use shield_core::Role;
use shield_domain::Company;

use crate::auth::AuthenticatedActor;
use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Request to register a company.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterCompanyRequest {
    /// Legal name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Optional GSTIN; validated when present.
    pub gstin: Option<String>,
}

/// Company representation in API responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub company_id: String,
    pub name: String,
    pub email: String,
    pub gstin: Option<String>,
    pub created_at: String,
}

fn company_to_response(c: &Company) -> CompanyResponse {
    CompanyResponse {
        company_id: c.id.to_string(),
        name: c.name.clone(),
        email: c.email.to_string(),
        gstin: c.gstin.clone(),
        created_at: c.created_at.to_string(),
    }
}

/// Build the company router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/companies", post(register_company))
}

/// Register a company.
#[utoipa::path(
    post,
    path = "/v1/companies",
    request_body = RegisterCompanyRequest,
    responses(
        (status = 201, description = "Company registered", body = CompanyResponse),
        (status = 422, description = "Malformed email or GSTIN", body = ErrorBody),
        (status = 403, description = "Employee principals cannot register companies", body = ErrorBody),
    )
)]
pub(crate) async fn register_company(
    State(state): State<AppState>,
    AuthenticatedActor(actor): AuthenticatedActor,
    Json(body): Json<RegisterCompanyRequest>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    match actor.role {
        Role::Admin | Role::Company => {}
        Role::Employee => {
            return Err(AppError::Forbidden(
                "role employee cannot register companies".to_string(),
            ));
        }
    }

    let company = state
        .registry
        .register_company(body.name, body.email, body.gstin, actor.user_id)?;
    Ok((StatusCode::CREATED, Json(company_to_response(&company))))
}
