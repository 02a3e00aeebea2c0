//! # Authentication and Actor Identity
//!
//! Two layers, both thin by design:
//!
//! 1. An optional static bearer token (`SHIELD_AUTH_TOKEN`) guarding the
//!    whole API surface, for deployments without a gateway in front.
//! 2. Actor identity headers set by the (trusted) gateway after it has
//!    authenticated the caller: `X-Actor-Id`, `X-Actor-Role`, and — for
//!    company principals — `X-Company-Id`. JWT issuance and session
//!    handling live in the gateway, not here.
//!
//! Role checks are exhaustive matches over [`Role`] in the extractors;
//! handlers receive an already-narrowed actor type and stay role-free.

use axum::async_trait;
use axum::extract::{FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use shield_core::{Actor, CompanyId, Role, UserId};

use crate::error::AppError;

/// Static bearer token configuration carried as an Extension.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Required token; `None` disables the check.
    pub token: Option<String>,
}

/// Reject requests without the configured bearer token.
///
/// Health probes and the OpenAPI document are mounted outside this
/// middleware.
pub async fn auth_middleware(
    axum::Extension(config): axum::Extension<AuthConfig>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = &config.token {
        let presented = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));
        if presented != Some(expected.as_str()) {
            return Err(AppError::Unauthorized("missing or invalid bearer token".to_string()));
        }
    }
    Ok(next.run(request).await)
}

fn header<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(format!("missing {name} header")))
}

fn parse_actor(parts: &Parts) -> Result<Actor, AppError> {
    let user_id: UserId = header(parts, "x-actor-id")?
        .parse()
        .map_err(|_| AppError::Unauthorized("malformed X-Actor-Id header".to_string()))?;
    let role = Role::parse(header(parts, "x-actor-role")?)
        .map_err(|e| AppError::Unauthorized(e.to_string()))?;
    Ok(Actor::new(user_id, role))
}

/// Any authenticated actor, role not yet narrowed.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedActor(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parse_actor(parts)?))
    }
}

/// A company principal: a company-role actor plus the company it acts
/// for. Forbidden for every other role.
#[derive(Debug, Clone, Copy)]
pub struct CompanyActor {
    /// The acting user account.
    pub user_id: UserId,
    /// The company the gateway bound this principal to.
    pub company_id: CompanyId,
}

#[async_trait]
impl<S> FromRequestParts<S> for CompanyActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parse_actor(parts)?;
        match actor.role {
            Role::Company => {
                let company_id: CompanyId = header(parts, "x-company-id")?
                    .parse()
                    .map_err(|_| {
                        AppError::Unauthorized("malformed X-Company-Id header".to_string())
                    })?;
                Ok(Self {
                    user_id: actor.user_id,
                    company_id,
                })
            }
            Role::Admin | Role::Employee => Err(AppError::Forbidden(format!(
                "role {} cannot perform company operations",
                actor.role
            ))),
        }
    }
}

/// An admin principal. Forbidden for every other role.
#[derive(Debug, Clone, Copy)]
pub struct AdminActor {
    /// The acting admin account.
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parse_actor(parts)?;
        match actor.role {
            Role::Admin => Ok(Self {
                user_id: actor.user_id,
            }),
            Role::Company | Role::Employee => Err(AppError::Forbidden(format!(
                "role {} cannot perform admin operations",
                actor.role
            ))),
        }
    }
}

/// A verifier principal: admin, or a company acting on its own records.
/// Document verification is open to both per the platform rules.
#[derive(Debug, Clone, Copy)]
pub struct VerifierActor {
    /// The acting user account.
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for VerifierActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parse_actor(parts)?;
        match actor.role {
            Role::Admin | Role::Company => Ok(Self {
                user_id: actor.user_id,
            }),
            Role::Employee => Err(AppError::Forbidden(
                "role employee cannot verify documents".to_string(),
            )),
        }
    }
}
