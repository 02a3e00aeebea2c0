//! # shield-api — Axum HTTP Surface for HireShield
//!
//! Thin HTTP layer over the `shield-engine` services.
//!
//! ## API Surface
//!
//! | Prefix                          | Module                 | Domain                |
//! |---------------------------------|------------------------|-----------------------|
//! | `/v1/companies`                 | [`routes::companies`]  | Company registration  |
//! | `/v1/employees/*`               | [`routes::employees`]  | Employees and scores  |
//! | `/v1/reviews/*`                 | [`routes::reviews`]    | Review lifecycle      |
//! | `/v1/employees/{id}/documents`  | [`routes::documents`]  | Document intake       |
//! | `/v1/documents/*`               | [`routes::documents`]  | Verification          |
//!
//! ## Middleware
//!
//! ```text
//! TraceLayer → AuthMiddleware → Handler
//! ```
//!
//! `/health` and `/openapi.json` are mounted outside the auth middleware
//! so probes and tooling need no credentials. Actor identity arrives in
//! gateway-set headers; see [`auth`].

pub mod auth;
pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.auth_token.clone(),
    };

    let api = Router::new()
        .merge(routes::companies::router())
        .merge(routes::employees::router())
        .merge(routes::reviews::router())
        .merge(routes::documents::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(axum::Extension(auth_config));

    Router::new()
        .route("/health", get(health))
        .merge(openapi::router())
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe.
async fn health() -> StatusCode {
    StatusCode::OK
}
