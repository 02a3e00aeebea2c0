//! # Runtime Configuration
//!
//! Configuration read from `SHIELD_*` environment variables at startup
//! and carried on the application state. Nothing here is re-read after
//! boot.

use std::path::PathBuf;

/// API runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Static bearer token guarding the API. `None` leaves the API open
    /// (development only); the gateway in front normally terminates auth.
    pub auth_token: Option<String>,
    /// Root directory for stored document uploads. `None` disables file
    /// removal on document deletion (object storage managed elsewhere).
    pub document_root: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `SHIELD_AUTH_TOKEN` — static bearer token; unset = open API.
    /// - `SHIELD_DOCUMENT_ROOT` — upload root; unset = no local files.
    pub fn from_env() -> Self {
        let auth_token = std::env::var("SHIELD_AUTH_TOKEN").ok().filter(|t| !t.is_empty());
        if auth_token.is_none() {
            tracing::warn!("SHIELD_AUTH_TOKEN not set — API is unauthenticated");
        }
        Self {
            auth_token,
            document_root: std::env::var("SHIELD_DOCUMENT_ROOT").ok().map(PathBuf::from),
        }
    }
}
