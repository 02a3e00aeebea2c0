//! HireShield API server binary.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use shield_api::config::Config;
use shield_api::state::AppState;

/// HireShield trust-score API server.
#[derive(Parser, Debug)]
#[command(name = "shield-api", version, about)]
struct Args {
    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let state = AppState::new(config);
    let app = shield_api::app(state);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    tracing::info!(addr = %args.bind, "shield-api listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
