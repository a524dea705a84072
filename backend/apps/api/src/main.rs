//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::Router;
use platform::config::{env_or, env_parse, env_string};
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verifier::{VerifierConfig, verifier_router};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:31114";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,verifier=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    let max_sessions = env_parse::<NonZeroUsize>("VERIFIER_MAX_SESSIONS")?;

    tracing::info!(
        audience_prefix = %config.audience_prefix,
        claims_token_bytes = config.claims_token.len(),
        max_sessions = ?max_sessions,
        "Verifier configured"
    );

    if max_sessions.is_none() {
        tracing::warn!("Session store is unbounded; set VERIFIER_MAX_SESSIONS for long-running use");
    }

    // Build router
    let app = Router::new()
        .merge(verifier_router(config, max_sessions))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env_or("VERIFIER_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)
        .parse()
        .context("VERIFIER_LISTEN_ADDR is not a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_config() -> anyhow::Result<VerifierConfig> {
    let mut config = VerifierConfig::default();

    if let Some(prefix) = env_string("VERIFIER_AUDIENCE_PREFIX") {
        config.audience_prefix = prefix;
    }

    if let Some(path) = env_string("VERIFIER_CLAIMS_TOKEN_PATH") {
        config = config
            .with_claims_token_file(&path)
            .with_context(|| format!("Failed to load claims token from {path}"))?;
        tracing::info!(path = %path, "Loaded claims token");
    }

    Ok(config)
}
