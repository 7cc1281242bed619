//! SOFI API Server Binary
//!
//! Starts the HTTP API for the SOFI pension and insurance dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin sofi-api
//!
//! # Run with environment variables
//! SOFI_PORT=8080 SOFI_DATABASE_URL=postgres://... SOFI_JWT_SECRET=... cargo run --bin sofi-api
//! ```
//!
//! # Environment Variables
//!
//! * `SOFI_HOST` / `SOFI_PORT` - Bind address (default: 0.0.0.0:8080)
//! * `SOFI_JWT_SECRET` - JWT signing secret (required in production)
//! * `SOFI_JWT_ISSUER` - Token issuer (default: sofi)
//! * `SOFI_JWT_EXPIRATION_SECS` - Token lifetime in seconds (default: 3600)
//! * `SOFI_DATABASE_URL` - PostgreSQL connection string
//! * `SOFI_DATABASE_MAX_CONNECTIONS` / `SOFI_DATABASE_MIN_CONNECTIONS` - Pool bounds
//! * `SOFI_LOG_LEVEL` - trace, debug, info, warn, error (default: info)
//! * `SOFI_LOG_FORMAT` - `pretty` or `json`
//! * `SOFI_BOOTSTRAP_ADMIN_EMAIL` / `SOFI_BOOTSTRAP_ADMIN_PASSWORD` - Initial admin account
//! * `SOFI_CORS_ALLOWED_ORIGINS` - Comma-separated origins (default: any)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_auth::PasswordHasher;
use infra_db::{create_pool, run_migrations, DatabaseHealth, PgFundRepository, PgUserRepository};
use interface_api::config::{ApiConfig, LogFormat};
use interface_api::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("invalid configuration")?;

    if config.uses_placeholder_secret() {
        tracing::warn!("SOFI_JWT_SECRET is not set; using the development placeholder secret");
    }

    tracing::info!(host = %config.host, port = config.port, "Starting SOFI API server");

    let pool = create_pool(config.database())
        .await
        .context("failed to connect to database")?;

    run_migrations(&pool).await.context("failed to run migrations")?;

    let state = AppState::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgFundRepository::new(pool.clone())),
        Arc::new(DatabaseHealth::new(pool)),
        PasswordHasher::default(),
        config.clone(),
    );

    if let (Some(email), Some(password)) = (&config.bootstrap_admin_email, &config.bootstrap_admin_password) {
        if state.auth.ensure_bootstrap_admin(email, password).await? {
            tracing::info!(email = %email, "Bootstrap admin account created");
        }
    }

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
