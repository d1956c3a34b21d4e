mod config;
mod db;
mod errors;
mod generation;
mod models;
mod participants;
mod responses;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemorySurveyStore, PgSurveyStore, SurveyStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Survey API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!("Survey store initialized (backend: {})", store.backend());

    let state = AppState {
        store,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// PostgreSQL when `DATABASE_URL` is set, otherwise an in-memory store.
async fn build_store(config: &Config) -> Result<Arc<dyn SurveyStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            if config.run_migrations {
                run_migrations(&pool).await?;
            }
            Ok(Arc::new(PgSurveyStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory store, data is lost on restart");
            Ok(Arc::new(MemorySurveyStore::new()))
        }
    }
}

fn build_cors(config: &Config) -> Result<CorsLayer> {
    match &config.frontend_url {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .with_context(|| format!("FRONTEND_URL '{origin}' is not a valid origin"))?;
            info!("CORS restricted to {:?}", origin);
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
