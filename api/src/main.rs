//! Cake API Server
//!
//! A small CRUD service for cakes.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{InMemoryCakeRepository, PostgresCakeRepository};
use app::{CakeService, CakeServiceImpl};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cake_service: Arc<dyn CakeService>,
    pub config: Config,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        // Cakes
        .route(
            "/cakes",
            get(handlers::list_cakes).post(handlers::create_cake),
        )
        .route(
            "/cakes/:id",
            get(handlers::get_cake)
                .put(handlers::update_cake)
                .delete(handlers::delete_cake),
        );

    let app = if state.config.cors_allow_any {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Pick the cake store: PostgreSQL when configured, memory otherwise
async fn build_cake_service(config: &Config) -> anyhow::Result<Arc<dyn CakeService>> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("failed to connect to database")?;

            let repo = PostgresCakeRepository::new(db);
            repo.ensure_schema()
                .await
                .context("failed to create cakes table")?;
            tracing::info!("Database connected, storing cakes in PostgreSQL");

            Ok(Arc::new(CakeServiceImpl::new(Arc::new(repo))))
        }
        None => {
            tracing::info!("DATABASE_URL not set, storing cakes in memory");
            Ok(Arc::new(CakeServiceImpl::new(Arc::new(
                InMemoryCakeRepository::new(),
            ))))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("HTTP server shutting down gracefully");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cake_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Cake API...");

    // Load configuration
    let config = Config::from_env();

    let cake_service = build_cake_service(&config).await?;

    let state = AppState {
        cake_service,
        config: config.clone(),
    };

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    Ok(())
}
