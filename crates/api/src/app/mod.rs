//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: host services and the purchase orchestrator
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let services = AppServices::in_memory(config)
        .map_err(|e| anyhow::anyhow!("failed to wire services: {e}"))?;
    Ok(router(Arc::new(services)))
}

/// Router over already wired services.
pub fn router(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
}
