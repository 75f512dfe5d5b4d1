// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Reports service name, version, and liveness status
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for load balancers and monitoring.

use axum::{routing::get, Json, Router};
use bodylog_core::constants::service_names;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> Router {
        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "ok",
                "service": service_names::BODYLOG_SERVER,
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        }

        Router::new().route("/api/health", get(health_handler))
    }
}
