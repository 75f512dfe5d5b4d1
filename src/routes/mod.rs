// ABOUTME: Route module organization for the bodylog HTTP endpoints
// ABOUTME: Centralized route definitions organized by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route modules for the bodylog service.
//!
//! Each domain module contains route definitions and thin handler
//! functions: handlers validate input, delegate to the store and the
//! report engine, and shape the response. No business logic lives here.

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Health check and system status routes
pub mod health;
/// Body-metric record CRUD routes
pub mod records;
/// Period report routes
pub mod reports;

pub use health::HealthRoutes;
pub use records::RecordRoutes;
pub use reports::ReportRoutes;

/// Assemble the full application router with tracing and CORS layers.
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecordRoutes::routes(resources.clone()))
        .merge(ReportRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
