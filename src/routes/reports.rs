// ABOUTME: Period report route handlers
// ABOUTME: Parses and validates report parameters, then runs the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Report routes.
//!
//! This is the "request parser" boundary of the aggregation engine: the
//! granularity string and reference date are validated here, so the engine
//! only ever receives a constrained enum and a real instant. The store is
//! queried for the previous-window start through the current-window end;
//! the engine partitions that snapshot itself.

use crate::errors::{AppError, AppResult};
use crate::intelligence::{aggregate, Granularity, ReportPeriod, ReportRequest};
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Query parameters for report generation
#[derive(Debug, Deserialize)]
struct ReportQuery {
    /// Period size; defaults to daily
    #[serde(default)]
    granularity: Option<String>,
    /// Reference date anchoring the period; defaults to now
    #[serde(default)]
    date: Option<String>,
}

/// Report routes
pub struct ReportRoutes;

impl ReportRoutes {
    /// Create all report routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/users/:user_id/reports", get(Self::handle_report))
            .with_state(resources)
    }

    /// Handle report generation
    async fn handle_report(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Query(params): Query<ReportQuery>,
    ) -> Result<Response, AppError> {
        let granularity = params
            .granularity
            .as_deref()
            .unwrap_or("daily")
            .parse::<Granularity>()?;
        let reference = params
            .date
            .as_deref()
            .map_or_else(|| Ok(Utc::now()), parse_reference_date)?;

        let request = ReportRequest {
            granularity,
            reference,
        };

        // One fetch covers both windows; the engine partitions the snapshot.
        let period = ReportPeriod::resolve(granularity, reference)?;
        let samples = resources
            .database
            .samples_between(user_id, period.previous_start, period.end)
            .await?;

        let report = aggregate(&samples, &request)?;

        info!(
            user.id = %user_id,
            granularity = %granularity,
            samples = report.current.count,
            "period report generated"
        );

        Ok((StatusCode::OK, Json(report)).into_response())
    }
}

/// Accept an RFC3339 instant or a plain `YYYY-MM-DD` date (midnight UTC)
fn parse_reference_date(raw: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| {
            AppError::invalid_input(format!(
                "unparseable date '{raw}', expected RFC3339 or YYYY-MM-DD"
            ))
        })
}
