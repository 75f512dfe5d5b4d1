// ABOUTME: Body-metric record CRUD route handlers
// ABOUTME: Validation boundary plus classification before persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record routes.
//!
//! This is the validation boundary of the classifier: weight and height are
//! rejected here unless strictly positive and finite, so the engine only
//! ever sees values inside its precondition domain. Every route is scoped
//! by the owning user id, supplied as a path segment by the authorizing
//! upstream.

use crate::errors::{AppError, AppResult};
use crate::intelligence::{classify, BmiAssessment};
use crate::models::BodySample;
use crate::resources::ServerResources;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bodylog_core::constants::pagination::DEFAULT_RECORD_PAGE_SIZE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request body for creating or updating a record
#[derive(Debug, Deserialize)]
pub struct RecordPayload {
    /// Measured weight in kilograms
    pub weight_kg: f64,
    /// Measured height in centimeters
    pub height_cm: f64,
    /// Measurement time; defaults to now on create, to the stored value
    /// on update
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Query parameters for record listing
#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(default = "default_limit")]
    limit: i64,
    #[serde(default)]
    offset: i64,
}

const fn default_limit() -> i64 {
    DEFAULT_RECORD_PAGE_SIZE
}

/// Response for record writes: the stored record plus its assessment
#[derive(Debug, Serialize)]
pub struct RecordWriteResponse {
    /// The record as persisted
    pub record: BodySample,
    /// Classification of the written measurement
    pub assessment: BmiAssessment,
}

/// Response for record listing
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    /// One page of records, newest first
    pub records: Vec<BodySample>,
    /// Total number of records owned by the user
    pub total: i64,
}

/// Record CRUD routes
pub struct RecordRoutes;

impl RecordRoutes {
    /// Create all record routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/users/:user_id/records",
                post(Self::handle_create).get(Self::handle_list),
            )
            .route(
                "/api/users/:user_id/records/:record_id",
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle record creation
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Json(payload): Json<RecordPayload>,
    ) -> Result<Response, AppError> {
        validate_measurement(&payload)?;

        let assessment = classify(payload.weight_kg, payload.height_cm);
        let now = Utc::now();
        let record = BodySample {
            id: Uuid::new_v4(),
            user_id,
            weight_kg: payload.weight_kg,
            height_cm: payload.height_cm,
            bmi: assessment.bmi,
            category: assessment.category,
            recorded_at: payload.recorded_at.unwrap_or(now),
            created_at: now,
        };

        resources.database.insert_sample(&record).await?;

        info!(
            user.id = %user_id,
            record.id = %record.id,
            bmi = record.bmi,
            category = %record.category,
            "body record created"
        );

        Ok((
            StatusCode::CREATED,
            Json(RecordWriteResponse { record, assessment }),
        )
            .into_response())
    }

    /// Handle record listing
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Path(user_id): Path<Uuid>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let (records, total) = resources
            .database
            .list_samples(user_id, params.limit, params.offset)
            .await?;

        Ok((StatusCode::OK, Json(RecordListResponse { records, total })).into_response())
    }

    /// Handle single record fetch
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, record_id)): Path<(Uuid, Uuid)>,
    ) -> Result<Response, AppError> {
        let record = resources
            .database
            .get_sample(user_id, record_id)
            .await?
            .ok_or_else(|| record_not_found(record_id))?;

        Ok((StatusCode::OK, Json(record)).into_response())
    }

    /// Handle record update: re-derives bmi and category from the new
    /// measurement, keeping `recorded_at` when the payload omits it
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, record_id)): Path<(Uuid, Uuid)>,
        Json(payload): Json<RecordPayload>,
    ) -> Result<Response, AppError> {
        validate_measurement(&payload)?;

        let existing = resources
            .database
            .get_sample(user_id, record_id)
            .await?
            .ok_or_else(|| record_not_found(record_id))?;

        let assessment = classify(payload.weight_kg, payload.height_cm);
        let record = BodySample {
            weight_kg: payload.weight_kg,
            height_cm: payload.height_cm,
            bmi: assessment.bmi,
            category: assessment.category,
            recorded_at: payload.recorded_at.unwrap_or(existing.recorded_at),
            ..existing
        };

        resources.database.update_sample(&record).await?;

        info!(
            user.id = %user_id,
            record.id = %record.id,
            bmi = record.bmi,
            "body record updated"
        );

        Ok((
            StatusCode::OK,
            Json(RecordWriteResponse { record, assessment }),
        )
            .into_response())
    }

    /// Handle record deletion
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path((user_id, record_id)): Path<(Uuid, Uuid)>,
    ) -> Result<Response, AppError> {
        let deleted = resources.database.delete_sample(user_id, record_id).await?;
        if !deleted {
            return Err(record_not_found(record_id));
        }

        info!(user.id = %user_id, record.id = %record_id, "body record deleted");

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}

/// Reject measurements outside the classifier's precondition domain
fn validate_measurement(payload: &RecordPayload) -> AppResult<()> {
    if !payload.weight_kg.is_finite() || payload.weight_kg <= 0.0 {
        return Err(AppError::invalid_input(
            "weight_kg must be a positive number",
        ));
    }
    if !payload.height_cm.is_finite() || payload.height_cm <= 0.0 {
        return Err(AppError::invalid_input(
            "height_cm must be a positive number",
        ));
    }
    Ok(())
}

fn record_not_found(record_id: Uuid) -> AppError {
    AppError::not_found(format!("body record {record_id} not found"))
}
