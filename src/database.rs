// ABOUTME: SQLite persistence for body-metric records
// ABOUTME: User-scoped CRUD plus the range query feeding the report engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Database Management
//!
//! SQLite-backed storage for body-metric records. Identifiers are stored as
//! TEXT uuids and timestamps as RFC3339 TEXT with a fixed millisecond
//! format, so lexicographic comparison in SQL matches chronological order.
//! Every query is scoped by the owning user id; records are never visible
//! across users.

use crate::errors::{AppError, AppResult};
use crate::models::BodySample;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Columns selected for every record read, in `row_to_sample` order
const SAMPLE_COLUMNS: &str =
    "id, user_id, weight_kg, height_cm, bmi, category, recorded_at, created_at";

/// Database manager for body-metric record storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database and run migrations.
    ///
    /// # Errors
    /// Returns a database error if the connection or migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("failed to open database: {e}")))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations.
    ///
    /// # Errors
    /// Returns a database error if a DDL statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS body_samples (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                weight_kg REAL NOT NULL,
                height_cm REAL NOT NULL,
                bmi REAL NOT NULL,
                category TEXT NOT NULL,
                recorded_at TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("create body_samples table: {e}")))?;

        // Index for user-scoped listing and period range queries
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_body_samples_user_recorded
             ON body_samples(user_id, recorded_at)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("create body_samples index: {e}")))?;

        Ok(())
    }

    /// Insert one record.
    ///
    /// # Errors
    /// Returns a database error if the insert fails.
    pub async fn insert_sample(&self, sample: &BodySample) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO body_samples
                (id, user_id, weight_kg, height_cm, bmi, category, recorded_at, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(sample.id.to_string())
        .bind(sample.user_id.to_string())
        .bind(sample.weight_kg)
        .bind(sample.height_cm)
        .bind(sample.bmi)
        .bind(sample.category.as_str())
        .bind(encode_datetime(sample.recorded_at))
        .bind(encode_datetime(sample.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("insert body sample: {e}")))?;

        Ok(())
    }

    /// Fetch one record by id, scoped to its owner.
    ///
    /// # Errors
    /// Returns a database error if the query fails or the row is malformed.
    pub async fn get_sample(
        &self,
        user_id: Uuid,
        record_id: Uuid,
    ) -> AppResult<Option<BodySample>> {
        let row = sqlx::query(&format!(
            "SELECT {SAMPLE_COLUMNS} FROM body_samples WHERE id = ? AND user_id = ?"
        ))
        .bind(record_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("fetch body sample: {e}")))?;

        row.as_ref().map(row_to_sample).transpose()
    }

    /// List records newest first, with the total count for pagination.
    ///
    /// # Errors
    /// Returns a database error if the query fails or a row is malformed.
    pub async fn list_samples(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> AppResult<(Vec<BodySample>, i64)> {
        let rows = sqlx::query(&format!(
            "SELECT {SAMPLE_COLUMNS} FROM body_samples
             WHERE user_id = ?
             ORDER BY recorded_at DESC
             LIMIT ? OFFSET ?"
        ))
        .bind(user_id.to_string())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("list body samples: {e}")))?;

        let samples = rows
            .iter()
            .map(row_to_sample)
            .collect::<AppResult<Vec<_>>>()?;

        let total: i64 =
            sqlx::query("SELECT COUNT(*) AS count FROM body_samples WHERE user_id = ?")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("count body samples: {e}")))?
                .try_get("count")
                .map_err(|e| AppError::database(format!("read body sample count: {e}")))?;

        Ok((samples, total))
    }

    /// Records with `recorded_at` in `[start, end]`, ascending.
    ///
    /// # Errors
    /// Returns a database error if the query fails or a row is malformed.
    pub async fn samples_between(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<BodySample>> {
        let rows = sqlx::query(&format!(
            "SELECT {SAMPLE_COLUMNS} FROM body_samples
             WHERE user_id = ? AND recorded_at >= ? AND recorded_at <= ?
             ORDER BY recorded_at ASC"
        ))
        .bind(user_id.to_string())
        .bind(encode_datetime(start))
        .bind(encode_datetime(end))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("range query body samples: {e}")))?;

        rows.iter().map(row_to_sample).collect()
    }

    /// Overwrite the mutable fields of an existing record.
    ///
    /// # Errors
    /// Returns a database error if the update fails.
    pub async fn update_sample(&self, sample: &BodySample) -> AppResult<()> {
        sqlx::query(
            r"
            UPDATE body_samples
            SET weight_kg = ?, height_cm = ?, bmi = ?, category = ?, recorded_at = ?
            WHERE id = ? AND user_id = ?
            ",
        )
        .bind(sample.weight_kg)
        .bind(sample.height_cm)
        .bind(sample.bmi)
        .bind(sample.category.as_str())
        .bind(encode_datetime(sample.recorded_at))
        .bind(sample.id.to_string())
        .bind(sample.user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("update body sample: {e}")))?;

        Ok(())
    }

    /// Delete one record; returns whether a row was removed.
    ///
    /// # Errors
    /// Returns a database error if the delete fails.
    pub async fn delete_sample(&self, user_id: Uuid, record_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM body_samples WHERE id = ? AND user_id = ?")
            .bind(record_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("delete body sample: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Fixed-width RFC3339 (UTC, millisecond precision) so TEXT comparison in
/// SQL matches chronological order.
fn encode_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn decode_datetime(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| AppError::database(format!("malformed timestamp '{raw}': {e}")))
}

fn decode_uuid(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| AppError::database(format!("malformed uuid '{raw}': {e}")))
}

fn row_to_sample(row: &SqliteRow) -> AppResult<BodySample> {
    let column = |e: sqlx::Error| AppError::database(format!("read body sample row: {e}"));

    let id: String = row.try_get("id").map_err(column)?;
    let user_id: String = row.try_get("user_id").map_err(column)?;
    let category: String = row.try_get("category").map_err(column)?;
    let recorded_at: String = row.try_get("recorded_at").map_err(column)?;
    let created_at: String = row.try_get("created_at").map_err(column)?;

    Ok(BodySample {
        id: decode_uuid(&id)?,
        user_id: decode_uuid(&user_id)?,
        weight_kg: row.try_get("weight_kg").map_err(column)?,
        height_cm: row.try_get("height_cm").map_err(column)?,
        bmi: row.try_get("bmi").map_err(column)?,
        category: category.parse()?,
        recorded_at: decode_datetime(&recorded_at)?,
        created_at: decode_datetime(&created_at)?,
    })
}
