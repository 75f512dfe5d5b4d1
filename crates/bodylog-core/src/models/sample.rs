// ABOUTME: Stored body-metric measurement record owned by a single user
// ABOUTME: Carries the derived bmi and category alongside the raw inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::BmiCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted body-metric measurement.
///
/// `bmi` and `category` are derived from `weight_kg`/`height_cm` by the
/// classifier at write time and are immutable for the lifetime of the
/// record; an explicit update re-derives both. All period logic keys on
/// `recorded_at`, never on `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySample {
    /// Unique identifier of this record
    pub id: Uuid,
    /// Owning user; records are never visible across users
    pub user_id: Uuid,
    /// Measured weight in kilograms, strictly positive
    pub weight_kg: f64,
    /// Measured height in centimeters, strictly positive
    pub height_cm: f64,
    /// Derived body-mass index, rounded to two decimals
    pub bmi: f64,
    /// Classification band of `bmi`
    pub category: BmiCategory,
    /// When the measurement was taken (user-supplied or defaulted)
    pub recorded_at: DateTime<Utc>,
    /// When the record was stored
    pub created_at: DateTime<Utc>,
}
