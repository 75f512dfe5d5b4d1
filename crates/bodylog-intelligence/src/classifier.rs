// ABOUTME: BMI computation and band classification for single measurements
// ABOUTME: Pure mapping from weight and height to a rounded index and category
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-measurement classification.
//!
//! Computes the body-mass index from a weight/height pair, rounds it to two
//! decimals, and assigns the classification band. Thresholds are applied to
//! the rounded value so the returned category always agrees with the band of
//! the returned index.

use bodylog_core::models::BmiCategory;
use serde::Serialize;

/// Upper bound (exclusive) of the underweight band
const UNDERWEIGHT_LIMIT: f64 = 18.5;
/// Upper bound (exclusive) of the normal band
const NORMAL_LIMIT: f64 = 25.0;
/// Upper bound (exclusive) of the overweight band
const OVERWEIGHT_LIMIT: f64 = 30.0;

/// Result of classifying a single measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiAssessment {
    /// Body-mass index, rounded to two decimals
    pub bmi: f64,
    /// Band the index falls into
    pub category: BmiCategory,
    /// Advisory text attached to the band
    pub advice: &'static str,
    /// Display color (hex) attached to the band
    pub color: &'static str,
}

/// Classify one measurement.
///
/// Precondition: `weight_kg` and `height_cm` are strictly positive; the
/// validation boundary rejects anything else before this function is
/// reached. Deterministic and side-effect free.
#[must_use]
pub fn classify(weight_kg: f64, height_cm: f64) -> BmiAssessment {
    let height_m = height_cm / 100.0;
    let bmi = crate::round2(weight_kg / (height_m * height_m));
    let category = band_for(bmi);

    BmiAssessment {
        bmi,
        category,
        advice: category.advice(),
        color: category.color(),
    }
}

/// Threshold bands evaluated in order, first match wins.
fn band_for(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_LIMIT {
        BmiCategory::Underweight
    } else if bmi < NORMAL_LIMIT {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_LIMIT {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
