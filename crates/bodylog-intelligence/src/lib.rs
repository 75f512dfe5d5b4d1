// ABOUTME: Classification and period-report engine for body-metric samples
// ABOUTME: Pure, synchronous functions with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Bodylog Intelligence
//!
//! The analytical core of the bodylog service. Two components, the second
//! depending on the first:
//!
//! - **classifier**: maps a (weight, height) pair to a rounded body-mass
//!   index and its classification band.
//! - **report**: maps a set of timestamped samples plus a reporting
//!   granularity to a gap-filled time series, summary statistics, a
//!   category histogram, and a period-over-period comparison.
//!
//! Every function here is pure and synchronous: inputs are in-memory
//! snapshots, outputs are owned values, and invocations may run
//! concurrently without coordination. Persistence and request validation
//! live with the callers.

/// BMI computation and category classification
pub mod classifier;
/// Calendar period resolution and bucket grid generation
pub mod period;
/// Report assembly: statistics, buckets, and histogram over a period
pub mod report;

pub use classifier::{classify, BmiAssessment};
pub use period::{BucketSpan, Granularity, ReportPeriod};
pub use report::{aggregate, BodyReport, PeriodStats, PeriodSummary, ReportRequest, TrendBucket};

/// Round to two decimal places, half away from zero (half-up for the
/// positive values handled here).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
