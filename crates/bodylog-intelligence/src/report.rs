// ABOUTME: Report assembly over calendar periods for one user's samples
// ABOUTME: Gap-filled bucket series, summary statistics, and category histogram
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Period report generation.
//!
//! [`aggregate`] takes a snapshot of samples plus a [`ReportRequest`] and
//! produces a [`BodyReport`]: statistics for the current and previous
//! windows, the signed change between them, a bucket series covering the
//! full calendar grid of the period, and a histogram of classification
//! bands.
//!
//! Two output conventions differ on purpose: buckets with no samples are
//! kept (`mean_* = null`, `count = 0`) so charting consumers get a complete
//! grid, while categories with no samples are omitted from the histogram.

use crate::period::{Granularity, ReportPeriod};
use bodylog_core::errors::AppResult;
use bodylog_core::models::{BmiCategory, BodySample};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Input to report generation: a period size and the instant anchoring it.
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest {
    /// Reporting period size
    pub granularity: Granularity,
    /// Instant the period must contain; callers default this to "now"
    pub reference: DateTime<Utc>,
}

/// Min/max/mean summary over one window's bmi values.
///
/// An empty window yields all zeros rather than nulls; `count` is the
/// authoritative "no data" signal (bmi values are strictly positive, so a
/// genuine mean can never be zero).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// Smallest bmi in the window, 0 when empty
    pub min: f64,
    /// Largest bmi in the window, 0 when empty
    pub max: f64,
    /// Mean bmi rounded to two decimals, 0 when empty
    pub mean: f64,
    /// Number of samples in the window
    pub count: usize,
}

impl PeriodStats {
    /// Statistics of an empty window
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            mean: 0.0,
            count: 0,
        }
    }

    fn over(samples: &[&BodySample]) -> Self {
        if samples.is_empty() {
            return Self::empty();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for sample in samples {
            min = min.min(sample.bmi);
            max = max.max(sample.bmi);
            sum += sample.bmi;
        }

        Self {
            min,
            max,
            mean: crate::round2(sum / samples.len() as f64),
            count: samples.len(),
        }
    }
}

/// One point of the gap-filled period time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendBucket {
    /// Bucket start instant; stable sort key of the series
    pub start: DateTime<Utc>,
    /// Positional label (hour-of-day, day-of-month, month abbreviation)
    pub label: String,
    /// Mean bmi of the bucket's samples, `None` when empty
    pub mean_bmi: Option<f64>,
    /// Mean weight of the bucket's samples, `None` when empty
    pub mean_weight: Option<f64>,
    /// Number of samples that fell in this bucket
    pub count: usize,
}

/// Period metadata attached to a report.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    /// Period size the report was generated at
    pub granularity: Granularity,
    /// Human label of the window
    pub label: String,
    /// First instant of the window
    pub start: DateTime<Utc>,
    /// Last instant of the window
    pub end: DateTime<Utc>,
}

/// Aggregated view of one reporting period.
#[derive(Debug, Clone, Serialize)]
pub struct BodyReport {
    /// Resolved window metadata
    pub period: PeriodSummary,
    /// Statistics over the current window
    pub current: PeriodStats,
    /// Statistics over the preceding window
    pub previous: PeriodStats,
    /// Signed mean difference (current - previous), 0 when either window
    /// has no data
    pub change: f64,
    /// Complete bucket grid of the window, earliest first
    pub buckets: Vec<TrendBucket>,
    /// Samples per classification band; zero-count bands are omitted
    pub categories: HashMap<BmiCategory, usize>,
    /// Current-window samples, ascending by `recorded_at`
    pub samples: Vec<BodySample>,
}

/// Generate the report for one window of `samples`.
///
/// Samples outside both the current and the preceding window are ignored,
/// so callers may pass a superset (typically everything fetched for
/// `[previous_start, end]`). Empty input is not an error: the result
/// carries all-zero statistics and an all-null bucket grid.
///
/// # Errors
/// Returns an internal error if the period cannot be resolved (calendar
/// arithmetic out of range; unreachable for realistic timestamps).
pub fn aggregate(samples: &[BodySample], request: &ReportRequest) -> AppResult<BodyReport> {
    let period = ReportPeriod::resolve(request.granularity, request.reference)?;

    let mut current: Vec<&BodySample> = samples
        .iter()
        .filter(|s| period.contains(s.recorded_at))
        .collect();
    current.sort_by_key(|s| s.recorded_at);

    let previous: Vec<&BodySample> = samples
        .iter()
        .filter(|s| period.previous_contains(s.recorded_at))
        .collect();

    let current_stats = PeriodStats::over(&current);
    let previous_stats = PeriodStats::over(&previous);
    let change = if current_stats.count > 0 && previous_stats.count > 0 {
        crate::round2(current_stats.mean - previous_stats.mean)
    } else {
        0.0
    };

    let span = period.granularity.bucket_span();
    let buckets: Vec<TrendBucket> = period
        .bucket_starts()
        .into_iter()
        .map(|start| {
            let mut count = 0_usize;
            let mut bmi_sum = 0.0;
            let mut weight_sum = 0.0;
            for sample in &current {
                if span.matches(start, sample.recorded_at) {
                    count += 1;
                    bmi_sum += sample.bmi;
                    weight_sum += sample.weight_kg;
                }
            }

            let (mean_bmi, mean_weight) = if count == 0 {
                (None, None)
            } else {
                (
                    Some(crate::round2(bmi_sum / count as f64)),
                    Some(crate::round2(weight_sum / count as f64)),
                )
            };

            TrendBucket {
                start,
                label: span.label_for(start),
                mean_bmi,
                mean_weight,
                count,
            }
        })
        .collect();

    let mut categories: HashMap<BmiCategory, usize> = HashMap::new();
    for sample in &current {
        *categories.entry(sample.category).or_insert(0) += 1;
    }

    debug!(
        granularity = %period.granularity,
        current_samples = current_stats.count,
        previous_samples = previous_stats.count,
        buckets = buckets.len(),
        "period report aggregated"
    );

    Ok(BodyReport {
        period: PeriodSummary {
            granularity: period.granularity,
            label: period.label(),
            start: period.start,
            end: period.end,
        },
        current: current_stats,
        previous: previous_stats,
        change,
        buckets,
        categories,
        samples: current.into_iter().cloned().collect(),
    })
}
