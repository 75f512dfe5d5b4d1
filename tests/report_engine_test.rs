// ABOUTME: Tests for period report aggregation
// ABOUTME: Covers statistics, gap-filled buckets, histogram, and comparisons
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Tests for the report engine: empty-input behavior, partitioning,
//! bucket membership, statistics, the change comparison, and the
//! null-bucket / omitted-histogram-entry asymmetry.

use bodylog::intelligence::{aggregate, classify, Granularity, ReportRequest};
use bodylog::models::{BmiCategory, BodySample};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Build a sample from raw measurements, deriving bmi/category the way the
/// record-write path does.
fn sample(user_id: Uuid, weight_kg: f64, height_cm: f64, recorded_at: DateTime<Utc>) -> BodySample {
    let assessment = classify(weight_kg, height_cm);
    BodySample {
        id: Uuid::new_v4(),
        user_id,
        weight_kg,
        height_cm,
        bmi: assessment.bmi,
        category: assessment.category,
        recorded_at,
        created_at: recorded_at,
    }
}

/// Build a sample with an explicit bmi, for tests pinning exact statistics.
fn sample_with_bmi(bmi: f64, recorded_at: DateTime<Utc>) -> BodySample {
    BodySample {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        weight_kg: 70.0,
        height_cm: 175.0,
        bmi,
        category: BmiCategory::Normal,
        recorded_at,
        created_at: recorded_at,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_input_yields_all_zero_report() {
    let request = ReportRequest {
        granularity: Granularity::Daily,
        reference: utc(2026, 8, 7, 12, 0, 0),
    };
    let report = aggregate(&[], &request).unwrap();

    assert_eq!(report.current.count, 0);
    assert_close(report.current.min, 0.0);
    assert_close(report.current.max, 0.0);
    assert_close(report.current.mean, 0.0);
    assert_eq!(report.previous.count, 0);
    assert_close(report.change, 0.0);
    assert!(report.categories.is_empty());
    assert!(report.samples.is_empty());
    assert_eq!(report.buckets.len(), 24);
    assert!(report
        .buckets
        .iter()
        .all(|b| b.mean_bmi.is_none() && b.mean_weight.is_none() && b.count == 0));
}

#[test]
fn single_sample_daily_report_fills_exactly_one_bucket() {
    let user = Uuid::new_v4();
    let samples = vec![sample(user, 70.0, 175.0, utc(2026, 8, 7, 14, 32, 0))];
    let request = ReportRequest {
        granularity: Granularity::Daily,
        reference: utc(2026, 8, 7, 9, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.buckets.len(), 24);
    let filled: Vec<_> = report.buckets.iter().filter(|b| b.count > 0).collect();
    assert_eq!(filled.len(), 1);
    assert_eq!(filled[0].label, "14:00");
    assert_eq!(filled[0].count, 1);
    assert_close(filled[0].mean_bmi.unwrap(), 22.86);
    assert_close(filled[0].mean_weight.unwrap(), 70.0);
    assert_eq!(
        report.buckets.iter().filter(|b| b.mean_bmi.is_none()).count(),
        23
    );
}

#[test]
fn weekly_change_compares_period_means() {
    // Previous ISO week (Jul 27 - Aug 2) mean 23.00, current week mean 24.50
    let samples = vec![
        sample_with_bmi(23.00, utc(2026, 7, 28, 8, 0, 0)),
        sample_with_bmi(24.00, utc(2026, 8, 4, 8, 0, 0)),
        sample_with_bmi(25.00, utc(2026, 8, 6, 8, 0, 0)),
    ];
    let request = ReportRequest {
        granularity: Granularity::Weekly,
        reference: utc(2026, 8, 7, 12, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.previous.count, 1);
    assert_close(report.previous.mean, 23.00);
    assert_eq!(report.current.count, 2);
    assert_close(report.current.mean, 24.50);
    assert_close(report.change, 1.50);
}

#[test]
fn change_is_zero_when_either_period_is_empty() {
    let samples = vec![sample_with_bmi(24.00, utc(2026, 8, 4, 8, 0, 0))];
    let request = ReportRequest {
        granularity: Granularity::Weekly,
        reference: utc(2026, 8, 7, 12, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.previous.count, 0);
    assert_eq!(report.current.count, 1);
    assert_close(report.change, 0.0);
}

#[test]
fn every_current_sample_lands_in_exactly_one_bucket() {
    let user = Uuid::new_v4();
    let samples = vec![
        sample(user, 70.0, 175.0, utc(2026, 8, 3, 0, 0, 0)), // first instant of window
        sample(user, 71.0, 175.0, utc(2026, 8, 5, 12, 30, 0)),
        sample(user, 72.0, 175.0, utc(2026, 8, 5, 18, 0, 0)),
        sample(user, 73.0, 175.0, utc(2026, 8, 9, 23, 59, 59)), // last second of window
        sample(user, 90.0, 175.0, utc(2026, 7, 30, 10, 0, 0)),  // previous window only
        sample(user, 95.0, 175.0, utc(2026, 8, 12, 10, 0, 0)),  // outside both windows
    ];
    let request = ReportRequest {
        granularity: Granularity::Weekly,
        reference: utc(2026, 8, 7, 12, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.current.count, 4);
    assert_eq!(report.previous.count, 1);

    let bucket_total: usize = report.buckets.iter().map(|b| b.count).sum();
    assert_eq!(bucket_total, report.current.count);

    // The out-of-window samples influence nothing
    assert_eq!(report.samples.len(), 4);
    assert!(report.samples.iter().all(|s| s.bmi < 25.0));
}

#[test]
fn current_samples_are_sorted_ascending_by_recorded_at() {
    let user = Uuid::new_v4();
    let samples = vec![
        sample(user, 72.0, 175.0, utc(2026, 8, 7, 20, 0, 0)),
        sample(user, 70.0, 175.0, utc(2026, 8, 7, 6, 0, 0)),
        sample(user, 71.0, 175.0, utc(2026, 8, 7, 12, 0, 0)),
    ];
    let request = ReportRequest {
        granularity: Granularity::Daily,
        reference: utc(2026, 8, 7, 0, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    let times: Vec<_> = report.samples.iter().map(|s| s.recorded_at).collect();
    let mut sorted = times.clone();
    sorted.sort();
    assert_eq!(times, sorted);
}

#[test]
fn histogram_omits_zero_count_categories() {
    let user = Uuid::new_v4();
    let samples = vec![
        sample(user, 70.0, 175.0, utc(2026, 8, 7, 8, 0, 0)),  // Normal
        sample(user, 72.0, 175.0, utc(2026, 8, 7, 12, 0, 0)), // Normal
        sample(user, 95.0, 175.0, utc(2026, 8, 7, 18, 0, 0)), // Obese (31.02)
    ];
    let request = ReportRequest {
        granularity: Granularity::Daily,
        reference: utc(2026, 8, 7, 0, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.categories.len(), 2);
    assert_eq!(report.categories[&BmiCategory::Normal], 2);
    assert_eq!(report.categories[&BmiCategory::Obese], 1);
    assert!(!report.categories.contains_key(&BmiCategory::Underweight));
    assert!(!report.categories.contains_key(&BmiCategory::Overweight));
}

#[test]
fn statistics_track_min_max_and_rounded_mean() {
    let samples = vec![
        sample_with_bmi(21.10, utc(2026, 8, 7, 8, 0, 0)),
        sample_with_bmi(22.20, utc(2026, 8, 7, 12, 0, 0)),
        sample_with_bmi(23.35, utc(2026, 8, 7, 18, 0, 0)),
    ];
    let request = ReportRequest {
        granularity: Granularity::Daily,
        reference: utc(2026, 8, 7, 0, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_close(report.current.min, 21.10);
    assert_close(report.current.max, 23.35);
    // (21.10 + 22.20 + 23.35) / 3 = 22.216... -> 22.22
    assert_close(report.current.mean, 22.22);
    assert_eq!(report.current.count, 3);
}

#[test]
fn monthly_buckets_group_by_calendar_day() {
    let user = Uuid::new_v4();
    let samples = vec![
        sample(user, 70.0, 175.0, utc(2026, 8, 5, 7, 0, 0)),
        sample(user, 72.0, 175.0, utc(2026, 8, 5, 21, 0, 0)),
        sample(user, 71.0, 175.0, utc(2026, 8, 20, 7, 0, 0)),
    ];
    let request = ReportRequest {
        granularity: Granularity::Monthly,
        reference: utc(2026, 8, 15, 0, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.buckets.len(), 31);
    assert_eq!(report.buckets[4].label, "05/08");
    assert_eq!(report.buckets[4].count, 2);
    assert_close(report.buckets[4].mean_weight.unwrap(), 71.0);
    assert_eq!(report.buckets[19].count, 1);
    assert_eq!(
        report.buckets.iter().filter(|b| b.count == 0).count(),
        29
    );
}

#[test]
fn yearly_buckets_group_by_calendar_month() {
    let user = Uuid::new_v4();
    let samples = vec![
        sample(user, 70.0, 175.0, utc(2026, 2, 10, 8, 0, 0)),
        sample(user, 71.0, 175.0, utc(2026, 2, 25, 8, 0, 0)),
        sample(user, 72.0, 175.0, utc(2026, 11, 1, 8, 0, 0)),
    ];
    let request = ReportRequest {
        granularity: Granularity::Yearly,
        reference: utc(2026, 6, 1, 0, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();

    assert_eq!(report.buckets.len(), 12);
    assert_eq!(report.buckets[1].label, "Feb");
    assert_eq!(report.buckets[1].count, 2);
    assert_eq!(report.buckets[10].label, "Nov");
    assert_eq!(report.buckets[10].count, 1);
}

#[test]
fn report_period_metadata_matches_request() {
    let request = ReportRequest {
        granularity: Granularity::Monthly,
        reference: utc(2026, 8, 15, 0, 0, 0),
    };
    let report = aggregate(&[], &request).unwrap();

    assert_eq!(report.period.granularity, Granularity::Monthly);
    assert_eq!(report.period.label, "August 2026");
    assert_eq!(report.period.start, utc(2026, 8, 1, 0, 0, 0));
    assert_eq!(report.period.end.date_naive().to_string(), "2026-08-31");
}

#[test]
fn report_serializes_with_null_buckets_and_string_category_keys() {
    let user = Uuid::new_v4();
    let samples = vec![sample(user, 70.0, 175.0, utc(2026, 8, 7, 14, 32, 0))];
    let request = ReportRequest {
        granularity: Granularity::Daily,
        reference: utc(2026, 8, 7, 0, 0, 0),
    };

    let report = aggregate(&samples, &request).unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["period"]["granularity"], "daily");
    assert_eq!(value["buckets"][0]["mean_bmi"], serde_json::Value::Null);
    assert_eq!(value["buckets"][14]["mean_bmi"], 22.86);
    assert_eq!(value["categories"]["Normal"], 1);
}
