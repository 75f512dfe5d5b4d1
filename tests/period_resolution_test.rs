// ABOUTME: Tests for calendar period resolution and bucket grid generation
// ABOUTME: Covers window boundaries, previous windows, and grid lengths
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Tests for period resolution: window boundaries per granularity, the
//! preceding window under variable month/year lengths, and the complete
//! bucket grid.

use bodylog::intelligence::{Granularity, ReportPeriod};
use chrono::{DateTime, TimeZone, Utc};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

#[test]
fn daily_window_spans_the_calendar_day() {
    let period = ReportPeriod::resolve(Granularity::Daily, utc(2026, 8, 7, 14, 32, 0)).unwrap();

    assert_eq!(period.start, utc(2026, 8, 7, 0, 0, 0));
    assert_eq!(period.end.to_rfc3339(), "2026-08-07T23:59:59.999+00:00");
    assert_eq!(period.previous_start, utc(2026, 8, 6, 0, 0, 0));
    assert_eq!(
        period.previous_end.to_rfc3339(),
        "2026-08-06T23:59:59.999+00:00"
    );
}

#[test]
fn weekly_window_is_iso_week_starting_monday() {
    // 2026-08-07 is a Friday; its ISO week runs Mon 03 .. Sun 09
    let period = ReportPeriod::resolve(Granularity::Weekly, utc(2026, 8, 7, 12, 0, 0)).unwrap();

    assert_eq!(period.start, utc(2026, 8, 3, 0, 0, 0));
    assert_eq!(period.end.date_naive().to_string(), "2026-08-09");
    assert_eq!(period.previous_start, utc(2026, 7, 27, 0, 0, 0));
    assert_eq!(period.previous_end.date_naive().to_string(), "2026-08-02");
}

#[test]
fn weekly_window_on_a_monday_starts_that_day() {
    let period = ReportPeriod::resolve(Granularity::Weekly, utc(2026, 8, 3, 0, 0, 0)).unwrap();
    assert_eq!(period.start, utc(2026, 8, 3, 0, 0, 0));
    assert_eq!(period.end.date_naive().to_string(), "2026-08-09");
}

#[test]
fn monthly_window_honors_variable_month_lengths() {
    // March reference: previous window is 28-day February, not "31 days ago"
    let period = ReportPeriod::resolve(Granularity::Monthly, utc(2026, 3, 31, 9, 0, 0)).unwrap();

    assert_eq!(period.start, utc(2026, 3, 1, 0, 0, 0));
    assert_eq!(period.end.date_naive().to_string(), "2026-03-31");
    assert_eq!(period.previous_start, utc(2026, 2, 1, 0, 0, 0));
    assert_eq!(period.previous_end.date_naive().to_string(), "2026-02-28");
}

#[test]
fn yearly_window_spans_the_calendar_year() {
    let period = ReportPeriod::resolve(Granularity::Yearly, utc(2026, 8, 7, 0, 0, 0)).unwrap();

    assert_eq!(period.start, utc(2026, 1, 1, 0, 0, 0));
    assert_eq!(period.end.date_naive().to_string(), "2026-12-31");
    assert_eq!(period.previous_start, utc(2025, 1, 1, 0, 0, 0));
    assert_eq!(period.previous_end.date_naive().to_string(), "2025-12-31");
}

#[test]
fn windows_are_inclusive_and_non_overlapping() {
    let period = ReportPeriod::resolve(Granularity::Daily, utc(2026, 8, 7, 12, 0, 0)).unwrap();

    assert!(period.contains(period.start));
    assert!(period.contains(period.end));
    assert!(!period.contains(period.previous_end));
    assert!(period.previous_contains(period.previous_end));
    assert!(!period.previous_contains(period.start));
}

#[test]
fn daily_grid_has_24_hourly_buckets() {
    let period = ReportPeriod::resolve(Granularity::Daily, utc(2026, 8, 7, 14, 32, 0)).unwrap();
    let starts = period.bucket_starts();

    assert_eq!(starts.len(), 24);
    assert_eq!(starts[0], utc(2026, 8, 7, 0, 0, 0));
    assert_eq!(starts[23], utc(2026, 8, 7, 23, 0, 0));
}

#[test]
fn weekly_grid_has_7_daily_buckets() {
    let period = ReportPeriod::resolve(Granularity::Weekly, utc(2026, 8, 7, 12, 0, 0)).unwrap();
    assert_eq!(period.bucket_starts().len(), 7);
}

#[test]
fn monthly_grid_length_matches_days_in_month() {
    let august = ReportPeriod::resolve(Granularity::Monthly, utc(2026, 8, 15, 0, 0, 0)).unwrap();
    assert_eq!(august.bucket_starts().len(), 31);

    let february = ReportPeriod::resolve(Granularity::Monthly, utc(2026, 2, 10, 0, 0, 0)).unwrap();
    assert_eq!(february.bucket_starts().len(), 28);

    let leap_february =
        ReportPeriod::resolve(Granularity::Monthly, utc(2024, 2, 10, 0, 0, 0)).unwrap();
    assert_eq!(leap_february.bucket_starts().len(), 29);
}

#[test]
fn yearly_grid_has_12_monthly_buckets() {
    let period = ReportPeriod::resolve(Granularity::Yearly, utc(2026, 8, 7, 0, 0, 0)).unwrap();
    let starts = period.bucket_starts();

    assert_eq!(starts.len(), 12);
    assert_eq!(starts[0], utc(2026, 1, 1, 0, 0, 0));
    assert_eq!(starts[11], utc(2026, 12, 1, 0, 0, 0));
}

#[test]
fn period_labels_follow_the_reports_page_shapes() {
    let daily = ReportPeriod::resolve(Granularity::Daily, utc(2026, 8, 7, 12, 0, 0)).unwrap();
    assert_eq!(daily.label(), "7 August 2026");

    let weekly = ReportPeriod::resolve(Granularity::Weekly, utc(2026, 8, 7, 12, 0, 0)).unwrap();
    assert_eq!(weekly.label(), "3 Aug - 9 Aug 2026");

    let monthly = ReportPeriod::resolve(Granularity::Monthly, utc(2026, 8, 7, 12, 0, 0)).unwrap();
    assert_eq!(monthly.label(), "August 2026");

    let yearly = ReportPeriod::resolve(Granularity::Yearly, utc(2026, 8, 7, 12, 0, 0)).unwrap();
    assert_eq!(yearly.label(), "2026");
}

#[test]
fn granularity_parses_wire_values() {
    assert_eq!("daily".parse::<Granularity>().unwrap(), Granularity::Daily);
    assert_eq!(
        "weekly".parse::<Granularity>().unwrap(),
        Granularity::Weekly
    );
    assert_eq!(
        "monthly".parse::<Granularity>().unwrap(),
        Granularity::Monthly
    );
    assert_eq!(
        "yearly".parse::<Granularity>().unwrap(),
        Granularity::Yearly
    );
    assert!("hourly".parse::<Granularity>().is_err());
    assert!("Daily".parse::<Granularity>().is_err());
}
