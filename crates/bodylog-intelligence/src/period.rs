// ABOUTME: Calendar period resolution and bucket grid generation
// ABOUTME: Maps a granularity and reference instant to aligned reporting windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar-aware reporting windows.
//!
//! A [`ReportPeriod`] is the concrete interval containing a reference
//! instant at a chosen [`Granularity`], together with the immediately
//! preceding interval of the same calendar kind. All arithmetic is done on
//! calendar components (days, ISO weeks, months, years), never on fixed
//! millisecond offsets, so month and year length variability and leap
//! years are handled exactly.
//!
//! All instants are UTC; the service stores and reports in a single zone.

use bodylog_core::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting period size selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One calendar day, hourly buckets
    Daily,
    /// One ISO week (Monday start), daily buckets
    Weekly,
    /// One calendar month, daily buckets
    Monthly,
    /// One calendar year, monthly buckets
    Yearly,
}

impl Granularity {
    /// Sub-granularity used for the bucket grid of this period size.
    #[must_use]
    pub const fn bucket_span(self) -> BucketSpan {
        match self {
            Self::Daily => BucketSpan::Hour,
            Self::Weekly | Self::Monthly => BucketSpan::Day,
            Self::Yearly => BucketSpan::Month,
        }
    }

    /// Stable string form, matching the wire parameter values
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(AppError::invalid_input(format!(
                "unknown granularity '{other}', expected daily|weekly|monthly|yearly"
            ))),
        }
    }
}

/// Width of one bucket in the report time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketSpan {
    /// One clock hour of one calendar day
    Hour,
    /// One calendar day
    Day,
    /// One calendar month
    Month,
}

impl BucketSpan {
    /// Whether `at` falls inside the bucket starting at `start`.
    ///
    /// Membership is by calendar component equality, mirroring how the
    /// grid itself is generated.
    #[must_use]
    pub fn matches(self, start: DateTime<Utc>, at: DateTime<Utc>) -> bool {
        match self {
            Self::Hour => start.date_naive() == at.date_naive() && start.hour() == at.hour(),
            Self::Day => start.date_naive() == at.date_naive(),
            Self::Month => start.year() == at.year() && start.month() == at.month(),
        }
    }

    /// Positional label for the bucket starting at `start`
    /// (`"14:00"`, `"07/08"`, `"Aug"`).
    #[must_use]
    pub fn label_for(self, start: DateTime<Utc>) -> String {
        match self {
            Self::Hour => start.format("%H:00"),
            Self::Day => start.format("%d/%m"),
            Self::Month => start.format("%b"),
        }
        .to_string()
    }
}

/// Concrete calendar window resolved from a granularity and a reference
/// instant, plus the immediately preceding window of equal calendar kind.
///
/// Both windows are closed intervals: `start` is the first millisecond of
/// the first day and `end` the last millisecond of the last day.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportPeriod {
    /// Period size this window was resolved at
    pub granularity: Granularity,
    /// First instant of the current window
    pub start: DateTime<Utc>,
    /// Last instant of the current window
    pub end: DateTime<Utc>,
    /// First instant of the preceding window
    pub previous_start: DateTime<Utc>,
    /// Last instant of the preceding window
    pub previous_end: DateTime<Utc>,
}

impl ReportPeriod {
    /// Resolve the calendar window containing `reference`.
    ///
    /// # Errors
    /// Returns an internal error if calendar arithmetic leaves the
    /// representable date range; unreachable for realistic timestamps.
    pub fn resolve(granularity: Granularity, reference: DateTime<Utc>) -> AppResult<Self> {
        let date = reference.date_naive();

        let (first, last, previous_first, previous_last) = match granularity {
            Granularity::Daily => {
                let previous = date
                    .checked_sub_days(Days::new(1))
                    .ok_or_else(|| out_of_range(date))?;
                (date, date, previous, previous)
            }
            Granularity::Weekly => {
                let week = date.week(Weekday::Mon);
                let previous_anchor = date
                    .checked_sub_days(Days::new(7))
                    .ok_or_else(|| out_of_range(date))?;
                let previous = previous_anchor.week(Weekday::Mon);
                (
                    week.first_day(),
                    week.last_day(),
                    previous.first_day(),
                    previous.last_day(),
                )
            }
            Granularity::Monthly => {
                let first = date.with_day(1).ok_or_else(|| out_of_range(date))?;
                let previous_first = first
                    .checked_sub_months(Months::new(1))
                    .ok_or_else(|| out_of_range(date))?;
                (
                    first,
                    last_day_of_month(first)?,
                    previous_first,
                    last_day_of_month(previous_first)?,
                )
            }
            Granularity::Yearly => {
                let first = NaiveDate::from_ymd_opt(date.year(), 1, 1)
                    .ok_or_else(|| out_of_range(date))?;
                let last = NaiveDate::from_ymd_opt(date.year(), 12, 31)
                    .ok_or_else(|| out_of_range(date))?;
                let previous_first = NaiveDate::from_ymd_opt(date.year() - 1, 1, 1)
                    .ok_or_else(|| out_of_range(date))?;
                let previous_last = NaiveDate::from_ymd_opt(date.year() - 1, 12, 31)
                    .ok_or_else(|| out_of_range(date))?;
                (first, last, previous_first, previous_last)
            }
        };

        Ok(Self {
            granularity,
            start: day_start(first)?,
            end: day_end(last)?,
            previous_start: day_start(previous_first)?,
            previous_end: day_end(previous_last)?,
        })
    }

    /// Whether `at` falls inside the current window (both bounds inclusive)
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whether `at` falls inside the preceding window (both bounds inclusive)
    #[must_use]
    pub fn previous_contains(&self, at: DateTime<Utc>) -> bool {
        self.previous_start <= at && at <= self.previous_end
    }

    /// Every bucket start from period start to period end inclusive,
    /// stepped at the period's sub-granularity.
    ///
    /// The grid is complete regardless of data sparsity: a daily period
    /// always yields 24 starts, a 31-day month 31, a year 12.
    #[must_use]
    pub fn bucket_starts(&self) -> Vec<DateTime<Utc>> {
        let mut starts = Vec::new();

        match self.granularity.bucket_span() {
            BucketSpan::Hour => {
                let mut t = self.start;
                while t <= self.end {
                    starts.push(t);
                    t += Duration::hours(1);
                }
            }
            BucketSpan::Day => {
                let mut date = self.start.date_naive();
                let last = self.end.date_naive();
                while date <= last {
                    match day_start(date) {
                        Ok(t) => starts.push(t),
                        Err(_) => break,
                    }
                    match date.checked_add_days(Days::new(1)) {
                        Some(next) => date = next,
                        None => break,
                    }
                }
            }
            BucketSpan::Month => {
                let mut date = self.start.date_naive();
                let last = self.end.date_naive();
                while date <= last {
                    match day_start(date) {
                        Ok(t) => starts.push(t),
                        Err(_) => break,
                    }
                    match date.checked_add_months(Months::new(1)) {
                        Some(next) => date = next,
                        None => break,
                    }
                }
            }
        }

        starts
    }

    /// Human label for the window, in the shape the reports page expects
    /// (`"7 August 2026"`, `"3 Aug - 9 Aug 2026"`, `"August 2026"`, `"2026"`).
    #[must_use]
    pub fn label(&self) -> String {
        match self.granularity {
            Granularity::Daily => self.start.format("%-d %B %Y").to_string(),
            Granularity::Weekly => format!(
                "{} - {}",
                self.start.format("%-d %b"),
                self.end.format("%-d %b %Y")
            ),
            Granularity::Monthly => self.start.format("%B %Y").to_string(),
            Granularity::Yearly => self.start.format("%Y").to_string(),
        }
    }
}

/// First instant of the given day
fn day_start(date: NaiveDate) -> AppResult<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| out_of_range(date))
}

/// Last instant of the given day (millisecond resolution)
fn day_end(date: NaiveDate) -> AppResult<DateTime<Utc>> {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| out_of_range(date))
}

/// Last day of the month that `first` (the month's first day) belongs to
fn last_day_of_month(first: NaiveDate) -> AppResult<NaiveDate> {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .ok_or_else(|| out_of_range(first))
}

fn out_of_range(date: NaiveDate) -> AppError {
    AppError::internal(format!("calendar arithmetic out of range near {date}"))
}
