// ABOUTME: Intelligence module re-exports from the bodylog-intelligence crate
// ABOUTME: Preserves crate-local import paths while delegating to the engine crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Intelligence Module
//!
//! The classification and period-report engine, re-exported from the
//! `bodylog-intelligence` crate.

pub use bodylog_intelligence::*;

// Re-export submodules for path-based access
// (e.g., crate::intelligence::period::ReportPeriod)
pub use bodylog_intelligence::{classifier, period, report};
