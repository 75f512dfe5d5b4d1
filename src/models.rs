// ABOUTME: Core data model re-exports from the bodylog-core crate
// ABOUTME: Preserves crate-local import paths for domain types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Domain types re-exported from `bodylog-core`.

pub use bodylog_core::models::{BmiCategory, BodySample};
