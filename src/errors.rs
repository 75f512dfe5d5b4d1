// ABOUTME: Error type re-exports from the bodylog-core crate
// ABOUTME: Preserves crate-local import paths for the unified error system
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unified error handling, re-exported from `bodylog-core`.

pub use bodylog_core::errors::{AppError, AppResult, ErrorCode};
