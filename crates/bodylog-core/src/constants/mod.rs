// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Service identifiers and record listing defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Application Constants
//!
//! Shared constant values referenced from multiple crates and binaries.

/// Service identifiers used in logs and health responses
pub mod service_names {
    /// Canonical name of the HTTP server binary
    pub const BODYLOG_SERVER: &str = "bodylog-server";
}

/// Defaults for record listing endpoints
pub mod pagination {
    /// Page size applied when a listing request omits `limit`
    pub const DEFAULT_RECORD_PAGE_SIZE: i64 = 50;
}
