// ABOUTME: Main library entry point for the bodylog body-metric service
// ABOUTME: Wires HTTP routes, persistence, and the aggregation engine together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Bodylog
//!
//! A body-metric tracking service: users log weight/height measurements,
//! each measurement is classified into a BMI band at write time, and
//! reports over calendar periods (daily/weekly/monthly/yearly) are served
//! with gap-filled time series, summary statistics, and a category
//! histogram.
//!
//! ## Architecture
//!
//! The service follows a modular workspace architecture:
//! - **bodylog-core**: shared models, errors, and constants
//! - **bodylog-intelligence**: the pure classification and report engine
//! - this crate: the HTTP surface, validation boundary, and persistence
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodylog::config::ServerConfig;
//! use bodylog::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("bodylog configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// SQLite persistence for body-metric records
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Classification and period-report engine
pub mod intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Shared server state handed to route handlers
pub mod resources;

/// HTTP routes organized by domain
pub mod routes;
