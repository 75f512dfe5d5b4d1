// ABOUTME: Core types and constants for the bodylog body-metric service
// ABOUTME: Foundation crate with domain models, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Bodylog Core
//!
//! Foundation crate providing shared types and constants for the bodylog
//! body-metric tracking service. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Domain types (`BodySample`, `BmiCategory`)
//! - **constants**: Application-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`BodySample`, `BmiCategory`)
pub mod models;
