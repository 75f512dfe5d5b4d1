// ABOUTME: Environment-based server configuration
// ABOUTME: Reads HTTP port and database URL with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-only server configuration.
//!
//! The service is configured exclusively through environment variables,
//! with CLI flags in the binaries able to override individual values.

use crate::errors::{AppError, AppResult};
use std::env;

/// Default HTTP port when `HTTP_PORT` is not set
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default SQLite database URL when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/bodylog.db";

/// Runtime configuration for the server and auxiliary binaries
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to
    pub http_port: u16,
    /// SQLite connection URL
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns a configuration error if `HTTP_PORT` is set but not a
    /// valid port number.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| AppError::config(format!("invalid HTTP_PORT '{raw}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());

        Ok(Self {
            http_port,
            database_url,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} database_url={}",
            self.http_port, self.database_url
        )
    }
}
