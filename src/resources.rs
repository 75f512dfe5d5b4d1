// ABOUTME: Shared server state handed to route handlers
// ABOUTME: Bundles the database handle and runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Long-lived resources shared across request handlers.

use crate::config::ServerConfig;
use crate::database::Database;

/// Resources constructed once at startup and shared by all handlers
/// behind an `Arc`.
#[derive(Clone)]
pub struct ServerResources {
    /// Persistence handle (internally pooled)
    pub database: Database,
    /// Runtime configuration snapshot
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the given resources
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}
