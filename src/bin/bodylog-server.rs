// ABOUTME: HTTP server binary for the bodylog body-metric service
// ABOUTME: Wires configuration, logging, persistence, and routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Bodylog Server Binary
//!
//! Starts the body-metric tracking service: record CRUD and period report
//! endpoints over a SQLite store.

use anyhow::Result;
use bodylog::{config::ServerConfig, database::Database, logging, resources::ServerResources, routes};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "bodylog-server")]
#[command(about = "Bodylog - body-metric tracking and period report API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting bodylog server");
    info!("{}", config.summary());

    let database = Database::new(&config.database_url).await?;
    info!("Database initialized: {}", config.database_url);

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", http_port)).await?;
    info!("Server listening on port {http_port}");

    axum::serve(listener, app).await?;

    Ok(())
}
