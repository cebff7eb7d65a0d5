// Copyright (c) 2025 - Cowboy AI, Inc.
//! Neo4j Connection Check
//!
//! Resolves a connection from `NEO4J_*` environment variables and an optional
//! credentials file, submits it, and prints the resulting status as JSON.
//!
//! Run with: cargo run --bin neo4j-connect --features neo4j -- [credentials.env]
//!
//! Environment:
//! - NEO4J_URI, NEO4J_USERNAME, NEO4J_PASSWORD, NEO4J_DATABASE
//! - NEO4J_CONNECT_TIMEOUT_SECS (default 10)
//! - RUST_LOG for log filtering

use anyhow::{bail, Context, Result};
use cim_graph_connection::{
    adapters::Neo4jConnector, ConnectionConfigResolver, ConnectionDescriptor, ConnectionError,
    ConnectionOutcome, ConnectionStatus, FsFileReader,
};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

fn connect_timeout() -> Result<Duration, ConnectionError> {
    match std::env::var("NEO4J_CONNECT_TIMEOUT_SECS") {
        Ok(raw) => raw.parse().map(Duration::from_secs).map_err(|_| {
            ConnectionError::Configuration(format!(
                "NEO4J_CONNECT_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                raw
            ))
        }),
        Err(_) => Ok(Neo4jConnector::default().connect_timeout),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let descriptor = ConnectionDescriptor::overlay_env(&ConnectionDescriptor::default());
    let connector = Neo4jConnector::new(connect_timeout()?);

    let (status_tx, status_rx) = watch::channel(ConnectionStatus::disconnected());
    let resolver = ConnectionConfigResolver::with_descriptor(connector, status_tx, descriptor);

    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        resolver
            .ingest_file(&FsFileReader::default(), &path)
            .await
            .with_context(|| format!("Failed to load credentials from {}", path.display()))?;
        info!("Loaded credentials from {}", path.display());
    }

    let outcome = resolver.submit().await.context("Submission was not applied")?;

    let status = status_rx.borrow().clone();
    println!("{}", serde_json::to_string_pretty(&status)?);

    match outcome {
        ConnectionOutcome::Success => {
            info!("Connected to {}", resolver.current_descriptor().connection_string());
            Ok(())
        }
        ConnectionOutcome::Failure(reason) => bail!("{} ({})", reason.user_message(), reason),
    }
}
