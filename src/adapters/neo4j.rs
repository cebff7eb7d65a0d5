// Copyright (c) 2025 - Cowboy AI, Inc.

//! Neo4j Connector
//!
//! Opens a `neo4rs` graph for the resolved target and runs `RETURN 1` against
//! the configured database to prove the server is reachable and the
//! credentials are accepted.
//!
//! # Example
//!
//! ```rust,no_run
//! use cim_graph_connection::adapters::Neo4jConnector;
//! use cim_graph_connection::{ConnectionConfigResolver, ConnectionStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (status_tx, _status_rx) = tokio::sync::watch::channel(ConnectionStatus::disconnected());
//!     let resolver = ConnectionConfigResolver::new(Neo4jConnector::default(), status_tx);
//!
//!     resolver.ingest_pasted_uri("bolt://localhost:7687");
//!     let outcome = resolver.submit().await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Query};
use std::time::Duration;
use tracing::debug;

use crate::connector::{ConnectionTarget, Connector};
use crate::errors::{ConnectionError, ConnectionResult};

/// Connector backed by the `neo4rs` driver
#[derive(Debug, Clone)]
pub struct Neo4jConnector {
    /// Upper bound on connect plus verification query
    pub connect_timeout: Duration,
}

impl Default for Neo4jConnector {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl Neo4jConnector {
    pub fn new(connect_timeout: Duration) -> Self {
        Self { connect_timeout }
    }

    async fn verify(&self, target: &ConnectionTarget) -> ConnectionResult<()> {
        let config = ConfigBuilder::default()
            .uri(target.uri.as_str())
            .user(target.username.as_str())
            .password(target.password.as_str())
            .db(target.database.as_str())
            .build()?;

        let graph = Graph::connect(config).await?;
        graph.run(Query::new("RETURN 1".to_string())).await?;

        debug!("Neo4j verification query passed on {}", target.database);
        Ok(())
    }
}

#[async_trait]
impl Connector for Neo4jConnector {
    async fn connect(&self, target: &ConnectionTarget) -> ConnectionResult<()> {
        tokio::time::timeout(self.connect_timeout, self.verify(target))
            .await
            .map_err(|_| {
                ConnectionError::ConnectionRejected(format!(
                    "No answer from {} within {:?}",
                    target.uri, self.connect_timeout
                ))
            })?
    }
}
