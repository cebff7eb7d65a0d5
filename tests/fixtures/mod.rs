// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-graph-connection
//!
//! Connector and file reader stubs plus deterministic descriptors. Stubs never
//! touch the network or the filesystem.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Notify};

use cim_graph_connection::{
    ConnectionConfigResolver, ConnectionDescriptor, ConnectionError, ConnectionResult,
    ConnectionStatus, ConnectionTarget, Connector, FileReader, Scheme,
};

/// Credentials file as Neo4j hands it out
pub const CREDENTIALS_FILE: &str = "NEO4J_URI=neo4j+s://dbhost:7687\nNEO4J_USERNAME=alice\nNEO4J_PASSWORD=secret\nNEO4J_DATABASE=graphdb";

/// Descriptor a session starts from in most tests
pub fn local_descriptor() -> ConnectionDescriptor {
    ConnectionDescriptor::new(Scheme::Bolt, "localhost")
        .with_port(7687)
        .with_credentials("neo4j", "password")
}

/// Connector that answers immediately with a fixed result
#[derive(Debug, Default)]
pub struct StaticConnector {
    succeed: bool,
    calls: AtomicUsize,
    last_uri: std::sync::Mutex<Option<String>>,
}

impl StaticConnector {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_uri(&self) -> Option<String> {
        self.last_uri.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for StaticConnector {
    async fn connect(&self, target: &ConnectionTarget) -> ConnectionResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_uri.lock().unwrap() = Some(target.uri.clone());

        if self.succeed {
            Ok(())
        } else {
            Err(ConnectionError::ConnectionRejected(
                "The client is unauthorized due to authentication failure.".to_string(),
            ))
        }
    }
}

/// Connector that blocks every call until released
///
/// Each `release` lets exactly one pending (or future) call finish.
#[derive(Debug, Default)]
pub struct GatedConnector {
    succeed: bool,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedConnector {
    pub fn succeeding() -> Self {
        Self {
            succeed: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for GatedConnector {
    async fn connect(&self, _target: &ConnectionTarget) -> ConnectionResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;

        if self.succeed {
            Ok(())
        } else {
            Err(ConnectionError::ConnectionRejected("connection refused".to_string()))
        }
    }
}

/// File reader that always fails
pub struct UnreadableFile;

#[async_trait]
impl FileReader for UnreadableFile {
    async fn read_to_string(&self, path: &Path) -> ConnectionResult<String> {
        Err(ConnectionError::FileUnreadable {
            path: path.display().to_string(),
            reason: "permission denied".to_string(),
        })
    }
}

/// File reader serving fixed text
pub struct InMemoryFile(pub &'static str);

#[async_trait]
impl FileReader for InMemoryFile {
    async fn read_to_string(&self, _path: &Path) -> ConnectionResult<String> {
        Ok(self.0.to_string())
    }
}

/// Resolver over `connector`, starting from [`local_descriptor`]
pub fn resolver_with<C: Connector>(
    connector: C,
) -> (ConnectionConfigResolver<C>, watch::Receiver<ConnectionStatus>) {
    let (tx, rx) = watch::channel(ConnectionStatus::disconnected());
    (
        ConnectionConfigResolver::with_descriptor(connector, tx, local_descriptor()),
        rx,
    )
}

/// Shared gated connector and a resolver using it
pub fn gated_resolver(
    connector: GatedConnector,
) -> (
    Arc<GatedConnector>,
    ConnectionConfigResolver<Arc<GatedConnector>>,
    watch::Receiver<ConnectionStatus>,
) {
    let connector = Arc::new(connector);
    let (resolver, rx) = resolver_with(connector.clone());
    (connector, resolver, rx)
}
