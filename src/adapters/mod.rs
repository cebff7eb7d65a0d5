// Copyright (c) 2025 - Cowboy AI, Inc.

//! Connector implementations
//!
//! Concrete implementations of the [`Connector`](crate::connector::Connector)
//! trait for real graph databases.

#[cfg(feature = "neo4j")]
pub mod neo4j;

#[cfg(feature = "neo4j")]
pub use neo4j::Neo4jConnector;
