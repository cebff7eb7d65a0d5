// Copyright (c) 2025 - Cowboy AI, Inc.
//! Environment overlay test
//!
//! Kept in its own test binary: it mutates process-wide `NEO4J_*` variables.

use cim_graph_connection::{ConnectionDescriptor, Scheme};
use pretty_assertions::assert_eq;

#[test]
fn test_env_overlay_follows_file_rules() {
    std::env::set_var("NEO4J_URI", "bolt+s://env-host:7700");
    std::env::set_var("NEO4J_USERNAME", "env-user");
    std::env::remove_var("NEO4J_PASSWORD");
    std::env::set_var("NEO4J_DATABASE", "");

    let fallback = ConnectionDescriptor::default().with_database("graphdb");
    let descriptor = ConnectionDescriptor::overlay_env(&fallback);

    assert_eq!(descriptor.scheme, Scheme::BoltSecure);
    assert_eq!(descriptor.host, "env-host");
    assert_eq!(descriptor.port, Some(7700));
    assert_eq!(descriptor.username, "env-user");
    assert_eq!(descriptor.password, fallback.password);
    assert_eq!(descriptor.database, None);
    assert_eq!(descriptor.database(), "neo4j");
}
