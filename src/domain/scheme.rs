// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Scheme Value Object
//!
//! The protocol identifiers a Neo4j driver accepts in a connection URI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Scheme parsing error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unsupported connection scheme: {0}")]
pub struct SchemeError(pub String);

/// Supported connection scheme
///
/// - `neo4j*` schemes use cluster routing, `bolt*` connect to a single server
/// - `+s` requires a certificate signed by a trusted authority
/// - `+ssc` encrypts but accepts self-signed certificates
///
/// # Examples
///
/// ```rust
/// use cim_graph_connection::domain::Scheme;
///
/// let scheme: Scheme = "neo4j+s".parse().unwrap();
/// assert!(scheme.is_routing());
/// assert!(scheme.is_encrypted());
/// assert!("http".parse::<Scheme>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    #[serde(rename = "neo4j")]
    Neo4j,
    #[serde(rename = "neo4j+s")]
    Neo4jSecure,
    #[serde(rename = "neo4j+ssc")]
    Neo4jSelfSigned,
    #[serde(rename = "bolt")]
    Bolt,
    #[serde(rename = "bolt+s")]
    BoltSecure,
    #[serde(rename = "bolt+ssc")]
    BoltSelfSigned,
}

impl Scheme {
    /// All schemes, in the order a protocol picker lists them
    pub const ALL: [Scheme; 6] = [
        Scheme::Neo4j,
        Scheme::Neo4jSecure,
        Scheme::Neo4jSelfSigned,
        Scheme::Bolt,
        Scheme::BoltSecure,
        Scheme::BoltSelfSigned,
    ];

    /// Identifier as it appears in a connection URI
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Neo4j => "neo4j",
            Scheme::Neo4jSecure => "neo4j+s",
            Scheme::Neo4jSelfSigned => "neo4j+ssc",
            Scheme::Bolt => "bolt",
            Scheme::BoltSecure => "bolt+s",
            Scheme::BoltSelfSigned => "bolt+ssc",
        }
    }

    /// Whether the driver performs cluster routing
    pub fn is_routing(&self) -> bool {
        matches!(
            self,
            Scheme::Neo4j | Scheme::Neo4jSecure | Scheme::Neo4jSelfSigned
        )
    }

    /// Whether the connection is TLS encrypted
    pub fn is_encrypted(&self) -> bool {
        !matches!(self, Scheme::Neo4j | Scheme::Bolt)
    }

    /// Whether self-signed certificates are accepted
    pub fn trusts_self_signed(&self) -> bool {
        matches!(self, Scheme::Neo4jSelfSigned | Scheme::BoltSelfSigned)
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::Neo4jSecure
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str() == s)
            .ok_or_else(|| SchemeError(s.to_string()))
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
