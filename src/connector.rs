// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connector capability
//!
//! The resolver never opens a connection itself. It hands a
//! [`ConnectionTarget`] to an injected [`Connector`] and only looks at whether
//! the call succeeded.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::errors::ConnectionResult;

/// Everything a connector needs for one attempt
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    /// `<scheme>://<host>[:<port>]`
    pub uri: String,

    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,

    /// Database to verify against
    pub database: String,
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionTarget")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// Attempts a real connection and reports reachability
///
/// Implementations may be slow and may fail for any reason. The error is
/// only logged by the resolver, never classified.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Connect and authenticate against `target`
    async fn connect(&self, target: &ConnectionTarget) -> ConnectionResult<()>;
}

#[async_trait]
impl<C: Connector + ?Sized> Connector for Arc<C> {
    async fn connect(&self, target: &ConnectionTarget) -> ConnectionResult<()> {
        (**self).connect(target).await
    }
}
