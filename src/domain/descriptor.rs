// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Descriptor
//!
//! The bundle of parameters a connector needs: scheme, host, optional port,
//! optional database and credentials. A descriptor is rebuilt from the current
//! field state on every submission and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::scheme::Scheme;
use crate::connector::ConnectionTarget;
use crate::errors::{ConnectionError, ConnectionResult};
use crate::resolver::config_file::{apply_entries, ConfigKey};
use crate::resolver::uri::{build_connection_string, parse_port};

/// Database used when none is configured
pub const DEFAULT_DATABASE: &str = "neo4j";

/// Bolt listener port
pub const DEFAULT_PORT: u16 = 7687;

/// Validated connection parameters
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// Protocol identifier
    pub scheme: Scheme,

    /// Host name or address, possibly with an embedded `:port`
    pub host: String,

    /// Port appended when the host carries none
    pub port: Option<u16>,

    /// Database name (defaults to "neo4j" if not set)
    pub database: Option<String>,

    /// Username for authentication
    pub username: String,

    /// Password for authentication
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl ConnectionDescriptor {
    /// Create a descriptor for a host with no port, database or credentials
    pub fn new(scheme: Scheme, host: impl Into<String>) -> Self {
        Self {
            scheme,
            host: host.into(),
            port: None,
            database: None,
            username: String::new(),
            password: String::new(),
        }
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set username and password
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Get the database name (defaults to "neo4j" if unset or empty)
    pub fn database(&self) -> &str {
        match self.database.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_DATABASE,
        }
    }

    /// `<scheme>://<host>[:<port>]`
    pub fn connection_string(&self) -> String {
        build_connection_string(self)
    }

    /// Whether the descriptor can be handed to a connector
    pub fn is_submittable(&self) -> bool {
        !self.host.trim().is_empty()
    }

    /// Parameters for a connector call
    pub fn target(&self) -> ConnectionTarget {
        ConnectionTarget {
            uri: self.connection_string(),
            username: self.username.clone(),
            password: self.password.clone(),
            database: self.database().to_string(),
        }
    }

    /// Apply a single manual field edit
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Scheme(scheme) => self.scheme = scheme,
            FieldUpdate::Host(host) => self.host = host,
            FieldUpdate::Port(port) => self.port = port,
            FieldUpdate::Database(database) => self.database = database,
            FieldUpdate::Username(username) => self.username = username,
            FieldUpdate::Password(password) => self.password = password,
        }
    }

    /// Overlay `NEO4J_*` variables from the process environment
    ///
    /// Uses the same rules as an uploaded config file: `NEO4J_URI` goes through
    /// URI parsing, the other keys overwrite their field, unset keys keep the
    /// fallback value.
    pub fn overlay_env(fallback: &ConnectionDescriptor) -> ConnectionDescriptor {
        let entries: Vec<(ConfigKey, String)> = ConfigKey::ALL
            .into_iter()
            .filter_map(|key| std::env::var(key.as_str()).ok().map(|value| (key, value)))
            .collect();

        apply_entries(
            fallback,
            entries.iter().map(|(key, value)| (*key, value.as_str())),
        )
    }
}

impl Default for ConnectionDescriptor {
    fn default() -> Self {
        Self {
            scheme: Scheme::Neo4jSecure,
            host: "localhost".to_string(),
            port: Some(DEFAULT_PORT),
            database: Some(DEFAULT_DATABASE.to_string()),
            username: "neo4j".to_string(),
            password: "password".to_string(),
        }
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("scheme", &self.scheme)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Editable descriptor field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorField {
    Scheme,
    Host,
    Port,
    Database,
    Username,
    Password,
}

impl FromStr for DescriptorField {
    type Err = ConnectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheme" | "protocol" => Ok(DescriptorField::Scheme),
            "host" | "uri" => Ok(DescriptorField::Host),
            "port" => Ok(DescriptorField::Port),
            "database" => Ok(DescriptorField::Database),
            "username" => Ok(DescriptorField::Username),
            "password" => Ok(DescriptorField::Password),
            other => Err(ConnectionError::UnknownField(other.to_string())),
        }
    }
}

/// A manual edit of one descriptor field
#[derive(Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Scheme(Scheme),
    Host(String),
    Port(Option<u16>),
    Database(Option<String>),
    Username(String),
    Password(String),
}

impl FieldUpdate {
    /// Convert a raw text-input value into a typed update
    ///
    /// An empty port or database clears the field so the default applies.
    pub fn parse(field: DescriptorField, value: &str) -> ConnectionResult<Self> {
        let invalid = || ConnectionError::InvalidFieldValue {
            field: format!("{:?}", field).to_lowercase(),
            value: value.to_string(),
        };

        Ok(match field {
            DescriptorField::Scheme => FieldUpdate::Scheme(value.parse().map_err(|_| invalid())?),
            DescriptorField::Host => FieldUpdate::Host(value.to_string()),
            DescriptorField::Port if value.trim().is_empty() => FieldUpdate::Port(None),
            DescriptorField::Port => {
                FieldUpdate::Port(Some(parse_port(value.trim()).ok_or_else(invalid)?))
            }
            DescriptorField::Database if value.is_empty() => FieldUpdate::Database(None),
            DescriptorField::Database => FieldUpdate::Database(Some(value.to_string())),
            DescriptorField::Username => FieldUpdate::Username(value.to_string()),
            DescriptorField::Password => FieldUpdate::Password(value.to_string()),
        })
    }

    /// Field this update targets
    pub fn field(&self) -> DescriptorField {
        match self {
            FieldUpdate::Scheme(_) => DescriptorField::Scheme,
            FieldUpdate::Host(_) => DescriptorField::Host,
            FieldUpdate::Port(_) => DescriptorField::Port,
            FieldUpdate::Database(_) => DescriptorField::Database,
            FieldUpdate::Username(_) => DescriptorField::Username,
            FieldUpdate::Password(_) => DescriptorField::Password,
        }
    }
}

impl fmt::Debug for FieldUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldUpdate::Password(_) => f.write_str("Password(<redacted>)"),
            FieldUpdate::Scheme(scheme) => write!(f, "Scheme({})", scheme),
            FieldUpdate::Host(host) => write!(f, "Host({:?})", host),
            FieldUpdate::Port(port) => write!(f, "Port({:?})", port),
            FieldUpdate::Database(database) => write!(f, "Database({:?})", database),
            FieldUpdate::Username(username) => write!(f, "Username({:?})", username),
        }
    }
}
