// Copyright (c) 2025 - Cowboy AI, Inc.
//! Credentials file parsing
//!
//! Reads the `KEY=value` files Neo4j hands out when a database is created
//! (`NEO4J_URI`, `NEO4J_USERNAME`, `NEO4J_PASSWORD`, `NEO4J_DATABASE`).

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use super::uri::parse_uri;
use crate::domain::ConnectionDescriptor;

/// Key recognized in a credentials file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Uri,
    Username,
    Password,
    Database,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Uri,
        ConfigKey::Username,
        ConfigKey::Password,
        ConfigKey::Database,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Uri => "NEO4J_URI",
            ConfigKey::Username => "NEO4J_USERNAME",
            ConfigKey::Password => "NEO4J_PASSWORD",
            ConfigKey::Database => "NEO4J_DATABASE",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overlay the recognized keys of a credentials file onto `fallback`
///
/// Blank lines, `#` comments, lines without `=` and unknown keys are skipped.
/// The value is everything after the first `=`, so passwords may contain `=`.
/// Whitespace around both key and value is dropped, as is a leading byte
/// order mark.
///
/// # Examples
///
/// ```rust
/// use cim_graph_connection::domain::ConnectionDescriptor;
/// use cim_graph_connection::resolver::parse_config_text;
///
/// let fallback = ConnectionDescriptor::default();
/// let parsed = parse_config_text("# comment\n\nNEO4J_USERNAME=alice", &fallback);
///
/// assert_eq!(parsed.username, "alice");
/// assert_eq!(parsed.host, fallback.host);
/// ```
pub fn parse_config_text(text: &str, fallback: &ConnectionDescriptor) -> ConnectionDescriptor {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    apply_entries(fallback, entries(text))
}

/// Apply already-split `(key, value)` pairs in order
pub(crate) fn apply_entries<'a>(
    fallback: &ConnectionDescriptor,
    entries: impl IntoIterator<Item = (ConfigKey, &'a str)>,
) -> ConnectionDescriptor {
    entries
        .into_iter()
        .fold(fallback.clone(), |mut descriptor, (key, value)| {
            match key {
                ConfigKey::Uri => descriptor = parse_uri(value, &descriptor),
                ConfigKey::Username => descriptor.username = value.to_string(),
                ConfigKey::Password => descriptor.password = value.to_string(),
                ConfigKey::Database if value.is_empty() => descriptor.database = None,
                ConfigKey::Database => descriptor.database = Some(value.to_string()),
            }
            descriptor
        })
}

fn entries<'a>(text: &'a str) -> impl Iterator<Item = (ConfigKey, &'a str)> + 'a {
    text.lines().filter_map(|line| {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let Some((key, value)) = line.split_once('=') else {
            debug!("Skipping line without '=' in credentials file");
            return None;
        };

        match key.trim().parse::<ConfigKey>() {
            Ok(key) => Some((key, value.trim())),
            Err(()) => {
                debug!("Ignoring unrecognized key {:?}", key.trim());
                None
            }
        }
    })
}
