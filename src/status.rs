// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection outcome and status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a submission failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// Connector could not reach the server or the server refused the login
    UnreachableOrRejected,

    /// Descriptor had no host, connector was not called
    InvalidDescriptor,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureReason::UnreachableOrRejected => "unreachable-or-rejected",
            FailureReason::InvalidDescriptor => "invalid-descriptor",
        }
    }

    /// Text for the submission surface
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::UnreachableOrRejected => {
                "Connection failed, please check the logs for more information"
            }
            FailureReason::InvalidDescriptor => "Enter a host to connect to",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "lowercase")]
pub enum ConnectionOutcome {
    Success,
    Failure(FailureReason),
}

impl ConnectionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConnectionOutcome::Success)
    }

    /// The submission surface closes only after a successful connect
    pub fn should_close_surface(&self) -> bool {
        self.is_success()
    }

    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            ConnectionOutcome::Success => None,
            ConnectionOutcome::Failure(reason) => Some(*reason),
        }
    }
}

/// Connection status owned by the caller
///
/// The resolver publishes a new value after every applied outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    /// Whether the last applied attempt connected
    pub connected: bool,

    /// URI of the last applied attempt
    pub uri: Option<String>,

    /// When the status last changed
    pub updated_at: DateTime<Utc>,
}

impl ConnectionStatus {
    /// Status before any submission
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            uri: None,
            updated_at: Utc::now(),
        }
    }

    pub(crate) fn from_outcome(outcome: ConnectionOutcome, uri: String) -> Self {
        Self {
            connected: outcome.is_success(),
            uri: Some(uri),
            updated_at: Utc::now(),
        }
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::disconnected()
    }
}
