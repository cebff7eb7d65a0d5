// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for connection resolution

use thiserror::Error;

use crate::state_machine::TransitionError;

/// Errors that can occur while resolving or submitting a connection
///
/// Malformed URIs and config files never show up here: parsing degrades to
/// the previous field value instead of failing.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The uploaded file could not be read
    #[error("Could not read file {path}: {reason}")]
    FileUnreadable { path: String, reason: String },

    /// The uploaded file was refused by the upload policy
    #[error("File rejected: {0}")]
    FileRejected(String),

    /// Connector reported the target unreachable or the credentials rejected
    #[error("Connection rejected: {0}")]
    ConnectionRejected(String),

    /// A submission is already outstanding for this session
    #[error("A connection attempt is already in progress")]
    SubmissionInProgress,

    /// The session was dismissed while the attempt was in flight
    #[error("Connection attempt {0} was discarded")]
    AttemptDiscarded(u64),

    /// Field name not recognized by the descriptor
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Field value could not be converted to the field's type
    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue { field: String, value: String },

    /// Submission state machine refused a transition
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for connection operations
pub type ConnectionResult<T> = Result<T, ConnectionError>;

#[cfg(feature = "neo4j")]
impl From<neo4rs::Error> for ConnectionError {
    fn from(err: neo4rs::Error) -> Self {
        ConnectionError::ConnectionRejected(err.to_string())
    }
}
