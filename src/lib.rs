// Copyright (c) 2025 - Cowboy AI, Inc.
//! Graph database connection resolution for the Composable Information Machine
//!
//! This crate turns whatever a user hands a connection dialog (typed fields,
//! a pasted `scheme://host:port` string, or a Neo4j credentials file) into a
//! single [`ConnectionDescriptor`], and submits it through an injected
//! [`Connector`].
//!
//! ## Modules
//!
//! - [`domain`]: schemes and the connection descriptor
//! - [`resolver`]: parsing rules and the [`ConnectionConfigResolver`] session
//! - [`state_machine`]: the per-attempt submission lifecycle
//! - [`connector`] / [`file_reader`]: capabilities the resolver is given
//! - [`adapters`]: `neo4rs` connector (feature `neo4j`)

pub mod adapters;
pub mod connector;
pub mod domain;
pub mod errors;
pub mod file_reader;
pub mod resolver;
pub mod state_machine;
pub mod status;

// Re-export commonly used types
pub use connector::{ConnectionTarget, Connector};
pub use domain::{ConnectionDescriptor, DescriptorField, FieldUpdate, Scheme};
pub use errors::{ConnectionError, ConnectionResult};
pub use file_reader::{FileReader, FsFileReader, UploadPolicy};
pub use resolver::{
    build_connection_string, parse_config_text, parse_uri, ConnectionConfigResolver,
};
pub use state_machine::SubmissionState;
pub use status::{ConnectionOutcome, ConnectionStatus, FailureReason};
