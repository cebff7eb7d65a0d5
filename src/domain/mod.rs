// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Domain Models
//!
//! # Value Objects
//!
//! - [`Scheme`] - Supported Neo4j/Bolt protocol identifiers
//! - [`ConnectionDescriptor`] - Scheme, host, port, database and credentials
//! - [`FieldUpdate`] - A single manual edit of a descriptor field

pub mod descriptor;
pub mod scheme;

pub use descriptor::{
    ConnectionDescriptor, DescriptorField, FieldUpdate, DEFAULT_DATABASE, DEFAULT_PORT,
};
pub use scheme::{Scheme, SchemeError};
