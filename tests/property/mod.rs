// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Shared strategies for descriptors and their parts.

mod config_text;
mod uri;

use cim_graph_connection::{ConnectionDescriptor, Scheme};
use proptest::prelude::*;

pub fn scheme() -> impl Strategy<Value = Scheme> {
    prop::sample::select(Scheme::ALL.to_vec())
}

/// Host names without a colon
pub fn plain_host() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9.-]{0,24}"
}

pub fn port() -> impl Strategy<Value = u16> {
    1..=u16::MAX
}

/// Any descriptor a session could hold, colons in the host included
pub fn descriptor() -> impl Strategy<Value = ConnectionDescriptor> {
    (
        scheme(),
        "[a-zA-Z0-9.:-]{0,24}",
        prop::option::of(port()),
        prop::option::of("[a-z0-9]{0,10}"),
        "[a-z0-9]{0,10}",
        "[ -~]{0,16}",
    )
        .prop_map(|(scheme, host, port, database, username, password)| {
            ConnectionDescriptor {
                scheme,
                host,
                port,
                database,
                username,
                password,
            }
        })
}
