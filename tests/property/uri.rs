// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for URI parsing and building

use cim_graph_connection::{build_connection_string, parse_uri, ConnectionDescriptor};
use proptest::prelude::*;

use super::{descriptor, plain_host, port, scheme};

proptest! {
    /// `scheme://host:port` sets exactly those three fields
    #[test]
    fn prop_full_uri_is_extracted(
        fallback in descriptor(),
        scheme in scheme(),
        host in plain_host(),
        port in port(),
    ) {
        let parsed = parse_uri(&format!("{}://{}:{}", scheme, host, port), &fallback);

        prop_assert_eq!(parsed.scheme, scheme);
        prop_assert_eq!(&parsed.host, &host);
        prop_assert_eq!(parsed.port, Some(port));
        prop_assert_eq!(&parsed.database, &fallback.database);
        prop_assert_eq!(&parsed.username, &fallback.username);
        prop_assert_eq!(&parsed.password, &fallback.password);
    }

    /// Without a `://` separator nothing changes
    #[test]
    fn prop_no_separator_is_noop(
        fallback in descriptor(),
        raw in any::<String>().prop_filter("contains separator", |s| !s.contains("://")),
    ) {
        prop_assert_eq!(parse_uri(&raw, &fallback), fallback);
    }

    /// A host that already carries a port is used as-is
    #[test]
    fn prop_port_never_doubled(
        scheme in scheme(),
        host in plain_host(),
        embedded in port(),
        explicit in port(),
    ) {
        let descriptor = ConnectionDescriptor::new(scheme, format!("{}:{}", host, embedded))
            .with_port(explicit);

        prop_assert_eq!(
            build_connection_string(&descriptor),
            format!("{}://{}:{}", scheme, host, embedded)
        );
    }

    /// build ∘ parse ∘ build = build for colon-free hosts
    #[test]
    fn prop_build_parse_round_trip(
        mut d in descriptor(),
        host in "[a-zA-Z0-9.-]{0,24}",
    ) {
        d.host = host;
        let uri = build_connection_string(&d);
        let reparsed = parse_uri(&uri, &d);

        prop_assert_eq!(build_connection_string(&reparsed), uri);
    }
}
