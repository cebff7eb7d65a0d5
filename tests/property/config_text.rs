// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for credentials file parsing

use cim_graph_connection::parse_config_text;
use proptest::prelude::*;

use super::{descriptor, plain_host, port, scheme};

const KEYS: [&str; 4] = ["NEO4J_URI", "NEO4J_USERNAME", "NEO4J_PASSWORD", "NEO4J_DATABASE"];

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(KEYS.to_vec()), "[a-zA-Z0-9:/+.=#-]{0,24}")
            .prop_map(|(key, value)| format!("{}={}", key, value)),
        (scheme(), plain_host(), port())
            .prop_map(|(scheme, host, port)| format!("NEO4J_URI={}://{}:{}", scheme, host, port)),
        "[A-Z_]{1,12}=[a-z0-9]{0,8}",
        " *#[ -~]{0,20}",
        Just(String::new()),
    ]
}

fn config_text() -> impl Strategy<Value = String> {
    (prop::collection::vec(line(), 0..8), any::<bool>()).prop_map(|(lines, crlf)| {
        lines.join(if crlf { "\r\n" } else { "\n" })
    })
}

proptest! {
    /// Applying the same file twice equals applying it once
    #[test]
    fn prop_parse_is_idempotent(fallback in descriptor(), text in config_text()) {
        let once = parse_config_text(&text, &fallback);
        let twice = parse_config_text(&text, &once);

        prop_assert_eq!(&once, &parse_config_text(&text, &fallback));
        prop_assert_eq!(twice, once);
    }

    /// Keys outside the recognized four never change anything
    #[test]
    fn prop_unknown_keys_ignored(
        fallback in descriptor(),
        key in "[A-Z_]{1,16}".prop_filter("recognized key", |k| !KEYS.contains(&k.as_str())),
        value in "[ -~]{0,24}",
    ) {
        prop_assert_eq!(parse_config_text(&format!("{}={}", key, value), &fallback), fallback);
    }

    /// Comment and blank lines around a username line only set the username
    #[test]
    fn prop_comments_and_blanks_ignored(
        fallback in descriptor(),
        comment in "[ -~]{0,24}",
        username in "[a-z]{1,12}",
    ) {
        let text = format!("# {}\n\nNEO4J_USERNAME={}", comment, username);
        let mut expected = fallback.clone();
        expected.username = username;

        prop_assert_eq!(parse_config_text(&text, &fallback), expected);
    }
}
