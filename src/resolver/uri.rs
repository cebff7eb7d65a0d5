// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection URI parsing and building
//!
//! Parsing is an overlay: fields the input does not carry keep the value from
//! the fallback descriptor, and malformed pieces are skipped rather than
//! reported.

use tracing::debug;

use crate::domain::{ConnectionDescriptor, Scheme};

/// Separator between scheme and host
pub const SCHEME_SEPARATOR: &str = "://";

/// Overlay the parts of a pasted `scheme://host[:port]` string onto `fallback`
///
/// Segments are taken from the right of the `://` split: host, then scheme,
/// then a legacy port segment. A `:port` suffix on the host segment wins over
/// the legacy segment. Input without `://` leaves `fallback` unchanged.
///
/// # Examples
///
/// ```rust
/// use cim_graph_connection::domain::{ConnectionDescriptor, Scheme};
/// use cim_graph_connection::resolver::parse_uri;
///
/// let fallback = ConnectionDescriptor::default();
/// let parsed = parse_uri("bolt://db.internal:7688", &fallback);
///
/// assert_eq!(parsed.scheme, Scheme::Bolt);
/// assert_eq!(parsed.host, "db.internal");
/// assert_eq!(parsed.port, Some(7688));
/// assert_eq!(parsed.username, fallback.username);
/// ```
pub fn parse_uri(raw: &str, fallback: &ConnectionDescriptor) -> ConnectionDescriptor {
    let mut parsed = fallback.clone();

    let raw = raw.trim_end_matches(['\r', '\n']);
    let mut segments: Vec<&str> = raw.split(SCHEME_SEPARATOR).collect();
    if segments.len() < 2 {
        debug!("No scheme separator in {:?}, keeping current fields", raw);
        return parsed;
    }

    let Some(authority) = segments.pop() else {
        return parsed;
    };
    let (host, embedded_port) = split_embedded_port(authority);
    if host.is_empty() {
        debug!("Empty host in pasted URI, keeping {}", fallback.host);
    } else {
        parsed.host = host.to_string();
    }

    if let Some(segment) = segments.pop() {
        match segment.parse::<Scheme>() {
            Ok(scheme) => parsed.scheme = scheme,
            Err(e) => debug!("{}, keeping {}", e, fallback.scheme),
        }
    }

    let port = embedded_port.or_else(|| segments.pop().and_then(parse_port));
    if let Some(port) = port {
        parsed.port = Some(port);
    }

    parsed
}

/// `<scheme>://<host>` plus `:<port>` when the host carries no port of its own
pub fn build_connection_string(descriptor: &ConnectionDescriptor) -> String {
    let mut uri = format!(
        "{}{}{}",
        descriptor.scheme, SCHEME_SEPARATOR, descriptor.host
    );

    if !has_embedded_port(&descriptor.host) {
        if let Some(port) = descriptor.port {
            uri.push(':');
            uri.push_str(&port.to_string());
        }
    }

    uri
}

/// Whether `host` already has a `:port` (or other colon) outside IPv6 brackets
pub fn has_embedded_port(host: &str) -> bool {
    match host.rfind(']') {
        Some(end) => host[end..].contains(':'),
        None => host.contains(':'),
    }
}

fn split_embedded_port(authority: &str) -> (&str, Option<u16>) {
    match authority.rsplit_once(':') {
        Some((host, port)) if !host.is_empty() => match parse_port(port) {
            Some(port) => (host, Some(port)),
            None => (authority, None),
        },
        _ => (authority, None),
    }
}

/// Positive port written as plain ASCII digits
pub(crate) fn parse_port(raw: &str) -> Option<u16> {
    let port = raw
        .bytes()
        .all(|b| b.is_ascii_digit())
        .then(|| raw.parse::<u16>().ok())
        .flatten()
        .filter(|port| *port > 0);

    if port.is_none() {
        debug!("Ignoring malformed port {:?}", raw);
    }
    port
}
