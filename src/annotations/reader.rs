// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed accessors for the ingress annotations.
//!
//! Node ports are the only fields that report malformed values. Every other
//! field falls back to its default.

use crate::annotations::source::AnnotationSource;
use crate::constants::{annotations, defaults};
use crate::error::{IngressAnnotationError, Result};

/// Load balancer mode for the ingress, empty when not set.
pub fn loadbalancer_mode<S: AnnotationSource + ?Sized>(source: &S) -> &str {
    source.lookup(annotations::LB_MODE).unwrap_or_default()
}

/// Service type for the ingress. Defaults to `LoadBalancer`.
pub fn service_type<S: AnnotationSource + ?Sized>(source: &S) -> &str {
    source
        .lookup(annotations::SERVICE_TYPE)
        .unwrap_or(defaults::SERVICE_TYPE)
}

/// Secure node port for the ingress, if set.
pub fn secure_node_port<S: AnnotationSource + ?Sized>(source: &S) -> Result<Option<u32>> {
    node_port(source, annotations::SECURE_NODE_PORT)
}

/// Insecure node port for the ingress, if set.
pub fn insecure_node_port<S: AnnotationSource + ?Sized>(source: &S) -> Result<Option<u32>> {
    node_port(source, annotations::INSECURE_NODE_PORT)
}

/// 1 if TCP keep-alive is enabled (the default), 0 if disabled.
pub fn tcp_keep_alive_enabled<S: AnnotationSource + ?Sized>(source: &S) -> i64 {
    tri_state(source, annotations::TCP_KEEP_ALIVE_ENABLED, defaults::TCP_KEEP_ALIVE_ENABLED)
}

/// Seconds a connection stays idle before keep-alive probes start. Defaults to 10.
///
/// See `TCP_KEEPIDLE` in tcp(7).
pub fn tcp_keep_alive_idle<S: AnnotationSource + ?Sized>(source: &S) -> i64 {
    int_or_default(
        source,
        annotations::TCP_KEEP_ALIVE_IDLE,
        defaults::TCP_KEEP_ALIVE_INITIAL_IDLE,
    )
}

/// Seconds between individual keep-alive probes. Defaults to 5.
///
/// See `TCP_KEEPINTVL` in tcp(7).
pub fn tcp_keep_alive_probe_interval<S: AnnotationSource + ?Sized>(source: &S) -> i64 {
    int_or_default(
        source,
        annotations::TCP_KEEP_ALIVE_PROBE_INTERVAL,
        defaults::TCP_KEEP_ALIVE_PROBE_INTERVAL,
    )
}

/// Unanswered probes before the connection is dropped. Defaults to 10.
///
/// See `TCP_KEEPCNT` in tcp(7).
pub fn tcp_keep_alive_probe_max_failures<S: AnnotationSource + ?Sized>(source: &S) -> i64 {
    int_or_default(
        source,
        annotations::TCP_KEEP_ALIVE_PROBE_MAX_FAILURES,
        defaults::TCP_KEEP_ALIVE_MAX_PROBE_COUNT,
    )
}

/// 1 if websocket support is enabled, 0 otherwise (the default).
pub fn websocket_enabled<S: AnnotationSource + ?Sized>(source: &S) -> i64 {
    tri_state(source, annotations::WEBSOCKET_ENABLED, defaults::WEBSOCKET_ENABLED)
}

// Parsed as a signed 32-bit value and reinterpreted as unsigned, so "-1" yields u32::MAX.
fn node_port<S: AnnotationSource + ?Sized>(source: &S, key: &str) -> Result<Option<u32>> {
    let Some(value) = source.lookup(key) else {
        return Ok(None);
    };

    let port: i32 = value
        .parse()
        .map_err(|e| IngressAnnotationError::ParseError {
            key: key.to_string(),
            value: value.to_string(),
            source: e,
        })?;

    Ok(Some(port as u32))
}

fn tri_state<S: AnnotationSource + ?Sized>(source: &S, key: &str, default: i64) -> i64 {
    match source.lookup(key) {
        None => default,
        Some(defaults::ENABLED) => 1,
        Some(_) => 0,
    }
}

fn int_or_default<S: AnnotationSource + ?Sized>(source: &S, key: &str, default: i64) -> i64 {
    source
        .lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
