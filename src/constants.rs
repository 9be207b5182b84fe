// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Annotation keys read from Ingress resources.
///
/// These strings are already present on deployed resources and must not change.
pub mod annotations {
    pub const PREFIX: &str = "io.cilium";

    pub const LB_MODE: &str = "io.cilium.ingress/loadbalancer-mode";
    pub const SERVICE_TYPE: &str = "io.cilium.ingress/service-type";
    pub const INSECURE_NODE_PORT: &str = "io.cilium.ingress/insecure-node-port";
    pub const SECURE_NODE_PORT: &str = "io.cilium.ingress/secure-node-port";

    pub const TCP_KEEP_ALIVE_ENABLED: &str = "io.cilium/tcp-keep-alive";
    pub const TCP_KEEP_ALIVE_IDLE: &str = "io.cilium/tcp-keep-alive-idle";
    pub const TCP_KEEP_ALIVE_PROBE_INTERVAL: &str = "io.cilium/tcp-keep-alive-probe-interval";
    pub const TCP_KEEP_ALIVE_PROBE_MAX_FAILURES: &str =
        "io.cilium/tcp-keep-alive-probe-max-failures";
    pub const WEBSOCKET_ENABLED: &str = "io.cilium/websocket";
}

/// Values used when an annotation is missing or unusable
pub mod defaults {
    /// The only value that switches a tri-state annotation on
    pub const ENABLED: &str = "enabled";

    pub const SERVICE_TYPE: &str = "LoadBalancer";

    /// 1 - Enabled, 0 - Disabled
    pub const TCP_KEEP_ALIVE_ENABLED: i64 = 1;
    /// In seconds
    pub const TCP_KEEP_ALIVE_INITIAL_IDLE: i64 = 10;
    /// In seconds
    pub const TCP_KEEP_ALIVE_PROBE_INTERVAL: i64 = 5;
    pub const TCP_KEEP_ALIVE_MAX_PROBE_COUNT: i64 = 10;
    /// 1 - Enabled, 0 - Disabled
    pub const WEBSOCKET_ENABLED: i64 = 0;
}
