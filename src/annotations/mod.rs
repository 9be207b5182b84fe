// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading typed ingress configuration from resource annotations.

pub mod reader;
pub mod source;

pub use reader::{
    insecure_node_port, loadbalancer_mode, secure_node_port, service_type, tcp_keep_alive_enabled,
    tcp_keep_alive_idle, tcp_keep_alive_probe_interval, tcp_keep_alive_probe_max_failures,
    websocket_enabled,
};
pub use source::AnnotationSource;
