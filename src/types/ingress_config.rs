// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::annotations::{self, AnnotationSource};
use crate::constants::defaults;
use crate::error::{IngressAnnotationError, Result};
use k8s_openapi::api::networking::v1::Ingress;
use kube::ResourceExt;
use serde::Serialize;
use tracing::warn;

/// Every annotation-driven setting of an ingress, resolved with defaults
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IngressConfig {
    pub loadbalancer_mode: String,
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure_node_port: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_node_port: Option<u32>,
    pub tcp_keep_alive: TcpKeepAlive,
    pub websocket_enabled: i64,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TcpKeepAlive {
    pub enabled: i64,
    pub idle: i64,
    pub probe_interval: i64,
    pub probe_max_failures: i64,
}

impl Default for TcpKeepAlive {
    fn default() -> Self {
        Self {
            enabled: defaults::TCP_KEEP_ALIVE_ENABLED,
            idle: defaults::TCP_KEEP_ALIVE_INITIAL_IDLE,
            probe_interval: defaults::TCP_KEEP_ALIVE_PROBE_INTERVAL,
            probe_max_failures: defaults::TCP_KEEP_ALIVE_MAX_PROBE_COUNT,
        }
    }
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self {
            loadbalancer_mode: String::new(),
            service_type: defaults::SERVICE_TYPE.to_string(),
            insecure_node_port: None,
            secure_node_port: None,
            tcp_keep_alive: TcpKeepAlive::default(),
            websocket_enabled: defaults::WEBSOCKET_ENABLED,
        }
    }
}

impl IngressConfig {
    /// Resolve all settings, failing on the first malformed node port
    pub fn from_annotations<S: AnnotationSource + ?Sized>(source: &S) -> Result<Self> {
        Ok(Self {
            loadbalancer_mode: annotations::loadbalancer_mode(source).to_string(),
            service_type: annotations::service_type(source).to_string(),
            insecure_node_port: annotations::insecure_node_port(source)?,
            secure_node_port: annotations::secure_node_port(source)?,
            tcp_keep_alive: TcpKeepAlive {
                enabled: annotations::tcp_keep_alive_enabled(source),
                idle: annotations::tcp_keep_alive_idle(source),
                probe_interval: annotations::tcp_keep_alive_probe_interval(source),
                probe_max_failures: annotations::tcp_keep_alive_probe_max_failures(source),
            },
            websocket_enabled: annotations::websocket_enabled(source),
        })
    }
}

/// Outcome of resolving one ingress, as printed by the binary
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IngressReport {
    pub namespace: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<IngressConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IngressReport {
    pub fn from_ingress(ingress: &Ingress) -> Self {
        let (config, error) = match IngressConfig::from_annotations(ingress) {
            Ok(c) => (Some(c), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            namespace: ingress.namespace().unwrap_or_default(),
            name: ingress.name_any(),
            config,
            error,
        }
    }

    /// Resolve every ingress, keeping the input order
    pub fn collect(ingresses: &[Ingress]) -> Vec<Self> {
        ingresses.iter().map(Self::from_ingress).collect()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Log every invalid report and return how many there were.
    ///
    /// With `fail_on_invalid` set, any invalid report turns into an error.
    pub fn check(reports: &[Self], fail_on_invalid: bool) -> Result<usize> {
        let mut invalid = 0;
        for report in reports.iter().filter(|r| !r.is_valid()) {
            invalid += 1;
            warn!(
                "Ingress {}/{} has invalid annotations: {}",
                report.namespace,
                report.name,
                report.error.as_deref().unwrap_or_default()
            );
        }

        if fail_on_invalid && invalid > 0 {
            return Err(IngressAnnotationError::InvalidIngresses(invalid));
        }
        Ok(invalid)
    }
}
