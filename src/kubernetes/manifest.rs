// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading Ingress resources from YAML manifests

use crate::error::{IngressAnnotationError, Result};
use k8s_openapi::api::networking::v1::Ingress;
use kube::ResourceExt;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Read a manifest file and return the Ingresses it contains
#[instrument]
pub fn load_manifest(path: &Path) -> Result<Vec<Ingress>> {
    let contents = std::fs::read_to_string(path)?;
    parse_manifest(&contents)
}

/// Parse a (possibly multi-document) YAML stream, keeping only `kind: Ingress` objects.
///
/// Items of `kind: List` documents, as written by `kubectl get -o yaml`, are included.
pub fn parse_manifest(contents: &str) -> Result<Vec<Ingress>> {
    let mut ingresses = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(contents).enumerate() {
        let value = serde_yaml::Value::deserialize(document).map_err(|e| {
            IngressAnnotationError::ManifestError(format!("document {}: {}", index, e))
        })?;

        collect_ingresses(value, index, &mut ingresses)?;
    }

    Ok(ingresses)
}

fn collect_ingresses(
    value: serde_yaml::Value,
    index: usize,
    ingresses: &mut Vec<Ingress>,
) -> Result<()> {
    let kind = value
        .get("kind")
        .and_then(|k| k.as_str())
        .map(str::to_string);

    match kind.as_deref() {
        Some("Ingress") => {
            let ingress: Ingress = serde_yaml::from_value(value).map_err(|e| {
                IngressAnnotationError::ManifestError(format!("document {}: {}", index, e))
            })?;
            ingresses.push(ingress);
        }
        Some("List") => {
            let items = value
                .get("items")
                .and_then(|i| i.as_sequence())
                .cloned()
                .unwrap_or_default();
            debug!("Expanding list document {} with {} items", index, items.len());

            for item in items {
                collect_ingresses(item, index, ingresses)?;
            }
        }
        other => debug!("Skipping document {} of kind {:?}", index, other),
    }

    Ok(())
}

/// Keep the ingresses matching the optional namespace and name
pub fn select_ingresses(
    ingresses: Vec<Ingress>,
    namespace: Option<&str>,
    name: Option<&str>,
) -> Vec<Ingress> {
    ingresses
        .into_iter()
        .filter(|i| namespace.map_or(true, |ns| i.namespace().as_deref() == Some(ns)))
        .filter(|i| name.map_or(true, |n| i.name_any() == n))
        .collect()
}
