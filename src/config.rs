// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use std::env;
use std::path::PathBuf;

/// Inspection settings loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Read ingresses from this YAML file instead of the cluster
    pub manifest: Option<PathBuf>,
    /// Restrict to one namespace; all namespaces when unset
    pub namespace: Option<String>,
    /// Inspect a single ingress (requires `namespace`)
    pub name: Option<String>,
    /// Exit with an error when any ingress carries a malformed node port
    pub fail_on_invalid: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let manifest = non_empty("INGRESS_MANIFEST").map(PathBuf::from);
        let namespace = non_empty("INGRESS_NAMESPACE");
        let name = non_empty("INGRESS_NAME");
        let fail_on_invalid: bool = lookup("FAIL_ON_INVALID")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        if name.is_some() && namespace.is_none() {
            bail!("INGRESS_NAME requires INGRESS_NAMESPACE to be set");
        }

        Ok(Config {
            manifest,
            namespace,
            name,
            fail_on_invalid,
        })
    }
}
