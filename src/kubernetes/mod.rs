// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sources of Ingress resources: the cluster API or a local manifest.

pub mod ingresses;
pub mod manifest;

pub use ingresses::{get_ingress, list_ingresses};
pub use manifest::{load_manifest, parse_manifest, select_ingresses};
