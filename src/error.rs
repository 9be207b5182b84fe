// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngressAnnotationError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid value {value:?} for annotation {key}: {source}")]
    ParseError {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid manifest: {0}")]
    ManifestError(String),

    #[error("Failed to read manifest: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{0} ingresses have invalid annotations")]
    InvalidIngresses(usize),
}

pub type Result<T> = std::result::Result<T, IngressAnnotationError>;
