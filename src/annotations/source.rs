// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only access to the annotations of a resource

use k8s_openapi::api::networking::v1::Ingress;
use kube::api::ObjectMeta;
use std::collections::{BTreeMap, HashMap};

/// Anything annotations can be looked up on.
///
/// A missing key returns `None`, a key set to the empty string returns `Some("")`.
pub trait AnnotationSource {
    fn lookup(&self, key: &str) -> Option<&str>;
}

impl AnnotationSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl AnnotationSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl AnnotationSource for ObjectMeta {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.annotations.as_ref().and_then(|a| a.lookup(key))
    }
}

impl AnnotationSource for Ingress {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.metadata.lookup(key)
    }
}

impl<T: AnnotationSource + ?Sized> AnnotationSource for &T {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}
