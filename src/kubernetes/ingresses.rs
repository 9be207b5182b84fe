// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Reading Ingress resources from the cluster

use crate::error::Result;
use k8s_openapi::api::networking::v1::Ingress;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Get a single Ingress by namespace and name
#[instrument(skip(client))]
pub async fn get_ingress(client: &Client, namespace: &str, name: &str) -> Result<Ingress> {
    let ingresses: Api<Ingress> = Api::namespaced(client.clone(), namespace);
    let ingress = ingresses.get(name).await?;

    debug!("Fetched ingress {}/{}", namespace, name);
    Ok(ingress)
}

/// List Ingresses in a namespace, or across all namespaces when `namespace` is `None`
#[instrument(skip(client))]
pub async fn list_ingresses(client: &Client, namespace: Option<&str>) -> Result<Vec<Ingress>> {
    let ingresses: Api<Ingress> = match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    };

    let ingress_list = ingresses.list(&ListParams::default()).await?;

    debug!("Listed {} ingresses", ingress_list.items.len());
    Ok(ingress_list.items)
}
