// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use k8s_openapi::api::networking::v1::Ingress;
use kube::Client;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ingress_annotations::config::Config;
use ingress_annotations::kubernetes::{
    get_ingress, list_ingresses, load_manifest, select_ingresses,
};
use ingress_annotations::types::IngressReport;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let ingresses = load_ingresses(&config).await?;
    info!("Inspecting {} ingresses", ingresses.len());

    let reports = IngressReport::collect(&ingresses);

    println!(
        "{}",
        serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?
    );

    let invalid = IngressReport::check(&reports, config.fail_on_invalid)?;
    if invalid > 0 {
        warn!("{} ingresses have invalid annotations", invalid);
    }

    Ok(())
}

async fn load_ingresses(config: &Config) -> Result<Vec<Ingress>> {
    if let Some(path) = &config.manifest {
        info!("Reading ingresses from {}", path.display());
        let ingresses = load_manifest(path)
            .with_context(|| format!("Failed to load manifest {}", path.display()))?;
        return Ok(select_ingresses(
            ingresses,
            config.namespace.as_deref(),
            config.name.as_deref(),
        ));
    }

    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;
    info!("Connected to Kubernetes cluster");

    match (&config.namespace, &config.name) {
        (Some(namespace), Some(name)) => Ok(vec![get_ingress(&client, namespace, name).await?]),
        (namespace, _) => Ok(list_ingresses(&client, namespace.as_deref()).await?),
    }
}
