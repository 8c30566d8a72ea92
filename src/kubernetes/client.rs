// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation for the cluster being provisioned

use crate::error::{ProvisionError, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a Kubernetes client from the caller's environment.
///
/// With no context this follows the usual inference order (KUBECONFIG, then
/// in-cluster configuration). A named context is always read from the kubeconfig.
#[instrument]
pub async fn create_client(context: Option<&str>) -> Result<Client> {
    let config = match context {
        Some(context) => {
            let options = KubeConfigOptions {
                context: Some(context.to_string()),
                ..Default::default()
            };
            KConfig::from_kubeconfig(&options).await.map_err(|e| {
                ProvisionError::KubeconfigError(format!(
                    "Failed to load context {}: {}",
                    context, e
                ))
            })?
        }
        None => KConfig::infer()
            .await
            .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    debug!("Using cluster API at {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to create client: {}", e)))
}
