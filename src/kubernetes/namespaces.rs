// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{ProvisionError, Result};
use crate::kubernetes::Outcome;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{info, instrument};

/// Ensure a namespace exists in the cluster, create if it doesn't
#[instrument(skip(client))]
pub async fn ensure_namespace_exists(client: &Client, namespace: &str) -> Result<Outcome> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(namespace).await {
        Ok(_) => {
            info!("Namespace {} already exists", namespace);
            Ok(Outcome::Existing)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating namespace {}", namespace);
            let ns = Namespace {
                metadata: ObjectMeta {
                    name: Some(namespace.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            };
            namespaces
                .create(&PostParams::default(), &ns)
                .await
                .map_err(|e| namespace_error("create", namespace, e))?;
            info!("Namespace {} created successfully", namespace);
            Ok(Outcome::Created)
        }
        Err(e) => Err(namespace_error("check", namespace, e)),
    }
}

fn namespace_error(action: &str, namespace: &str, err: kube::Error) -> ProvisionError {
    ProvisionError::NamespaceError(format!(
        "Failed to {} namespace {}: {}",
        action, namespace, err
    ))
}
