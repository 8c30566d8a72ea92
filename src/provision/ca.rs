// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster CA bundle lookup

use crate::constants::{root_ca, token};
use crate::error::{ProvisionError, Result};
use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::{Api, Client};
use tracing::{debug, instrument, warn};

/// Resolve the cluster CA bundle as PEM bytes.
///
/// The `kube-root-ca.crt` ConfigMap is preferred; the token secret's own
/// `ca.crt` entry is the fallback when the ConfigMap is absent, empty, or
/// not readable by the caller.
#[instrument(skip_all)]
pub async fn resolve_ca(client: &Client, token_secret: &Secret) -> Result<Vec<u8>> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), root_ca::NAMESPACE);

    let from_config_map = match config_maps.get_opt(root_ca::CONFIG_MAP).await {
        Ok(cm) => cm
            .and_then(|cm| cm.data)
            .and_then(|mut data| data.remove(root_ca::KEY))
            .filter(|pem| !pem.trim().is_empty()),
        Err(kube::Error::Api(err)) if err.code == 403 => {
            warn!(
                "Not allowed to read {}/{}: {}",
                root_ca::NAMESPACE,
                root_ca::CONFIG_MAP,
                err.message
            );
            None
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(pem) = from_config_map {
        debug!("Using CA from {}/{}", root_ca::NAMESPACE, root_ca::CONFIG_MAP);
        return Ok(pem.into_bytes());
    }

    token_secret
        .data
        .as_ref()
        .and_then(|d| d.get(token::CA_KEY))
        .filter(|ca| !ca.0.is_empty())
        .map(|ca| {
            debug!("Using CA from token secret");
            ca.0.clone()
        })
        .ok_or(ProvisionError::MissingCaData)
}
