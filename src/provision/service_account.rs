// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service account creation

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{ensure_created, Ensured};
use k8s_openapi::api::core::v1::ServiceAccount;
use kube::{api::ObjectMeta, Api, Client};
use tracing::instrument;

/// Desired service account for the given configuration
pub fn desired_service_account(config: &Config) -> ServiceAccount {
    ServiceAccount {
        metadata: ObjectMeta {
            name: Some(config.service_account.clone()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Create the service account, reusing it if it already exists
#[instrument(skip_all, fields(sa = %config.service_account, namespace = %config.namespace))]
pub async fn ensure_service_account(
    client: &Client,
    config: &Config,
) -> Result<Ensured<ServiceAccount>> {
    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), &config.namespace);
    ensure_created(&accounts, &desired_service_account(config)).await
}
