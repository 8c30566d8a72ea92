// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Post-provisioning check that every object can be read back

use crate::config::Config;
use crate::error::{ProvisionError, Result};
use k8s_openapi::api::core::v1::ServiceAccount;
use k8s_openapi::api::rbac::v1::{Role, RoleBinding};
use kube::{Api, Client};
use tracing::{debug, instrument};

#[instrument(skip_all)]
pub async fn verify_resources(client: &Client, config: &Config) -> Result<()> {
    let ns = &config.namespace;
    let mut missing = Vec::new();

    let accounts: Api<ServiceAccount> = Api::namespaced(client.clone(), ns);
    if accounts.get_opt(&config.service_account).await?.is_none() {
        missing.push(format!("ServiceAccount {}", config.service_account));
    }

    let roles: Api<Role> = Api::namespaced(client.clone(), ns);
    if roles.get_opt(&config.role_name).await?.is_none() {
        missing.push(format!("Role {}", config.role_name));
    }

    let bindings: Api<RoleBinding> = Api::namespaced(client.clone(), ns);
    if bindings.get_opt(&config.role_binding_name).await?.is_none() {
        missing.push(format!("RoleBinding {}", config.role_binding_name));
    }

    if !missing.is_empty() {
        return Err(ProvisionError::MissingResources(missing.join(", ")));
    }

    debug!("All resources present in namespace {}", ns);
    Ok(())
}
