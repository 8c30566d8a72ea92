// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Role and RoleBinding provisioning

use crate::config::Config;
use crate::constants::RBAC_API_GROUP;
use crate::error::Result;
use crate::kubernetes::{ensure_created, Ensured};
use k8s_openapi::api::rbac::v1::{PolicyRule, Role, RoleBinding, RoleRef, Subject};
use kube::{api::ObjectMeta, Api, Client};
use tracing::instrument;

/// Desired role holding a single rule built from the configured verbs and resources.
///
/// Verbs and resources are passed through untouched; the API server rejects
/// anything it does not know.
pub fn desired_role(config: &Config) -> Role {
    Role {
        metadata: ObjectMeta {
            name: Some(config.role_name.clone()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        rules: Some(vec![PolicyRule {
            api_groups: Some(config.api_groups.clone()),
            resources: Some(config.resources.clone()),
            verbs: config.verbs.clone(),
            ..Default::default()
        }]),
    }
}

/// Desired binding of the role to the service account
pub fn desired_role_binding(config: &Config) -> RoleBinding {
    RoleBinding {
        metadata: ObjectMeta {
            name: Some(config.role_binding_name.clone()),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        },
        role_ref: RoleRef {
            api_group: RBAC_API_GROUP.to_string(),
            kind: "Role".to_string(),
            name: config.role_name.clone(),
        },
        subjects: Some(vec![Subject {
            kind: "ServiceAccount".to_string(),
            name: config.service_account.clone(),
            namespace: Some(config.namespace.clone()),
            ..Default::default()
        }]),
    }
}

/// Create the role and its binding, reusing whichever already exist
#[instrument(skip_all, fields(role = %config.role_name, binding = %config.role_binding_name))]
pub async fn ensure_rbac(
    client: &Client,
    config: &Config,
) -> Result<(Ensured<Role>, Ensured<RoleBinding>)> {
    let roles: Api<Role> = Api::namespaced(client.clone(), &config.namespace);
    let role = ensure_created(&roles, &desired_role(config)).await?;

    let bindings: Api<RoleBinding> = Api::namespaced(client.clone(), &config.namespace);
    let binding = ensure_created(&bindings, &desired_role_binding(config)).await?;

    Ok((role, binding))
}
