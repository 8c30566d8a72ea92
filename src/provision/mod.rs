// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The provisioning pipeline: namespace, service account, RBAC, token and kubeconfig.
//!
//! Every step runs in sequence against the same client and aborts the whole run
//! on failure. Objects created by earlier steps are left in place.

pub mod ca;
pub mod rbac;
pub mod service_account;
pub mod token;
pub mod verify;

use crate::config::Config;
use crate::error::{ProvisionError, Result};
use crate::kubernetes::ensure_namespace_exists;
use crate::output::emit_kubeconfig;
use crate::types::{Kubeconfig, KubeconfigParams};
use kube::Client;
use std::io::Write;
use tracing::{info, instrument};

pub use ca::resolve_ca;
pub use rbac::{desired_role, desired_role_binding, ensure_rbac};
pub use service_account::{desired_service_account, ensure_service_account};
pub use token::{desired_token_secret, ensure_token_secret, wait_for_token};
pub use verify::verify_resources;

/// Credentials gathered from the cluster for the kubeconfig
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
    pub ca_pem: Vec<u8>,
}

/// Ensure every object exists and collect the service account credentials
#[instrument(skip_all, fields(namespace = %config.namespace, sa = %config.service_account))]
pub async fn provision(client: &Client, config: &Config) -> Result<Credentials> {
    ensure_namespace_exists(client, &config.namespace).await?;

    let sa = ensure_service_account(client, config).await?;
    info!("Service account {} {:?}", config.service_account, sa.outcome);

    let (role, binding) = ensure_rbac(client, config).await?;
    info!(
        "Role {} {:?}, role binding {} {:?}",
        config.role_name, role.outcome, config.role_binding_name, binding.outcome
    );

    ensure_token_secret(client, config).await?;
    let (token, secret) = wait_for_token(
        client,
        &config.namespace,
        &config.secret_name,
        config.token_timeout,
    )
    .await?;

    verify_resources(client, config).await?;

    let ca_pem = resolve_ca(client, &secret).await?;

    Ok(Credentials { token, ca_pem })
}

/// Build the kubeconfig document for the provisioned service account
pub fn render_kubeconfig(config: &Config, credentials: &Credentials) -> Result<String> {
    Kubeconfig::for_service_account(&KubeconfigParams {
        cluster_url: &config.cluster_url,
        cluster_name: &config.cluster_name,
        namespace: &config.namespace,
        service_account: &config.service_account,
        token: &credentials.token,
        ca_pem: &credentials.ca_pem,
    })
    .to_yaml()
    .map_err(|e| ProvisionError::KubeconfigError(format!("Failed to render kubeconfig: {}", e)))
}

/// Run the full pipeline and emit the kubeconfig
pub async fn run(client: &Client, config: &Config, stdout: &mut dyn Write) -> Result<()> {
    let credentials = provision(client, config).await?;
    let yaml = render_kubeconfig(config, &credentials)?;
    emit_kubeconfig(&yaml, config.output_file.as_deref(), stdout)
}
