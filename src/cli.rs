// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line arguments

use crate::constants::poll::DEFAULT_TIMEOUT_SECS;
use clap::Parser;
use std::path::PathBuf;

/// Generate a Kubernetes kubeconfig for a service account.
#[derive(Parser, Debug, Clone)]
#[command(name = "sa-kubeconfig", version, about)]
pub struct Cli {
    /// Kubernetes cluster URL written into the kubeconfig
    #[arg(long)]
    pub cluster_url: String,

    /// Kubernetes cluster name, also used as the context name
    #[arg(long)]
    pub cluster_name: String,

    /// Namespace for the resources
    #[arg(long)]
    pub namespace: String,

    /// Service account name
    #[arg(long = "sa")]
    pub service_account: String,

    /// Comma-separated list of verbs like 'list,get,create,delete'
    #[arg(long)]
    pub permissions: String,

    /// Comma-separated list of resources like 'pods,deployments,services'.
    ///
    /// Names are passed to the Role unchanged, so use the plural resource name
    /// the API serves ('pods', not 'pod'); a singular or short name grants nothing.
    #[arg(long)]
    pub resources: String,

    /// Comma-separated list of API groups for the role rule (core group when omitted)
    #[arg(long)]
    pub api_groups: Option<String>,

    /// Secret holding the service account token [default: <sa>-token]
    #[arg(long)]
    pub secret_name: Option<String>,

    /// Role name [default: <sa>-role]
    #[arg(long)]
    pub role_name: Option<String>,

    /// Role binding name [default: <sa>-role-binding]
    #[arg(long)]
    pub role_binding_name: Option<String>,

    /// Path where the kubeconfig will be saved; printed to stdout when omitted
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Kubeconfig context used to talk to the cluster [default: current context]
    #[arg(long, env = "SA_KUBECONFIG_CONTEXT")]
    pub context: Option<String>,

    /// Seconds to wait for the token controller to populate the secret
    #[arg(long, env = "SA_KUBECONFIG_TOKEN_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub token_timeout: u64,
}
