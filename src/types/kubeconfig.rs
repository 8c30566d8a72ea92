// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

/// A kubeconfig document with a single cluster, user and context
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Kubeconfig {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub clusters: Vec<NamedCluster>,
    pub contexts: Vec<NamedContext>,
    pub current_context: String,
    pub users: Vec<NamedUser>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NamedCluster {
    pub cluster: ClusterEntry,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterEntry {
    /// PEM bundle, base64-encoded
    pub certificate_authority_data: String,
    pub server: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NamedContext {
    pub context: ContextEntry,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContextEntry {
    pub cluster: String,
    pub user: String,
    pub namespace: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NamedUser {
    pub name: String,
    pub user: UserEntry,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserEntry {
    pub token: String,
}

/// Inputs for a service account kubeconfig
#[derive(Clone, Debug)]
pub struct KubeconfigParams<'a> {
    pub cluster_url: &'a str,
    pub cluster_name: &'a str,
    pub namespace: &'a str,
    pub service_account: &'a str,
    pub token: &'a str,
    pub ca_pem: &'a [u8],
}

impl Kubeconfig {
    /// Build a token-authenticated kubeconfig for a service account.
    ///
    /// The context is named after the cluster and is the current context.
    pub fn for_service_account(params: &KubeconfigParams<'_>) -> Self {
        Kubeconfig {
            api_version: "v1".to_string(),
            kind: "Config".to_string(),
            clusters: vec![NamedCluster {
                cluster: ClusterEntry {
                    certificate_authority_data: STANDARD.encode(params.ca_pem),
                    server: params.cluster_url.to_string(),
                },
                name: params.cluster_name.to_string(),
            }],
            contexts: vec![NamedContext {
                context: ContextEntry {
                    cluster: params.cluster_name.to_string(),
                    user: params.service_account.to_string(),
                    namespace: params.namespace.to_string(),
                },
                name: params.cluster_name.to_string(),
            }],
            current_context: params.cluster_name.to_string(),
            users: vec![NamedUser {
                name: params.service_account.to_string(),
                user: UserEntry {
                    token: params.token.to_string(),
                },
            }],
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
