// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),

    #[error("Timed out after {timeout_secs}s waiting for token in secret {secret}")]
    TokenTimeout { secret: String, timeout_secs: u64 },

    #[error("Some resources were not created successfully: {0}")]
    MissingResources(String),

    #[error("CA certificate is empty")]
    MissingCaData,

    #[error("Kubeconfig error: {0}")]
    KubeconfigError(String),

    #[error("Failed to write {}: {source}", path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProvisionError>;
