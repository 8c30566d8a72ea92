// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::Cli;
use crate::constants::{poll, suffixes};
use crate::error::{ProvisionError, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Provisioning configuration resolved from the command line.
///
/// All derived names are filled in here, so later steps never need to look at
/// which flags were actually passed.
#[derive(Debug, Clone)]
pub struct Config {
    pub cluster_url: String,
    pub cluster_name: String,
    pub namespace: String,
    pub service_account: String,
    pub verbs: Vec<String>,
    pub resources: Vec<String>,
    pub api_groups: Vec<String>,
    pub secret_name: String,
    pub role_name: String,
    pub role_binding_name: String,
    pub output_file: Option<PathBuf>,
    /// Kubeconfig context for the provisioning client itself
    pub context: Option<String>,
    pub token_timeout: Duration,
}

impl Config {
    /// Validate the parsed arguments and derive default names
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let cluster_url = validate_cluster_url(&cli.cluster_url)?;

        for (flag, value) in [
            ("--cluster-name", &cli.cluster_name),
            ("--namespace", &cli.namespace),
            ("--sa", &cli.service_account),
        ] {
            if value.trim().is_empty() {
                return Err(ProvisionError::InvalidInput(format!(
                    "{} must not be empty",
                    flag
                )));
            }
        }

        let verbs = split_list(&cli.permissions);
        if verbs.is_empty() {
            return Err(ProvisionError::InvalidInput(
                "--permissions must list at least one verb".to_string(),
            ));
        }

        let resources = split_list(&cli.resources);
        if resources.is_empty() {
            return Err(ProvisionError::InvalidInput(
                "--resources must list at least one resource".to_string(),
            ));
        }

        if cli.token_timeout > poll::MAX_TIMEOUT_SECS {
            return Err(ProvisionError::InvalidInput(format!(
                "--token-timeout {} exceeds the maximum of {} seconds",
                cli.token_timeout,
                poll::MAX_TIMEOUT_SECS
            )));
        }

        // The core API group is the empty string, so empty entries are kept here
        let api_groups = cli
            .api_groups
            .as_deref()
            .map(|groups| groups.split(',').map(|g| g.trim().to_string()).collect())
            .unwrap_or_else(|| vec![String::new()]);

        let sa = &cli.service_account;

        Ok(Config {
            secret_name: cli
                .secret_name
                .unwrap_or_else(|| format!("{}{}", sa, suffixes::SECRET)),
            role_name: cli
                .role_name
                .unwrap_or_else(|| format!("{}{}", sa, suffixes::ROLE)),
            role_binding_name: cli
                .role_binding_name
                .unwrap_or_else(|| format!("{}{}", sa, suffixes::ROLE_BINDING)),
            cluster_url,
            cluster_name: cli.cluster_name,
            namespace: cli.namespace,
            service_account: cli.service_account,
            verbs,
            resources,
            api_groups,
            output_file: cli.output_file,
            context: cli.context,
            token_timeout: Duration::from_secs(cli.token_timeout),
        })
    }
}

/// Split a comma-separated flag value, trimming entries and dropping empty ones
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn validate_cluster_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw)
        .map_err(|e| ProvisionError::InvalidInput(format!("--cluster-url {}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ProvisionError::InvalidInput(format!(
            "--cluster-url {} must be an http(s) URL with a host",
            raw
        )));
    }

    // Keep the user's spelling; Url would append a trailing slash
    Ok(raw.to_string())
}
