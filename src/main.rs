// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sa_kubeconfig::cli::Cli;
use sa_kubeconfig::config::Config;
use sa_kubeconfig::kubernetes::create_client;
use sa_kubeconfig::provision;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the kubeconfig
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit here, before any cluster API call
    let config = Config::from_cli(Cli::parse())?;
    info!(
        "Provisioning service account {}/{}",
        config.namespace, config.service_account
    );

    let client = create_client(config.context.as_deref()).await?;
    info!("Connected to Kubernetes cluster");

    let mut stdout = std::io::stdout().lock();
    provision::run(&client, &config, &mut stdout)
        .await
        .with_context(|| {
            format!(
                "Failed to provision service account {}/{}",
                config.namespace, config.service_account
            )
        })?;

    Ok(())
}
