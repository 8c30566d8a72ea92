// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service account token secret creation and token extraction

use crate::config::Config;
use crate::constants::{poll, token};
use crate::error::{ProvisionError, Result};
use crate::kubernetes::{ensure_created, Ensured, Outcome};
use k8s_openapi::api::core::v1::Secret;
use kube::{api::ObjectMeta, Api, Client};
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, instrument};

/// Desired token secret bound to the service account through its annotation
pub fn desired_token_secret(config: &Config) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(config.secret_name.clone()),
            namespace: Some(config.namespace.clone()),
            annotations: Some(BTreeMap::from([(
                token::SERVICE_ACCOUNT_ANNOTATION.to_string(),
                config.service_account.clone(),
            )])),
            ..Default::default()
        },
        type_: Some(token::SECRET_TYPE.to_string()),
        ..Default::default()
    }
}

/// Create the token secret, reusing it if it already exists.
///
/// A reused secret must be a service account token bound to the configured
/// account, otherwise its token would be written out under the wrong user.
#[instrument(skip_all, fields(secret = %config.secret_name))]
pub async fn ensure_token_secret(client: &Client, config: &Config) -> Result<Ensured<Secret>> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), &config.namespace);
    let ensured = ensure_created(&secrets, &desired_token_secret(config)).await?;

    if ensured.outcome == Outcome::Existing {
        check_binding(&ensured.object, config)?;
    }

    Ok(ensured)
}

fn check_binding(secret: &Secret, config: &Config) -> Result<()> {
    let type_ = secret.type_.as_deref().unwrap_or_default();
    if type_ != token::SECRET_TYPE {
        return Err(ProvisionError::InvalidInput(format!(
            "secret {} has type {:?}, expected {}",
            config.secret_name,
            type_,
            token::SECRET_TYPE
        )));
    }

    let bound_to = secret
        .metadata
        .annotations
        .as_ref()
        .and_then(|a| a.get(token::SERVICE_ACCOUNT_ANNOTATION))
        .map(String::as_str)
        .unwrap_or_default();
    if bound_to != config.service_account {
        return Err(ProvisionError::InvalidInput(format!(
            "secret {} is bound to {:?}, not service account {}",
            config.secret_name, bound_to, config.service_account
        )));
    }

    Ok(())
}

/// Read the token from a secret, if the token controller has populated it
pub fn extract_token(secret: &Secret) -> Result<Option<String>> {
    let Some(raw) = secret
        .data
        .as_ref()
        .and_then(|d| d.get(token::TOKEN_KEY))
        .filter(|t| !t.0.is_empty())
    else {
        return Ok(None);
    };

    String::from_utf8(raw.0.clone())
        .map(Some)
        .map_err(|e| ProvisionError::KubeconfigError(format!("Token is not valid UTF-8: {}", e)))
}

/// Poll the secret until its token is populated or `timeout` elapses.
///
/// Returns the token along with the secret as last read, so its `ca.crt`
/// entry can be used later.
#[instrument(skip(client))]
pub async fn wait_for_token(
    client: &Client,
    namespace: &str,
    secret_name: &str,
    timeout: Duration,
) -> Result<(String, Secret)> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let deadline = Instant::now().checked_add(timeout).ok_or_else(|| {
        ProvisionError::InvalidInput(format!("token timeout {:?} is too large", timeout))
    })?;
    let interval = Duration::from_secs(poll::INTERVAL_SECS);

    loop {
        let secret = secrets.get(secret_name).await?;
        if let Some(token) = extract_token(&secret)? {
            info!("Token for secret {} is available", secret_name);
            return Ok((token, secret));
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(ProvisionError::TokenTimeout {
                secret: secret_name.to_string(),
                timeout_secs: timeout.as_secs(),
            });
        }

        debug!("Token for secret {} not populated yet", secret_name);
        sleep(interval.min(deadline - now)).await;
    }
}
