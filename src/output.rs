// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig emission to a file or standard output

use crate::error::{ProvisionError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the kubeconfig to `path`, or to `stdout` when no path is given.
///
/// Files are created with mode 0600 on Unix since they carry a bearer token.
pub fn emit_kubeconfig(yaml: &str, path: Option<&Path>, stdout: &mut dyn Write) -> Result<()> {
    let Some(path) = path else {
        return stdout
            .write_all(yaml.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| ProvisionError::OutputError {
                path: "<stdout>".into(),
                source,
            });
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(yaml.as_bytes()))
        .map_err(|source| ProvisionError::OutputError {
            path: path.to_path_buf(),
            source,
        })?;

    info!("kubeconfig file has been generated: {}", path.display());
    Ok(())
}
