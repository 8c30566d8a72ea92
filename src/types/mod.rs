// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Documents produced by the provisioner.

pub mod kubeconfig;

pub use kubeconfig::{Kubeconfig, KubeconfigParams};
