// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and idempotent object creation.

pub mod client;
pub mod ensure;
pub mod namespaces;

pub use client::create_client;
pub use ensure::{ensure_created, Ensured, Outcome};
pub use namespaces::ensure_namespace_exists;
