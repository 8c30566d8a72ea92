// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Suffixes used to derive resource names from the service account name
pub mod suffixes {
    pub const SECRET: &str = "-token";
    pub const ROLE: &str = "-role";
    pub const ROLE_BINDING: &str = "-role-binding";
}

/// Well-known Kubernetes keys and values for service account tokens
pub mod token {
    /// Annotation binding a token secret to its service account
    pub const SERVICE_ACCOUNT_ANNOTATION: &str = "kubernetes.io/service-account.name";
    pub const SECRET_TYPE: &str = "kubernetes.io/service-account-token";
    pub const TOKEN_KEY: &str = "token";
    pub const CA_KEY: &str = "ca.crt";
}

/// Location of the cluster CA bundle published by kube-controller-manager
pub mod root_ca {
    pub const NAMESPACE: &str = "kube-system";
    pub const CONFIG_MAP: &str = "kube-root-ca.crt";
    pub const KEY: &str = "ca.crt";
}

/// Token polling configuration
pub mod poll {
    /// Interval between reads of the token secret
    pub const INTERVAL_SECS: u64 = 1;
    /// Default upper bound on the wait for the token controller
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Largest accepted wait
    pub const MAX_TIMEOUT_SECS: u64 = 3600;
}

pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";
