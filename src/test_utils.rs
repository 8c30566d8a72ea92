// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

type Key = (String, String);

/// A mock HTTP service that returns predefined responses keyed by method and exact path.
///
/// Registering several responses for the same key queues them; the last one
/// keeps being served once the queue is drained. Every request is recorded.
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<Key, VecDeque<(u16, String)>>>>,
    calls: Arc<Mutex<Vec<Key>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.push("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.push("POST", path, status, body)
    }

    fn push(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back((status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service, keeping a handle for assertions
    pub fn into_client(self) -> (Client, MockService) {
        let handle = self.clone();
        (Client::new(self, "default"), handle)
    }

    /// All requests seen so far, as (method, path)
    pub fn calls(&self) -> Vec<Key> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests seen for the given method
    pub fn count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, _)| m == method)
            .count()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), path.to_string()));

        let mut responses = self.responses.lock().unwrap();
        let queue = responses.get_mut(&(method.to_string(), path.to_string()))?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let (status, body) = self
            .find_response(&method, &path)
            .unwrap_or_else(|| (404, not_found_json("resource", &path)));

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock namespace JSON response
pub fn namespace_json(name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "test-uid"
        }
    })
    .to_string()
}

/// Create a mock service account JSON response
pub fn service_account_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ServiceAccount",
        "metadata": { "name": name, "namespace": namespace }
    })
    .to_string()
}

/// Create a mock role JSON response with a single rule
pub fn role_json(namespace: &str, name: &str, verbs: &[&str], resources: &[&str]) -> String {
    serde_json::json!({
        "apiVersion": "rbac.authorization.k8s.io/v1",
        "kind": "Role",
        "metadata": { "name": name, "namespace": namespace },
        "rules": [{ "apiGroups": [""], "verbs": verbs, "resources": resources }]
    })
    .to_string()
}

/// Create a mock role binding JSON response
pub fn role_binding_json(namespace: &str, name: &str, role: &str, sa: &str) -> String {
    serde_json::json!({
        "apiVersion": "rbac.authorization.k8s.io/v1",
        "kind": "RoleBinding",
        "metadata": { "name": name, "namespace": namespace },
        "roleRef": {
            "apiGroup": "rbac.authorization.k8s.io",
            "kind": "Role",
            "name": role
        },
        "subjects": [{ "kind": "ServiceAccount", "name": sa, "namespace": namespace }]
    })
    .to_string()
}

/// Create a mock token secret bound to `my-sa`; `token` and `ca` are raw values
pub fn token_secret_json(
    namespace: &str,
    name: &str,
    token: Option<&str>,
    ca: Option<&str>,
) -> String {
    secret_json(
        namespace,
        name,
        Some("my-sa"),
        "kubernetes.io/service-account-token",
        token,
        ca,
    )
}

/// Create a mock secret with an explicit service account binding and type
pub fn bound_secret_json(
    namespace: &str,
    name: &str,
    service_account: Option<&str>,
    type_: &str,
    token: Option<&str>,
) -> String {
    secret_json(namespace, name, service_account, type_, token, None)
}

fn secret_json(
    namespace: &str,
    name: &str,
    service_account: Option<&str>,
    type_: &str,
    token: Option<&str>,
    ca: Option<&str>,
) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let mut data = serde_json::Map::new();
    if let Some(token) = token {
        data.insert("token".to_string(), STANDARD.encode(token).into());
    }
    if let Some(ca) = ca {
        data.insert("ca.crt".to_string(), STANDARD.encode(ca).into());
    }

    let mut metadata = serde_json::json!({ "name": name, "namespace": namespace });
    if let Some(sa) = service_account {
        metadata["annotations"] = serde_json::json!({ "kubernetes.io/service-account.name": sa });
    }

    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": metadata,
        "type": type_,
        "data": data
    })
    .to_string()
}

/// Create a mock ConfigMap JSON response
pub fn config_map_json(namespace: &str, name: &str, key: &str, value: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": { "name": name, "namespace": namespace },
        "data": { key: value }
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" already exists", resource, name),
        "reason": "AlreadyExists",
        "code": 409
    })
    .to_string()
}

/// Create a 403 forbidden response
pub fn forbidden_json(message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": "Forbidden",
        "code": 403
    })
    .to_string()
}

/// Create a 422 invalid response
pub fn invalid_json(message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": "Invalid",
        "code": 422
    })
    .to_string()
}
