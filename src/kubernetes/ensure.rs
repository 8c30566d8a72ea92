// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-or-reuse semantics for namespaced objects

use crate::error::Result;
use kube::{api::PostParams, Api, Resource, ResourceExt};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info};

/// Whether an ensure step created the object or found it already present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Existing,
}

/// The object as observed in the cluster after an ensure step
#[derive(Debug, Clone)]
pub struct Ensured<K> {
    pub object: K,
    pub outcome: Outcome,
}

/// Create `desired`, or read back the existing object of the same name.
///
/// An existing object is never updated: a 409 conflict means the object is
/// reused as-is, so re-running never changes what an earlier run created.
pub async fn ensure_created<K>(api: &Api<K>, desired: &K) -> Result<Ensured<K>>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Serialize + Debug,
{
    let name = desired.name_any();
    let kind = K::kind(&());

    match api.create(&PostParams::default(), desired).await {
        Ok(object) => {
            info!("{} {} created", kind, name);
            Ok(Ensured {
                object,
                outcome: Outcome::Created,
            })
        }
        Err(kube::Error::Api(err)) if err.code == 409 => {
            debug!("{} {} already exists, reusing it", kind, name);
            let object = api.get(&name).await?;
            Ok(Ensured {
                object,
                outcome: Outcome::Existing,
            })
        }
        Err(e) => Err(e.into()),
    }
}
