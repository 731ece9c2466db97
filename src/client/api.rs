//! # Kubernetes Client
//!
//! `ConfigurationClient` backed by the Kubernetes API server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use kube::api::{Api, Patch, PatchParams, PostParams};
use kube::Client;
use tracing::debug;

use super::ConfigurationClient;
use crate::crd::Configuration;

/// Namespaced Configuration client
#[derive(Clone)]
pub struct KubeConfigurationClient {
    api: Api<Configuration>,
    namespace: String,
}

impl std::fmt::Debug for KubeConfigurationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeConfigurationClient")
            .field("namespace", &self.namespace)
            .finish_non_exhaustive()
    }
}

impl KubeConfigurationClient {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }
}

#[async_trait]
impl ConfigurationClient for KubeConfigurationClient {
    async fn get(&self, name: &str) -> Result<Configuration> {
        self.api
            .get(name)
            .await
            .with_context(|| format!("Failed to get Configuration '{}/{name}'", self.namespace))
    }

    async fn create(&self, config: &Configuration) -> Result<Configuration> {
        let name = config.metadata.name.as_deref().unwrap_or("<generated>");
        debug!("Creating Configuration '{}/{}'", self.namespace, name);
        self.api
            .create(&PostParams::default(), config)
            .await
            .with_context(|| format!("Failed to create Configuration '{}/{name}'", self.namespace))
    }

    async fn patch(&self, name: &str, patch_bytes: &[u8]) -> Result<Configuration> {
        let patch: json_patch::Patch = serde_json::from_slice(patch_bytes)
            .context("Patch payload is not a valid JSON Patch document")?;
        debug!(
            "Patching Configuration '{}/{}' with {} operation(s)",
            self.namespace,
            name,
            patch.0.len()
        );
        self.api
            .patch(name, &PatchParams::default(), &Patch::Json::<()>(patch))
            .await
            .with_context(|| format!("Failed to patch Configuration '{}/{name}'", self.namespace))
    }
}
