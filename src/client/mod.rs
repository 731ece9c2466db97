//! # Configuration Client
//!
//! Abstract interface over the API that stores Configuration resources.
//!
//! The waiter only ever calls `get`; `create` and `patch` back the CRUD
//! helpers in `resources`. Implementations must tolerate concurrent reads
//! because independent waits may share one client.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::crd::Configuration;

mod api;

pub use api::KubeConfigurationClient;

/// Client trait for Configuration resources
#[async_trait]
pub trait ConfigurationClient: Send + Sync {
    /// Fetch the current state of the named Configuration
    async fn get(&self, name: &str) -> Result<Configuration>;

    /// Create a Configuration, returning the stored object
    async fn create(&self, config: &Configuration) -> Result<Configuration>;

    /// Apply a serialized RFC 6902 JSON Patch to the named Configuration
    async fn patch(&self, name: &str, patch_bytes: &[u8]) -> Result<Configuration>;
}

#[async_trait]
impl<T: ConfigurationClient + ?Sized> ConfigurationClient for Arc<T> {
    async fn get(&self, name: &str) -> Result<Configuration> {
        (**self).get(name).await
    }

    async fn create(&self, config: &Configuration) -> Result<Configuration> {
        (**self).create(config).await
    }

    async fn patch(&self, name: &str, patch_bytes: &[u8]) -> Result<Configuration> {
        (**self).patch(name, patch_bytes).await
    }
}
