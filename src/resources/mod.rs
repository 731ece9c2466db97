//! # Resources
//!
//! Construction and CRUD helpers for the Configuration under test.
//!
//! - `names.rs` - Per-test resource names and name validation
//! - `builder.rs` - Configuration builders and options
//! - `patch.rs` - JSON Patch construction

mod builder;
mod names;
mod patch;

pub use builder::{
    configuration, configuration_spec, legacy_configuration_spec, with_config_annotation,
    with_container_concurrency, with_env, with_revision_timeout_seconds, ConfigOption,
};
pub use names::{append_random_string, validate_resource_name, ResourceNames};
pub use patch::create_byte_patch;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info};

use crate::client::ConfigurationClient;
use crate::config::ImageConfig;
use crate::crd::Configuration;

/// Build and create the Configuration named `names.config`
///
/// # Errors
///
/// Returns an error if the API rejects the object.
pub async fn create_configuration<C>(
    client: &C,
    names: &ResourceNames,
    images: &ImageConfig,
    options: impl IntoIterator<Item = ConfigOption>,
) -> Result<Configuration>
where
    C: ConfigurationClient + ?Sized,
{
    let config = configuration(names, images, options);
    log_resource_object(&config);
    client.create(&config).await
}

/// Replace the image of `cfg`'s effective container and submit the change
/// as a JSON Patch
///
/// Returns the Configuration as stored after the patch.
///
/// # Errors
///
/// Returns an error if `cfg` has no name or no container, or if the API
/// rejects the patch.
pub async fn patch_config_image<C>(
    client: &C,
    cfg: &Configuration,
    image_path: &str,
) -> Result<Configuration>
where
    C: ConfigurationClient + ?Sized,
{
    let name = cfg
        .metadata
        .name
        .as_deref()
        .context("Configuration to patch has no name")?;

    let mut desired = cfg.clone();
    let container = desired
        .spec
        .effective_template_mut()
        .and_then(|t| t.spec.effective_container_mut())
        .ok_or_else(|| anyhow!("Configuration '{name}' has no container to patch"))?;
    container.image = image_path.to_string();

    let patch_bytes = create_byte_patch(cfg, &desired)?;
    info!("Patching Configuration '{}' to image {}", name, image_path);
    client.patch(name, &patch_bytes).await
}

fn log_resource_object(config: &Configuration) {
    match serde_json::to_string_pretty(config) {
        Ok(body) => debug!("Configuration object:\n{}", body),
        Err(e) => debug!("Configuration object could not be rendered: {}", e),
    }
}
