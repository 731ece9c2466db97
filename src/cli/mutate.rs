//! # Mutating Commands
//!
//! `create` and `patch-image`.

use anyhow::Result;
use configuration_waiter::client::{ConfigurationClient, KubeConfigurationClient};
use configuration_waiter::config::TestConfig;
use configuration_waiter::resources::{create_configuration, patch_config_image, ResourceNames};
use kube::Client;

/// Create a Configuration running the given test image
pub async fn create_command(
    client: Client,
    config: &TestConfig,
    name: String,
    image: String,
) -> Result<()> {
    let configs = KubeConfigurationClient::new(client, &config.namespace);
    let names = ResourceNames::new(name, image);

    let created = create_configuration(&configs, &names, &config.images, Vec::new()).await?;
    println!(
        "✅ Created Configuration '{}/{}' (generation {})",
        config.namespace,
        names.config,
        created.metadata.generation.unwrap_or_default()
    );
    Ok(())
}

/// Replace the image of an existing Configuration
pub async fn patch_image_command(
    client: Client,
    config: &TestConfig,
    name: String,
    image: String,
) -> Result<()> {
    let configs = KubeConfigurationClient::new(client, &config.namespace);
    let current = configs.get(&name).await?;
    let image_path = config.images.image_path(&image);

    let patched = patch_config_image(&configs, &current, &image_path).await?;
    println!(
        "✅ Patched Configuration '{}/{}' to {} (generation {})",
        config.namespace,
        name,
        image_path,
        patched.metadata.generation.unwrap_or_default()
    );
    Ok(())
}
