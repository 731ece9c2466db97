//! # Observing Commands
//!
//! `wait`, `check` and `wait-revision`. These never modify the cluster.

use anyhow::Result;
use configuration_waiter::client::KubeConfigurationClient;
use configuration_waiter::config::TestConfig;
use configuration_waiter::crd::Configuration;
use configuration_waiter::waiter::{
    configuration_has_created_revision, is_configuration_ready, ConfigurationWaiter,
};
use kube::Client;

use crate::TargetState;

type StatePredicate = fn(&Configuration) -> Result<bool>;

fn predicate_for(state: TargetState) -> (StatePredicate, &'static str) {
    match state {
        TargetState::Created => (
            configuration_has_created_revision,
            "ConfigurationHasCreatedRevision",
        ),
        TargetState::Ready => (is_configuration_ready, "ConfigurationIsReady"),
    }
}

fn waiter(client: Client, config: &TestConfig) -> ConfigurationWaiter<KubeConfigurationClient> {
    ConfigurationWaiter::new(
        KubeConfigurationClient::new(client, &config.namespace),
        config.poll,
    )
}

/// Poll until the Configuration reaches `until`
pub async fn wait_command(
    client: Client,
    config: &TestConfig,
    name: String,
    until: TargetState,
) -> Result<()> {
    let (predicate, description) = predicate_for(until);
    let reached = waiter(client, config)
        .wait_for_state(&name, predicate, description)
        .await?;
    println!(
        "✅ Configuration '{}/{}' reached {} (latest created: {:?}, latest ready: {:?})",
        config.namespace,
        name,
        description,
        reached.latest_created_revision_name(),
        reached.latest_ready_revision_name()
    );
    Ok(())
}

/// Check once that the Configuration is in `state`
pub async fn check_command(
    client: Client,
    config: &TestConfig,
    name: String,
    state: TargetState,
) -> Result<()> {
    let (predicate, description) = predicate_for(state);
    waiter(client, config).check_state(&name, predicate).await?;
    println!(
        "✅ Configuration '{}/{}' is in state {}",
        config.namespace, name, description
    );
    Ok(())
}

/// Wait for a revision newer than `prior` to become ready and print its name
pub async fn wait_revision_command(
    client: Client,
    config: &TestConfig,
    name: String,
    prior: String,
) -> Result<()> {
    let revision = waiter(client, config)
        .wait_for_latest_revision(&name, &prior)
        .await?;
    println!("{revision}");
    Ok(())
}
