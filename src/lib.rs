//! Configuration Waiter Library
//!
//! End-to-end test helpers for serving `Configuration` resources: build and
//! create them, patch their image, and wait for the status written by the
//! serving controller to converge.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use configuration_waiter::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = TestConfig::from_env();
//! let client = KubeConfigurationClient::new(kube::Client::try_default().await?, &config.namespace);
//! let names = ResourceNames::for_test("helloworld", "helloworld");
//!
//! create_configuration(&client, &names, &config.images, Vec::new()).await?;
//! let waiter = ConfigurationWaiter::new(client, config.poll);
//! let revision = waiter.wait_for_config_latest_revision(&names).await?;
//! # let _ = revision;
//! # Ok(())
//! # }
//! ```
//!
//! The helpers only observe what an external controller does; nothing here
//! reconciles resources.

pub mod client;
pub mod config;
pub mod constants;
pub mod crd;
pub mod observability;
pub mod prelude;
pub mod resources;
pub mod waiter;
