//! # CFGWAIT CLI
//!
//! Command-line front end for the Configuration e2e helpers. Useful to
//! reproduce a failing e2e wait by hand against a live cluster.
//!
//! ## Usage
//!
//! ```bash
//! # Create a Configuration running ko.local/helloworld:latest
//! cfgwait create helloworld --image helloworld
//!
//! # Roll it to a new image
//! cfgwait patch-image helloworld --image helloworld-v2
//!
//! # Wait until a revision newer than helloworld-00001 is ready
//! cfgwait wait-revision helloworld --prior helloworld-00001
//!
//! # Wait until the Configuration has created any revision
//! cfgwait wait helloworld --until created
//!
//! # Assert, without waiting, that the Configuration is ready
//! cfgwait check helloworld --state ready
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use configuration_waiter::config::TestConfig;
use configuration_waiter::observability;
use kube::Client;
use std::time::Duration;
use tracing::warn;

mod mutate;
mod observe;

/// Configuration e2e helper CLI
#[derive(Parser)]
#[command(name = "cfgwait")]
#[command(
    about = "Create, patch and wait on serving Configuration resources",
    long_about = None,
    after_help = "\
Environment:
  TEST_NAMESPACE     namespace of the Configuration (default: serving-tests)
  POLL_INTERVAL_MS   delay between fetches (default: 1000)
  POLL_TIMEOUT_SECS  maximum duration of one poll (default: 600)
  KO_DOCKER_REPO     registry of test images (default: ko.local)
  IMAGE_TAG          tag of test images (default: latest)
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Kubernetes namespace (overrides TEST_NAMESPACE)
    #[arg(short, long, global = true)]
    namespace: Option<String>,

    /// Delay between two fetches in milliseconds (overrides POLL_INTERVAL_MS)
    #[arg(long, global = true)]
    poll_interval_ms: Option<u64>,

    /// Maximum duration of one poll in seconds (overrides POLL_TIMEOUT_SECS)
    #[arg(long, global = true)]
    poll_timeout_secs: Option<u64>,

    /// Print Prometheus metrics for the waits when done
    #[arg(long, global = true)]
    print_metrics: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a Configuration running a test image
    Create {
        /// Name of the Configuration
        #[arg(value_name = "NAME")]
        name: String,

        /// Test image name, rendered as <KO_DOCKER_REPO>/<image>:<IMAGE_TAG>
        #[arg(long)]
        image: String,
    },
    /// Replace the image of an existing Configuration with a JSON Patch
    #[command(name = "patch-image")]
    PatchImage {
        /// Name of the Configuration
        #[arg(value_name = "NAME")]
        name: String,

        /// Test image name, rendered as <KO_DOCKER_REPO>/<image>:<IMAGE_TAG>
        #[arg(long)]
        image: String,
    },
    /// Poll until the Configuration reaches a state
    Wait {
        /// Name of the Configuration
        #[arg(value_name = "NAME")]
        name: String,

        /// State to wait for
        #[arg(long, value_enum)]
        until: TargetState,
    },
    /// Check once, without polling, that the Configuration is in a state
    Check {
        /// Name of the Configuration
        #[arg(value_name = "NAME")]
        name: String,

        /// State that must already hold
        #[arg(long, value_enum)]
        state: TargetState,
    },
    /// Wait for a new revision to be created and then become ready
    #[command(name = "wait-revision")]
    WaitRevision {
        /// Name of the Configuration
        #[arg(value_name = "NAME")]
        name: String,

        /// Revision known before the change; empty accepts any revision
        #[arg(long, default_value = "")]
        prior: String,
    },
}

/// States the CLI can wait for or check
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum TargetState {
    /// The Configuration has created at least one revision
    Created,
    /// The Configuration reports Ready=True
    Ready,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    rustls::crypto::ring::default_provider()
        .install_default()
        .unwrap_or_else(|_| panic!("Failed to install rustls crypto provider"));

    observability::init_tracing();
    if let Err(e) = observability::register_metrics() {
        warn!("Failed to register metrics: {}", e);
    }

    let cli = Cli::parse();
    let config = resolve_config(&cli);

    let client = Client::try_default()
        .await
        .context("Failed to create Kubernetes client. Ensure kubeconfig is configured.")?;

    let result = match cli.command {
        Commands::Create { name, image } => mutate::create_command(client, &config, name, image).await,
        Commands::PatchImage { name, image } => {
            mutate::patch_image_command(client, &config, name, image).await
        }
        Commands::Wait { name, until } => observe::wait_command(client, &config, name, until).await,
        Commands::Check { name, state } => observe::check_command(client, &config, name, state).await,
        Commands::WaitRevision { name, prior } => {
            observe::wait_revision_command(client, &config, name, prior).await
        }
    };

    let metrics = cli.print_metrics.then(observability::gather_metrics);
    finish(result, metrics)
}

/// Print the gathered metrics, if any, and return the command result
///
/// Metrics are best effort: an encoding failure is logged and never replaces
/// the command's own outcome.
fn finish(result: Result<()>, metrics: Option<Result<String>>) -> Result<()> {
    match metrics {
        Some(Ok(text)) => print!("{text}"),
        Some(Err(e)) => warn!("Failed to encode metrics: {}", e),
        None => {}
    }
    result
}

/// Environment configuration with command-line overrides applied
fn resolve_config(cli: &Cli) -> TestConfig {
    let mut config = TestConfig::from_env();
    if let Some(namespace) = &cli.namespace {
        config.namespace.clone_from(namespace);
    }
    if let Some(ms) = cli.poll_interval_ms {
        config.poll = config.poll.with_interval(Duration::from_millis(ms));
    }
    if let Some(secs) = cli.poll_timeout_secs {
        config.poll = config.poll.with_timeout(Duration::from_secs(secs));
    }
    config
}
