//! # Logging
//!
//! Tracing subscriber setup shared by the CLI and by test binaries.

use tracing::warn;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::fmt::{MakeWriter, SubscriberBuilder};
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "configuration_waiter=info,cfgwait=info";

/// Install a fmt subscriber filtered by `RUST_LOG`
///
/// Logs go to stderr; stdout is reserved for command output.
///
/// Safe to call more than once: test binaries initialize from several tests
/// and only the first call installs the subscriber.
pub fn init_tracing() {
    if let Err(e) = subscriber_builder(std::io::stderr).try_init() {
        // Already installed by an earlier call
        warn!("Tracing subscriber init returned error: {}", e);
    }
}

fn subscriber_builder<W>(writer: W) -> SubscriberBuilder<DefaultFields, Format, EnvFilter, W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_target(false)
        .with_writer(writer)
}
