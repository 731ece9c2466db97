//! # Waiter
//!
//! Observe a Configuration until its status converges.
//!
//! - `poll.rs` - Repeated fetch and predicate evaluation with a timeout
//! - `check.rs` - Single-shot predicate evaluation
//! - `convergence.rs` - Two-phase wait for a new revision to become ready
//! - `predicates.rs` - Stock predicates
//! - `error.rs` - `WaitError`
//!
//! The waiter only reads. It holds no state between calls, so one waiter can
//! serve any number of concurrent waits on different resources.

mod check;
mod convergence;
mod error;
mod poll;
pub mod predicates;

pub use error::WaitError;
pub use predicates::{configuration_has_created_revision, is_configuration_ready};

use crate::client::ConfigurationClient;
use crate::config::PollConfig;
use crate::resources::validate_resource_name;

/// Polls Configurations through a client with a fixed interval and timeout
#[derive(Debug, Clone)]
pub struct ConfigurationWaiter<C> {
    client: C,
    config: PollConfig,
}

impl<C: ConfigurationClient> ConfigurationWaiter<C> {
    pub fn new(client: C, config: PollConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn validate(&self, name: &str) -> Result<(), WaitError> {
        validate_resource_name(name).map_err(|reason| WaitError::InvalidName {
            name: name.to_string(),
            reason,
        })
    }
}
