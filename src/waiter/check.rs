//! # Immediate Checker
//!
//! Single fetch, single predicate evaluation. For assertions that must
//! already hold, so `Ok(false)` is a failure rather than a reason to retry.

use tracing::debug;

use super::error::WaitError;
use super::ConfigurationWaiter;
use crate::client::ConfigurationClient;
use crate::constants::CHECK_DESCRIPTION;
use crate::crd::Configuration;

impl<C: ConfigurationClient> ConfigurationWaiter<C> {
    /// Verify the Configuration called `name` is in the state checked by
    /// `in_state` right now
    ///
    /// Returns the fetched snapshot on success.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` is not a valid resource name
    /// - `Fetch` if the client fails
    /// - `Predicate` if `in_state` returns an error
    /// - `NotInDesiredState` if `in_state` returns `Ok(false)`
    pub async fn check_state<F>(&self, name: &str, in_state: F) -> Result<Configuration, WaitError>
    where
        F: Fn(&Configuration) -> anyhow::Result<bool>,
    {
        self.validate(name)?;

        let current = self
            .client
            .get(name)
            .await
            .map_err(|source| WaitError::Fetch {
                name: name.to_string(),
                description: CHECK_DESCRIPTION.to_string(),
                last_state: None,
                source,
            })?;

        match in_state(&current) {
            Ok(true) => {
                debug!("Configuration {:?} is in desired state", name);
                Ok(current)
            }
            Ok(false) => Err(WaitError::NotInDesiredState {
                name: name.to_string(),
                state: Box::new(current),
            }),
            Err(source) => Err(WaitError::Predicate {
                name: name.to_string(),
                description: CHECK_DESCRIPTION.to_string(),
                last_state: Box::new(current),
                source,
            }),
        }
    }
}
