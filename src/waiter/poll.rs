//! # Poller
//!
//! Fetch a Configuration repeatedly until a predicate reports done.
//!
//! The first check happens immediately. After every check that is not done
//! the poller gives up if the timeout has elapsed, otherwise it sleeps one
//! interval. Fetch and predicate errors end the poll on the spot.

use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info_span, trace, Instrument};

use super::error::WaitError;
use super::ConfigurationWaiter;
use crate::client::ConfigurationClient;
use crate::constants::WAIT_OPERATION;
use crate::crd::Configuration;
use crate::observability::metrics;

impl<C: ConfigurationClient> ConfigurationWaiter<C> {
    /// Poll the Configuration called `name` until `in_state` returns `Ok(true)`
    ///
    /// `description` names the awaited state in diagnostics and in the
    /// `<operation>/<name>/<description>` metric key; it never affects
    /// control flow. Returns the snapshot that satisfied the predicate.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `name` is not a valid resource name
    /// - `Fetch` as soon as the client fails, without retrying
    /// - `Predicate` as soon as `in_state` returns an error
    /// - `Timeout` once the configured timeout has elapsed
    pub async fn wait_for_state<F>(
        &self,
        name: &str,
        in_state: F,
        description: &str,
    ) -> Result<Configuration, WaitError>
    where
        F: Fn(&Configuration) -> anyhow::Result<bool>,
    {
        self.validate(name)?;

        let key = format!("{WAIT_OPERATION}/{name}/{description}");
        let span = info_span!("wait_for_configuration_state", key = %key);
        let started = Instant::now();

        let result = self
            .poll(name, &in_state, description)
            .instrument(span)
            .await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        metrics::observe_wait(&key, outcome, started.elapsed());
        result
    }

    async fn poll<F>(
        &self,
        name: &str,
        in_state: &F,
        description: &str,
    ) -> Result<Configuration, WaitError>
    where
        F: Fn(&Configuration) -> anyhow::Result<bool>,
    {
        let started = Instant::now();
        let mut last_state: Option<Configuration> = None;
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let current = match self.client.get(name).await {
                Ok(current) => current,
                Err(source) => {
                    debug!("Fetch attempt {} for {:?} failed: {:#}", attempt, name, source);
                    return Err(WaitError::Fetch {
                        name: name.to_string(),
                        description: description.to_string(),
                        last_state: last_state.map(Box::new),
                        source,
                    });
                }
            };

            match in_state(&current) {
                Ok(true) => {
                    debug!(
                        "Configuration {:?} reached {} after {} check(s) in {:?}",
                        name,
                        description,
                        attempt,
                        started.elapsed()
                    );
                    return Ok(current);
                }
                Ok(false) => {}
                Err(source) => {
                    return Err(WaitError::Predicate {
                        name: name.to_string(),
                        description: description.to_string(),
                        last_state: Box::new(current),
                        source,
                    });
                }
            }

            let elapsed = started.elapsed();
            if elapsed >= self.config.timeout {
                return Err(WaitError::Timeout {
                    name: name.to_string(),
                    description: description.to_string(),
                    timeout: self.config.timeout,
                    last_state: Box::new(current),
                });
            }
            last_state = Some(current);

            trace!(
                "Configuration {:?} not yet {} ({:?} elapsed), retrying in {:?}",
                name,
                description,
                elapsed,
                self.config.interval
            );
            // A zero interval would spin on the API server
            sleep(self.config.interval.max(Duration::from_millis(1))).await;
        }
    }
}
