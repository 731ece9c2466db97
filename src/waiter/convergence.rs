//! # Latest Revision Wait
//!
//! Track one revision across two status fields. The controller sets
//! `latestCreatedRevisionName` and `latestReadyRevisionName` in separate,
//! unordered updates, so the wait first pins the identity of the new revision
//! and only then waits for that exact name to become ready. Matching the ready
//! field alone could report an older or newer revision.
//!
//! Assumes `latestReadyRevisionName` does not move away from a revision once
//! it matched within one wait.

use tracing::info;

use super::error::WaitError;
use super::predicates::{revision_created_since, revision_is_ready};
use super::ConfigurationWaiter;
use crate::client::ConfigurationClient;
use crate::constants::{READY_WITH_REVISION, UPDATED_WITH_REVISION};
use crate::resources::ResourceNames;

impl<C: ConfigurationClient> ConfigurationWaiter<C> {
    /// Wait for the Configuration called `name` to create a revision other
    /// than `prior_revision`, then for that revision to become ready
    ///
    /// Pass an empty `prior_revision` to accept any first revision. Each
    /// phase gets its own full timeout. Returns the new revision name.
    ///
    /// With a non-empty `prior_revision` and a status that has no revisions
    /// yet, the empty name counts as "different from prior" and is also
    /// "ready", so the call returns `Ok("")`. Callers that need a concrete
    /// revision must check for an empty result.
    ///
    /// # Errors
    ///
    /// A phase-one failure is returned as is and the second phase never
    /// starts. A phase-two failure is wrapped in `RevisionNotReady`, which
    /// names the detected revision but still means convergence failed.
    pub async fn wait_for_latest_revision(
        &self,
        name: &str,
        prior_revision: &str,
    ) -> Result<String, WaitError> {
        let updated = self
            .wait_for_state(name, revision_created_since(prior_revision), UPDATED_WITH_REVISION)
            .await?;
        let revision = updated.latest_created_revision_name().to_string();
        info!(
            "Configuration {:?} created revision {:?}, waiting for it to become ready",
            name, revision
        );

        self.wait_for_state(name, revision_is_ready(&revision), READY_WITH_REVISION)
            .await
            .map_err(|source| WaitError::RevisionNotReady {
                name: name.to_string(),
                revision: revision.clone(),
                source: Box::new(source),
            })?;

        info!("Configuration {:?} revision {:?} is ready", name, revision);
        Ok(revision)
    }

    /// `wait_for_latest_revision` for `names.config`, treating
    /// `names.revision` as the prior revision
    ///
    /// # Errors
    ///
    /// See `wait_for_latest_revision`.
    pub async fn wait_for_config_latest_revision(
        &self,
        names: &ResourceNames,
    ) -> Result<String, WaitError> {
        self.wait_for_latest_revision(&names.config, &names.revision)
            .await
    }
}
