//! # Wait Errors
//!
//! Every failure of the waiter carries the resource name and, when one was
//! fetched, the last observed snapshot.

use std::time::Duration;
use thiserror::Error;

use crate::crd::Configuration;

#[derive(Debug, Error)]
pub enum WaitError {
    /// The resource name was rejected before any fetch
    #[error("invalid configuration name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The client failed to fetch the resource; never retried
    #[error("failed to get configuration {name:?} while waiting for {description}: {source}")]
    Fetch {
        name: String,
        description: String,
        last_state: Option<Box<Configuration>>,
        #[source]
        source: anyhow::Error,
    },

    /// The caller's predicate itself failed
    #[error("configuration {name:?} state check {description} failed, got: {:?}: {source}", .last_state.status)]
    Predicate {
        name: String,
        description: String,
        last_state: Box<Configuration>,
        #[source]
        source: anyhow::Error,
    },

    /// The predicate never reported done within the poll timeout
    #[error("configuration {name:?} is not in desired state {description}, got: {:?}: timed out after {timeout:?}", .last_state.status)]
    Timeout {
        name: String,
        description: String,
        timeout: Duration,
        last_state: Box<Configuration>,
    },

    /// A single-shot check found the predicate not satisfied
    #[error("configuration {name:?} is not in desired state, got: {:?}", .state.status)]
    NotInDesiredState {
        name: String,
        state: Box<Configuration>,
    },

    /// A new revision was created but never became ready
    #[error("configuration {name:?} created revision {revision:?} but it did not become ready: {source}")]
    RevisionNotReady {
        name: String,
        revision: String,
        #[source]
        source: Box<WaitError>,
    },
}

impl WaitError {
    /// Last snapshot observed before the failure, if any
    pub fn last_state(&self) -> Option<&Configuration> {
        match self {
            WaitError::InvalidName { .. } => None,
            WaitError::Fetch { last_state, .. } => last_state.as_deref(),
            WaitError::Predicate { last_state, .. } | WaitError::Timeout { last_state, .. } => {
                Some(last_state)
            }
            WaitError::NotInDesiredState { state, .. } => Some(state),
            WaitError::RevisionNotReady { source, .. } => source.last_state(),
        }
    }

    /// Revision detected as created by a latest-revision wait that then
    /// failed to become ready
    ///
    /// Informational only: the wait still failed.
    pub fn candidate_revision(&self) -> Option<&str> {
        match self {
            WaitError::RevisionNotReady { revision, .. } => Some(revision),
            _ => None,
        }
    }

    /// Short label for metrics
    pub fn outcome(&self) -> &'static str {
        match self {
            WaitError::InvalidName { .. } => "invalid_name",
            WaitError::Fetch { .. } => "fetch_error",
            WaitError::Predicate { .. } => "predicate_error",
            WaitError::Timeout { .. } => "timeout",
            WaitError::NotInDesiredState { .. } => "not_in_desired_state",
            WaitError::RevisionNotReady { .. } => "revision_not_ready",
        }
    }
}
