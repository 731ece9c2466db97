//! # Configuration Status
//!
//! Observed state written by the serving controller.
//!
//! `latestCreatedRevisionName` and `latestReadyRevisionName` are updated by
//! two independent controller actions. A reader may see a new created revision
//! long before that same revision shows up as ready.

use serde::{Deserialize, Serialize};

/// Status of the Configuration resource
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationStatus {
    /// Generation last processed by the controller
    #[serde(default)]
    pub observed_generation: Option<i64>,
    /// Conditions represent the latest available observations
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Name of the last revision stamped out from the template
    /// Empty until the controller creates the first revision
    #[serde(default)]
    pub latest_created_revision_name: String,
    /// Name of the last revision that became ready
    /// Empty until a revision becomes ready
    #[serde(default)]
    pub latest_ready_revision_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub r#type: String,
    /// "True", "False" or "Unknown"
    pub status: String,
    #[serde(default)]
    pub last_transition_time: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Condition {
    pub fn new(condition_type: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            r#type: condition_type.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    pub fn is_true(&self) -> bool {
        self.status == "True"
    }
}
