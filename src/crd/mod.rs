//! # Custom Resource Definitions
//!
//! The serving `Configuration` resource as seen by the e2e helpers.
//!
//! The CRD itself is installed and reconciled by the serving controller; these
//! types only mirror the fields the helpers build, patch and observe.
//!
//! ## Module Structure
//!
//! - `spec.rs` - Configuration spec, revision templates and containers
//! - `status.rs` - Status types tracking the latest created and ready revisions

mod spec;
mod status;

pub use spec::{
    Configuration, ConfigurationSpec, Container, EnvVar, RevisionSpec, RevisionTemplateSpec,
    TemplateMetadata,
};
pub use status::{Condition, ConfigurationStatus};

impl Configuration {
    /// Name of the most recently created revision, empty if none yet
    pub fn latest_created_revision_name(&self) -> &str {
        self.status
            .as_ref()
            .map_or("", |s| s.latest_created_revision_name.as_str())
    }

    /// Name of the most recently ready revision, empty if none yet
    pub fn latest_ready_revision_name(&self) -> &str {
        self.status
            .as_ref()
            .map_or("", |s| s.latest_ready_revision_name.as_str())
    }

    /// Look up a status condition by type
    pub fn condition(&self, condition_type: &str) -> Option<&Condition> {
        self.status
            .as_ref()?
            .conditions
            .iter()
            .find(|c| c.r#type == condition_type)
    }
}
