//! # Prelude
//!
//! Re-exports commonly used types and functions for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use configuration_waiter::prelude::*;
//! ```

// CRD types
pub use crate::crd::*;

// Client seam and its Kubernetes implementation
pub use crate::client::{ConfigurationClient, KubeConfigurationClient};

// Configuration
pub use crate::config::{ImageConfig, PollConfig, TestConfig};

// Builders and CRUD helpers
pub use crate::resources::{
    configuration, configuration_spec, create_byte_patch, create_configuration,
    legacy_configuration_spec, patch_config_image, with_config_annotation,
    with_container_concurrency, with_env, with_revision_timeout_seconds, ConfigOption, ResourceNames,
};

// Waiting
pub use crate::waiter::{
    configuration_has_created_revision, is_configuration_ready, ConfigurationWaiter, WaitError,
};
