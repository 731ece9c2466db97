//! # Constants
//!
//! Shared constants used throughout the waiter and its CLI.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Default interval between two status fetches while polling (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Default maximum total duration of a single poll (seconds)
/// Ten minutes leaves room for image pulls on cold clusters
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 600;

/// Default container registry used to build test image references
pub const DEFAULT_DOCKER_REPO: &str = "ko.local";

/// Default tag appended to test image references
pub const DEFAULT_IMAGE_TAG: &str = "latest";

/// Default namespace the e2e resources are created in
pub const DEFAULT_TEST_NAMESPACE: &str = "serving-tests";

/// Length of the random suffix appended to generated resource names
pub const RANDOM_SUFFIX_LEN: usize = 8;

/// Maximum length of a DNS-1123 label
pub const MAX_RESOURCE_NAME_LEN: usize = 63;

/// Operation name used in poll diagnostics keys
pub const WAIT_OPERATION: &str = "WaitForConfigurationState";

/// Description of the first phase of the latest-revision wait
pub const UPDATED_WITH_REVISION: &str = "ConfigurationUpdatedWithRevision";

/// Description of the second phase of the latest-revision wait
pub const READY_WITH_REVISION: &str = "ConfigurationReadyWithRevision";

/// Description attached to single-shot state checks
pub const CHECK_DESCRIPTION: &str = "CheckConfigurationState";

/// Condition type set by the controller once the latest revision serves traffic
pub const READY_CONDITION: &str = "Ready";
