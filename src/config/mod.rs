//! # Configuration
//!
//! Settings for the waiter and the resource builders, loaded from
//! environment variables with defaults.
//!
//! - `poll.rs` - Poll interval and timeout handed to `ConfigurationWaiter`
//! - `image.rs` - Registry and tag used to render test image references

mod image;
mod poll;

pub use image::ImageConfig;
pub use poll::PollConfig;

use crate::constants::DEFAULT_TEST_NAMESPACE;

/// Complete e2e test configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestConfig {
    /// Namespace the Configuration resources live in
    pub namespace: String,
    /// Poll interval and timeout
    pub poll: PollConfig,
    /// Test image location
    pub images: ImageConfig,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_TEST_NAMESPACE.to_string(),
            poll: PollConfig::default(),
            images: ImageConfig::default(),
        }
    }
}

impl TestConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            namespace: env_var_or_default_str("TEST_NAMESPACE", DEFAULT_TEST_NAMESPACE),
            poll: PollConfig::from_env(),
            images: ImageConfig::from_env(),
        }
    }
}

/// Read environment variable or return default value
pub(crate) fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read environment variable as string or return default
pub(crate) fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
