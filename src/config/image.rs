//! # Image Configuration
//!
//! Where the e2e test images are pulled from.

use super::env_var_or_default_str;
use crate::constants::{DEFAULT_DOCKER_REPO, DEFAULT_IMAGE_TAG};

/// Registry and tag of the test images
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Registry prefix, e.g. `gcr.io/my-project`
    pub docker_repo: String,
    /// Tag shared by all test images
    pub tag: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            docker_repo: DEFAULT_DOCKER_REPO.to_string(),
            tag: DEFAULT_IMAGE_TAG.to_string(),
        }
    }
}

impl ImageConfig {
    /// Load configuration from `KO_DOCKER_REPO` and `IMAGE_TAG`
    pub fn from_env() -> Self {
        Self {
            docker_repo: env_var_or_default_str("KO_DOCKER_REPO", DEFAULT_DOCKER_REPO),
            tag: env_var_or_default_str("IMAGE_TAG", DEFAULT_IMAGE_TAG),
        }
    }

    /// Full image reference for a test image name: `<repo>/<name>:<tag>`
    pub fn image_path(&self, name: &str) -> String {
        format!(
            "{}/{}:{}",
            self.docker_repo.trim_end_matches('/'),
            name,
            self.tag
        )
    }
}
