//! # Resource Names
//!
//! Names of the objects a single e2e test works with, plus the DNS-1123
//! validation applied before any API call.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{MAX_RESOURCE_NAME_LEN, RANDOM_SUFFIX_LEN};

static DNS1123_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$")
        .expect("Failed to compile DNS-1123 regex - this should never happen")
});

/// Names used by one test
///
/// `revision` holds the revision the test last observed. It is empty before
/// the Configuration produced its first revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceNames {
    /// Name of the Configuration resource
    pub config: String,
    /// Last known revision name
    pub revision: String,
    /// Test image name, rendered through `ImageConfig::image_path`
    pub image: String,
}

impl ResourceNames {
    pub fn new(config: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            config: config.into(),
            revision: String::new(),
            image: image.into(),
        }
    }

    /// Names with a random suffix so parallel tests never collide
    pub fn for_test(base: &str, image: impl Into<String>) -> Self {
        Self::new(append_random_string(base), image)
    }
}

/// Append `-<random hex>` to `prefix`, truncating the prefix if needed to stay
/// within the DNS-1123 label limit
///
/// An empty prefix yields the random part alone.
pub fn append_random_string(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let suffix = &suffix[..RANDOM_SUFFIX_LEN];
    let max_prefix = MAX_RESOURCE_NAME_LEN - RANDOM_SUFFIX_LEN - 1;
    let prefix = prefix.to_lowercase();
    let mut end = prefix.len().min(max_prefix);
    while !prefix.is_char_boundary(end) {
        end -= 1;
    }
    let prefix = prefix[..end].trim_end_matches('-');
    if prefix.is_empty() {
        return suffix.to_string();
    }
    format!("{prefix}-{suffix}")
}

/// Validate a resource name as a DNS-1123 label
///
/// # Errors
///
/// Returns a human readable reason when the name is empty, too long, or
/// contains characters outside `[a-z0-9-]`.
pub fn validate_resource_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.len() > MAX_RESOURCE_NAME_LEN {
        return Err(format!(
            "name must be no more than {MAX_RESOURCE_NAME_LEN} characters, got {}",
            name.len()
        ));
    }
    if !DNS1123_LABEL.is_match(name) {
        return Err(
            "name must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_test_names_are_unique_and_valid() {
        let first = ResourceNames::for_test("helloworld", "helloworld");
        let second = ResourceNames::for_test("helloworld", "helloworld");
        assert_ne!(first.config, second.config);
        assert!(first.config.starts_with("helloworld-"));
        assert_eq!(first.config.len(), "helloworld-".len() + RANDOM_SUFFIX_LEN);
        assert!(first.revision.is_empty());
        assert_eq!(validate_resource_name(&first.config), Ok(()));
    }

    #[test]
    fn test_append_random_string_truncates_long_prefix() {
        let long = "a".repeat(100);
        let name = append_random_string(&long);
        assert_eq!(name.len(), MAX_RESOURCE_NAME_LEN);
        assert_eq!(validate_resource_name(&name), Ok(()));
    }

    #[test]
    fn test_append_random_string_with_empty_prefix_is_valid() {
        for prefix in ["", "-"] {
            let name = append_random_string(prefix);
            assert_eq!(name.len(), RANDOM_SUFFIX_LEN);
            assert_eq!(validate_resource_name(&name), Ok(()));
        }
    }

    #[test]
    fn test_append_random_string_truncates_multibyte_prefix_on_char_boundary() {
        let long = "é".repeat(40);
        let name = append_random_string(&long);
        assert!(name.len() <= MAX_RESOURCE_NAME_LEN, "{} bytes", name.len());
        assert!(name.starts_with('é'));
    }

    #[test]
    fn test_append_random_string_lowercases_prefix() {
        let name = append_random_string("HelloWorld");
        assert!(name.starts_with("helloworld-"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(validate_resource_name("").is_err());
    }

    #[test]
    fn test_validate_rejects_invalid_characters() {
        for name in ["Upper", "under_score", "-leading", "trailing-", "dot.ted"] {
            assert!(
                validate_resource_name(name).is_err(),
                "'{name}' should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_long_name() {
        assert!(validate_resource_name(&"a".repeat(64)).is_err());
        assert_eq!(validate_resource_name(&"a".repeat(63)), Ok(()));
    }
}
