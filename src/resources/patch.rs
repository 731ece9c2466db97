//! # JSON Patch
//!
//! Build RFC 6902 patches between two versions of a Configuration.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialized JSON Patch that turns `current` into `desired`
///
/// # Errors
///
/// Returns an error if either object cannot be serialized.
pub fn create_byte_patch<T: Serialize>(current: &T, desired: &T) -> Result<Vec<u8>> {
    let current = serde_json::to_value(current).context("Failed to serialize current object")?;
    let desired = serde_json::to_value(desired).context("Failed to serialize desired object")?;
    let patch = json_patch::diff(&current, &desired);
    serde_json::to_vec(&patch).context("Failed to serialize JSON Patch")
}
