//! # Predicates
//!
//! Stock state checks for `wait_for_state` and `check_state`.
//!
//! A predicate maps one status snapshot to `Ok(true)` (done), `Ok(false)`
//! (not yet) or `Err` (the check itself failed). Predicates must not have
//! side effects.

use anyhow::Result;

use crate::constants::READY_CONDITION;
use crate::crd::Configuration;

/// Whether the Configuration has created a revision
///
/// # Errors
///
/// Never fails; the `Result` matches the predicate signature.
pub fn configuration_has_created_revision(config: &Configuration) -> Result<bool> {
    Ok(!config.latest_created_revision_name().is_empty())
}

/// Whether the Configuration reports a `Ready` condition with status `True`
///
/// # Errors
///
/// Never fails; the `Result` matches the predicate signature.
pub fn is_configuration_ready(config: &Configuration) -> Result<bool> {
    Ok(config
        .condition(READY_CONDITION)
        .is_some_and(|c| c.is_true()))
}

/// Predicate matching once the latest created revision differs from `prior`
///
/// With an empty `prior`, any created revision matches.
pub fn revision_created_since(prior: &str) -> impl Fn(&Configuration) -> Result<bool> + '_ {
    move |config| Ok(config.latest_created_revision_name() != prior)
}

/// Predicate matching once `revision` is the latest ready revision
pub fn revision_is_ready(revision: &str) -> impl Fn(&Configuration) -> Result<bool> + '_ {
    move |config| Ok(config.latest_ready_revision_name() == revision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{Condition, ConfigurationSpec, ConfigurationStatus};

    fn config(created: &str, ready: &str, conditions: Vec<Condition>) -> Configuration {
        let mut config = Configuration::new("cfg", ConfigurationSpec::default());
        config.status = Some(ConfigurationStatus {
            latest_created_revision_name: created.to_string(),
            latest_ready_revision_name: ready.to_string(),
            conditions,
            ..Default::default()
        });
        config
    }

    #[test]
    fn test_has_created_revision() {
        assert!(!configuration_has_created_revision(&config("", "", vec![])).unwrap());
        assert!(configuration_has_created_revision(&config("cfg-00001", "", vec![])).unwrap());
    }

    #[test]
    fn test_has_created_revision_without_status() {
        let bare = Configuration::new("cfg", ConfigurationSpec::default());
        assert!(!configuration_has_created_revision(&bare).unwrap());
    }

    #[test]
    fn test_is_ready_requires_true_ready_condition() {
        assert!(!is_configuration_ready(&config("", "", vec![])).unwrap());
        assert!(!is_configuration_ready(&config("", "", vec![Condition::new("Ready", "Unknown")])).unwrap());
        assert!(!is_configuration_ready(&config("", "", vec![Condition::new("Other", "True")])).unwrap());
        assert!(is_configuration_ready(&config("", "", vec![Condition::new("Ready", "True")])).unwrap());
    }

    #[test]
    fn test_revision_created_since_empty_prior() {
        let check = revision_created_since("");
        assert!(!check(&config("", "", vec![])).unwrap());
        assert!(check(&config("cfg-00001", "", vec![])).unwrap());
    }

    #[test]
    fn test_revision_created_since_known_prior() {
        let check = revision_created_since("cfg-00001");
        assert!(!check(&config("cfg-00001", "cfg-00001", vec![])).unwrap());
        assert!(check(&config("cfg-00002", "cfg-00001", vec![])).unwrap());
    }

    #[test]
    fn test_revision_is_ready_matches_exact_name() {
        let check = revision_is_ready("cfg-00002");
        assert!(!check(&config("cfg-00002", "cfg-00001", vec![])).unwrap());
        assert!(check(&config("cfg-00002", "cfg-00002", vec![])).unwrap());
    }
}
