//! Common test utilities for waiter integration tests
//!
//! Provides a scripted in-memory `ConfigurationClient`: every `get` on a name
//! pops the next scripted response for that name, and the last response
//! repeats once the script runs out.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use anyhow::Result;
use async_trait::async_trait;
use configuration_waiter::client::ConfigurationClient;
use configuration_waiter::crd::{Condition, Configuration, ConfigurationSpec, ConfigurationStatus};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use thiserror::Error;

/// Error returned by scripted fetch failures
#[derive(Debug, Error, PartialEq, Eq)]
#[error("scripted fetch failure: {0}")]
pub struct ScriptedFetchError(pub String);

/// One scripted `get` response
#[derive(Debug, Clone)]
pub enum Step {
    Status(Configuration),
    Fail(String),
}

/// Build a Configuration snapshot with the two revision fields set
pub fn snapshot(name: &str, created: &str, ready: &str) -> Configuration {
    let mut config = Configuration::new(name, ConfigurationSpec::default());
    config.status = Some(ConfigurationStatus {
        latest_created_revision_name: created.to_string(),
        latest_ready_revision_name: ready.to_string(),
        ..Default::default()
    });
    config
}

/// Snapshot with a Ready condition
pub fn ready_snapshot(name: &str, status: &str) -> Configuration {
    let mut config = snapshot(name, "", "");
    if let Some(s) = config.status.as_mut() {
        s.conditions.push(Condition::new("Ready", status));
    }
    config
}

#[derive(Debug, Default)]
pub struct ScriptedClient {
    scripts: Mutex<HashMap<String, VecDeque<Step>>>,
    last: Mutex<HashMap<String, Step>>,
    fetches: Mutex<HashMap<String, usize>>,
    creates: AtomicUsize,
    patches: Mutex<Vec<(String, Vec<u8>)>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append steps to the script of `name`
    pub fn script(self, name: &str, steps: impl IntoIterator<Item = Step>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default()
            .extend(steps);
        self
    }

    /// Number of `get` calls made for `name`
    pub fn fetches(&self, name: &str) -> usize {
        self.fetches.lock().unwrap().get(name).copied().unwrap_or(0)
    }

    /// Number of mutating calls made on the client
    pub fn mutations(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.patches.lock().unwrap().len()
    }

    /// Patches submitted so far, in order
    pub fn patches(&self) -> Vec<(String, Vec<u8>)> {
        self.patches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigurationClient for ScriptedClient {
    async fn get(&self, name: &str) -> Result<Configuration> {
        *self.fetches.lock().unwrap().entry(name.to_string()).or_default() += 1;

        let next = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(name)
            .and_then(VecDeque::pop_front);
        let step = match next {
            Some(step) => {
                self.last.lock().unwrap().insert(name.to_string(), step.clone());
                step
            }
            None => self
                .last
                .lock()
                .unwrap()
                .get(name)
                .cloned()
                .unwrap_or_else(|| Step::Fail(format!("configuration {name} not found"))),
        };

        match step {
            Step::Status(config) => Ok(config),
            Step::Fail(message) => Err(ScriptedFetchError(message).into()),
        }
    }

    async fn create(&self, config: &Configuration) -> Result<Configuration> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let mut stored = config.clone();
        stored.metadata.generation = Some(1);
        Ok(stored)
    }

    async fn patch(&self, name: &str, patch_bytes: &[u8]) -> Result<Configuration> {
        self.patches
            .lock()
            .unwrap()
            .push((name.to_string(), patch_bytes.to_vec()));
        let mut stored = Configuration::new(name, ConfigurationSpec::default());
        stored.metadata.generation = Some(2);
        Ok(stored)
    }
}
