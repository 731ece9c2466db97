//! # Latest Revision Wait Tests
//!
//! Both phases share one scripted status sequence: phase one consumes steps
//! until a new revision is created, phase two continues from there.

mod common;

use common::{snapshot, ScriptedClient, Step};
use configuration_waiter::config::PollConfig;
use configuration_waiter::constants::{READY_WITH_REVISION, UPDATED_WITH_REVISION};
use configuration_waiter::resources::ResourceNames;
use configuration_waiter::waiter::{ConfigurationWaiter, WaitError};
use std::time::Duration;
use tokio::time::Instant;

const INTERVAL: Duration = Duration::from_secs(1);
const TIMEOUT: Duration = Duration::from_secs(10);

fn waiter(client: ScriptedClient) -> ConfigurationWaiter<ScriptedClient> {
    ConfigurationWaiter::new(client, PollConfig::new(INTERVAL, TIMEOUT))
}

fn steps(name: &str, states: &[(&str, &str)]) -> Vec<Step> {
    states
        .iter()
        .map(|(created, ready)| Step::Status(snapshot(name, created, ready)))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_first_revision_created_then_ready() {
    // Created at step 3, ready at the seventh phase-two step
    let mut states = vec![("", ""), ("", ""), ("rev-1", "")];
    states.extend([("rev-1", ""); 6]);
    states.push(("rev-1", "rev-1"));
    let waiter = waiter(ScriptedClient::new().script("cfg", steps("cfg", &states)));

    let revision = waiter
        .wait_for_latest_revision("cfg", "")
        .await
        .expect("converges");

    assert_eq!(revision, "rev-1");
    assert_eq!(waiter.client().fetches("cfg"), 10);
    assert_eq!(waiter.client().mutations(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_stale_ready_revision_is_not_mistaken_for_new_one() {
    // rev-1 stays ready while rev-2 is rolling out
    let waiter = waiter(ScriptedClient::new().script(
        "cfg",
        steps(
            "cfg",
            &[
                ("rev-1", "rev-1"),
                ("rev-2", "rev-1"),
                ("rev-2", "rev-1"),
                ("rev-2", "rev-1"),
                ("rev-2", "rev-2"),
            ],
        ),
    ));

    let revision = waiter
        .wait_for_latest_revision("cfg", "rev-1")
        .await
        .expect("converges on rev-2");

    assert_eq!(revision, "rev-2");
    assert_eq!(waiter.client().fetches("cfg"), 5);
}

#[tokio::test(start_paused = true)]
async fn test_ready_detected_before_created_is_ignored() {
    // The ready field reaching a value first must not end phase one early
    let waiter = waiter(ScriptedClient::new().script(
        "cfg",
        steps("cfg", &[("", "rev-1"), ("rev-1", "rev-1")]),
    ));

    let revision = waiter
        .wait_for_latest_revision("cfg", "")
        .await
        .expect("converges");

    assert_eq!(revision, "rev-1");
    assert_eq!(waiter.client().fetches("cfg"), 3);
}

#[tokio::test(start_paused = true)]
async fn test_never_ready_reports_candidate_but_fails() {
    let waiter = waiter(ScriptedClient::new().script(
        "cfg",
        steps("cfg", &[("", ""), ("rev-1", "")]),
    ));

    let started = Instant::now();
    let err = waiter
        .wait_for_latest_revision("cfg", "")
        .await
        .expect_err("rev-1 never becomes ready");

    // Phase two gets a fresh timeout after the one-interval phase one
    assert!(started.elapsed() >= INTERVAL + TIMEOUT);
    assert_eq!(err.candidate_revision(), Some("rev-1"));
    assert_eq!(err.outcome(), "revision_not_ready");
    match err {
        WaitError::RevisionNotReady {
            name,
            revision,
            source,
        } => {
            assert_eq!(name, "cfg");
            assert_eq!(revision, "rev-1");
            match *source {
                WaitError::Timeout { description, .. } => {
                    assert_eq!(description, READY_WITH_REVISION);
                }
                other => panic!("expected inner timeout, got {other:?}"),
            }
        }
        other => panic!("expected revision-not-ready, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_phase_one_timeout_skips_phase_two() {
    let waiter = waiter(ScriptedClient::new().script("cfg", steps("cfg", &[("rev-1", "rev-1")])));

    let started = Instant::now();
    let err = waiter
        .wait_for_latest_revision("cfg", "rev-1")
        .await
        .expect_err("no new revision");
    let elapsed = started.elapsed();

    assert!(elapsed >= TIMEOUT && elapsed <= TIMEOUT + INTERVAL, "{elapsed:?}");
    assert!(err.candidate_revision().is_none());
    match err {
        WaitError::Timeout { description, .. } => assert_eq!(description, UPDATED_WITH_REVISION),
        other => panic!("expected phase-one timeout, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_phase_two_fetch_error_is_wrapped() {
    let waiter = waiter(ScriptedClient::new().script(
        "cfg",
        [
            Step::Status(snapshot("cfg", "rev-1", "")),
            Step::Fail("connection reset".to_string()),
        ],
    ));

    let err = waiter
        .wait_for_latest_revision("cfg", "")
        .await
        .expect_err("fetch failed in phase two");

    assert_eq!(err.candidate_revision(), Some("rev-1"));
    assert_eq!(waiter.client().fetches("cfg"), 2);
    match err {
        WaitError::RevisionNotReady { source, .. } => {
            assert!(matches!(*source, WaitError::Fetch { .. }), "{source:?}");
        }
        other => panic!("expected revision-not-ready, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_config_latest_revision_uses_known_revision_as_prior() {
    let mut names = ResourceNames::new("cfg", "helloworld");
    names.revision = "rev-1".to_string();
    let waiter = waiter(ScriptedClient::new().script(
        "cfg",
        steps("cfg", &[("rev-1", "rev-1"), ("rev-2", "rev-1"), ("rev-2", "rev-2")]),
    ));

    let revision = waiter
        .wait_for_config_latest_revision(&names)
        .await
        .expect("converges");

    assert_eq!(revision, "rev-2");
}

#[tokio::test(start_paused = true)]
async fn test_unpopulated_status_with_prior_converges_on_empty_name() {
    let waiter = waiter(ScriptedClient::new().script("cfg", steps("cfg", &[("", "")])));

    let revision = waiter
        .wait_for_latest_revision("cfg", "rev-1")
        .await
        .expect("empty name differs from prior and matches empty ready name");

    assert_eq!(revision, "");
    assert_eq!(waiter.client().fetches("cfg"), 2);
}
