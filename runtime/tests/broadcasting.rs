//! Integration tests for Store action broadcasting
//!
//! A command whose effect reports back through a result action, observed
//! the way HTTP handlers observe it.

#![allow(clippy::unwrap_used)]

use eventos_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};
use eventos_runtime::{Store, StoreError};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum TestAction {
    /// Command: load the record named `slug`
    Load { slug: String },
    /// Result: record loaded
    Loaded { slug: String, step: u32 },
    /// Result: record missing
    LoadFailed { slug: String },
    /// Command without effects
    Select { slug: String },
}

#[derive(Debug, Clone, Default)]
struct TestState {
    loaded: Vec<String>,
    selected: Option<String>,
}

struct TestEnvironment {
    latency: Duration,
}

struct TestReducer;

impl Reducer for TestReducer {
    type State = TestState;
    type Action = TestAction;
    type Environment = TestEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TestAction::Load { slug } => {
                let latency = env.latency;
                smallvec![Effect::future(async move {
                    tokio::time::sleep(latency).await;
                    if slug == "missing" {
                        Some(TestAction::LoadFailed { slug })
                    } else {
                        Some(TestAction::Loaded { slug, step: 1 })
                    }
                })]
            },
            TestAction::Loaded { slug, step } => {
                state.loaded.push(format!("{slug}#{step}"));
                if step < 2 {
                    smallvec![Effect::future(async move {
                        Some(TestAction::Loaded { slug, step: step + 1 })
                    })]
                } else {
                    smallvec![Effect::None]
                }
            },
            TestAction::LoadFailed { .. } => smallvec![Effect::None],
            TestAction::Select { slug } => {
                state.selected = Some(slug);
                smallvec![Effect::None]
            },
        }
    }
}

fn store() -> Store<TestState, TestAction, TestEnvironment, TestReducer> {
    Store::new(
        TestState::default(),
        TestReducer,
        TestEnvironment {
            latency: Duration::from_millis(5),
        },
    )
}

fn is_result(action: &TestAction) -> bool {
    matches!(
        action,
        TestAction::Loaded { .. } | TestAction::LoadFailed { .. }
    )
}

#[tokio::test]
async fn waits_for_success_result() {
    let store = store();

    let result = store
        .send_and_wait_for(
            TestAction::Load {
                slug: "sbc".to_string(),
            },
            is_result,
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        TestAction::Loaded {
            slug: "sbc".to_string(),
            step: 1
        }
    );
    // Follow-up actions have settled by the time the result is returned
    assert_eq!(store.state(|s| s.loaded.clone()).await, vec!["sbc#1", "sbc#2"]);
}

#[tokio::test]
async fn waits_for_failure_result() {
    let store = store();

    let result = store
        .send_and_wait_for(
            TestAction::Load {
                slug: "missing".to_string(),
            },
            is_result,
            Duration::from_secs(1),
        )
        .await;

    assert_eq!(
        result,
        Ok(TestAction::LoadFailed {
            slug: "missing".to_string()
        })
    );
    assert!(store.state(|s| s.loaded.is_empty()).await);
}

#[tokio::test]
async fn sent_actions_are_not_broadcast() {
    let store = store();

    let result = store
        .send_and_wait_for(
            TestAction::Select {
                slug: "sbc".to_string(),
            },
            |action| matches!(action, TestAction::Select { .. }),
            Duration::from_millis(20),
        )
        .await;

    assert_eq!(result, Err(StoreError::Timeout));
    assert_eq!(store.state(|s| s.selected.clone()).await.as_deref(), Some("sbc"));
}

#[tokio::test]
async fn every_subscriber_sees_produced_actions() {
    let store = store();
    let mut first = store.subscribe_actions();
    let mut second = store.subscribe_actions();

    store
        .send(TestAction::Load {
            slug: "sbc".to_string(),
        })
        .await;

    for receiver in [&mut first, &mut second] {
        let mut seen = Vec::new();
        while let Ok(action) = receiver.try_recv() {
            seen.push(action);
        }
        assert_eq!(
            seen,
            vec![
                TestAction::Loaded {
                    slug: "sbc".to_string(),
                    step: 1
                },
                TestAction::Loaded {
                    slug: "sbc".to_string(),
                    step: 2
                },
            ]
        );
    }
}

#[tokio::test]
async fn concurrent_requests_get_their_own_result() {
    let store = store();

    let (a, b) = tokio::join!(
        store.send_and_wait_for(
            TestAction::Load {
                slug: "a".to_string(),
            },
            |action| matches!(action, TestAction::Loaded { slug, .. } if slug == "a"),
            Duration::from_secs(1),
        ),
        store.send_and_wait_for(
            TestAction::Load {
                slug: "b".to_string(),
            },
            |action| matches!(action, TestAction::Loaded { slug, .. } if slug == "b"),
            Duration::from_secs(1),
        ),
    );

    assert!(matches!(a, Ok(TestAction::Loaded { slug, .. }) if slug == "a"));
    assert!(matches!(b, Ok(TestAction::Loaded { slug, .. }) if slug == "b"));
}

#[tokio::test]
async fn small_capacity_lags_but_still_matches() {
    let store = Store::with_broadcast_capacity(
        TestState::default(),
        TestReducer,
        TestEnvironment {
            latency: Duration::ZERO,
        },
        1,
    );

    let result = store
        .send_and_wait_for(
            TestAction::Load {
                slug: "sbc".to_string(),
            },
            |action| matches!(action, TestAction::Loaded { step: 2, .. }),
            Duration::from_secs(1),
        )
        .await;

    assert!(matches!(result, Ok(TestAction::Loaded { step: 2, .. })));
}
