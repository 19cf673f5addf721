// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end session cycles through the test harness.

use architect_core::{ArchitectError, Role, ResultView, Turn};
use architect_test_utils::{fixtures, TestHarness};

#[tokio::test]
async fn login_card_round_trip() {
    let harness = TestHarness::builder()
        .with_replies(vec![Ok(fixtures::login_card_result())])
        .build();

    harness.submit("A login card").await.unwrap();

    let snapshot = harness.controller.snapshot().await;
    assert_eq!(snapshot.turns.len(), 2);
    assert_eq!(snapshot.turns[0].prompt(), "A login card");
    assert_eq!(snapshot.turns[1].role(), Role::Assistant);
    assert_eq!(snapshot.view, ResultView::Template);
    let current = snapshot.current.expect("committed result");
    assert!(current.success);
    assert_eq!(current.iteration_count, 1);
    assert_eq!(current.validation.passed_checks, vec!["ok"]);
    assert_eq!(current.audit_trail.len(), 1);
}

#[tokio::test]
async fn service_failure_leaves_empty_log() {
    let harness = TestHarness::builder()
        .with_replies(vec![Err(fixtures::service_error(500))])
        .build();

    harness.submit("X").await.unwrap();

    let snapshot = harness.controller.snapshot().await;
    assert!(snapshot.turns.is_empty());
    assert!(snapshot.current.is_none());
    assert!(snapshot.error.unwrap().contains("500"));
}

#[tokio::test]
async fn failure_after_success_keeps_history() {
    let harness = TestHarness::builder()
        .with_replies(vec![
            Ok(fixtures::result_with_template("<p>kept</p>")),
            Err(fixtures::transport_error()),
        ])
        .build();

    harness.submit("first").await.unwrap();
    harness.submit("second").await.unwrap();

    let turns = harness.controller.turns().await;
    let prompts: Vec<&str> = turns.iter().map(Turn::prompt).collect();
    assert_eq!(prompts, vec!["first", "first"]);
    assert_eq!(
        harness.current_result().await.map(|r| r.template).as_deref(),
        Some("<p>kept</p>")
    );
}

#[tokio::test]
async fn concurrent_submit_sends_one_request() {
    let harness = TestHarness::builder().gated().build();

    let controller = harness.controller.clone();
    let first = tokio::spawn(async move { controller.submit("first").await });

    let mut phases = harness.controller.subscribe();
    phases
        .wait_for(|p| *p == architect_session::Phase::Pending)
        .await
        .unwrap();

    let rejected = harness.submit("second").await;
    assert!(matches!(rejected, Err(ArchitectError::RequestInFlight)));

    harness.gate().expect("gated harness").open_one();
    first.await.unwrap().unwrap();

    assert_eq!(harness.service.call_count().await, 1);
    assert_eq!(harness.controller.turn_count().await, 2);
}

#[tokio::test]
async fn exhausted_repair_loop_is_still_committed() {
    let harness = TestHarness::builder()
        .with_replies(vec![Ok(fixtures::failing_result())])
        .build();

    harness.submit("A dark-mode notification toast").await.unwrap();

    let current = harness.current_result().await.unwrap();
    assert!(!current.success);
    assert_eq!(current.iteration_count, 3);
    assert_eq!(current.validation.error_count(), 2);
    assert!(harness.controller.error().await.is_none());
}
