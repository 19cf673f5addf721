// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests across service, session, presentation and export.
//!
//! Each test builds its own controller; tests are independent and
//! order-insensitive.

use std::sync::Arc;

use architect_client::{build_service, GenerationClient, HttpGenerationService};
use architect_config::model::{ServiceConfig, ServiceMode};
use architect_core::{ArtifactSink, Role, Turn};
use architect_present::{export_text, highlight, present, IterationBadge, LocalSink};
use architect_session::{CycleOutcome, GenerationController, Phase};
use architect_test_utils::{fixtures, TestHarness};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn live_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        mode: ServiceMode::Live,
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..ServiceConfig::default()
    }
}

fn login_card_body() -> serde_json::Value {
    serde_json::json!({
        "template": "<div></div>",
        "typescript": "class X {}",
        "success": true,
        "iterations": 1,
        "validation": {"is_valid": true, "errors": [], "warnings": [], "passed": ["ok"]},
        "audit_trail": [{"attempt": 1, "validation": {"is_valid": true, "errors": []}}]
    })
}

// ---- Round trip over HTTP ----

#[tokio::test]
async fn login_card_round_trip_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_card_body()))
        .expect(1)
        .mount(&server)
        .await;

    let service = build_service(&live_config(&server.uri())).unwrap();
    let controller = GenerationController::new(service);

    let outcome = controller.submit("A login card").await.unwrap();
    assert_eq!(outcome, CycleOutcome::Committed);

    let turns = controller.turns().await;
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1].role(), Role::Assistant);

    let result = controller.current_result().await.unwrap();
    assert_eq!(result, fixtures::login_card_result());

    let model = present(&result.validation, &result.audit_trail);
    assert_eq!(model.headline, "All checks passed");
    assert_eq!(IterationBadge::new(result.iteration_count).to_string(), "1 pass");
}

#[tokio::test]
async fn http_500_rolls_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = GenerationClient::new(&server.uri(), std::time::Duration::from_secs(5), 0).unwrap();
    let controller = GenerationController::new(Arc::new(HttpGenerationService::with_client(client)));

    let outcome = controller.submit("X").await.unwrap();

    assert!(matches!(outcome, CycleOutcome::RolledBack { ref error } if error.contains("500")));
    assert_eq!(controller.turn_count().await, 0);
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.error().await.unwrap().contains("500"));
}

#[tokio::test]
async fn unreachable_backend_rolls_back() {
    // Port 9 (discard) is closed on test hosts.
    let service = build_service(&live_config("http://127.0.0.1:9")).unwrap();
    let controller = GenerationController::new(service);

    let outcome = controller.submit("A login card").await.unwrap();

    assert!(matches!(outcome, CycleOutcome::RolledBack { .. }));
    assert_eq!(controller.turn_count().await, 0);
}

// ---- Sequential prompts ----

#[tokio::test]
async fn sequential_prompts_keep_order_and_latest_result() {
    let harness = TestHarness::builder()
        .with_replies(vec![
            Ok(fixtures::result_with_template("<p>one</p>")),
            Ok(fixtures::result_with_template("<p>two</p>")),
        ])
        .build();

    harness.submit("one").await.unwrap();
    harness.submit("two").await.unwrap();

    let turns = harness.controller.turns().await;
    let roles: Vec<Role> = turns.iter().map(Turn::role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(harness.current_result().await.unwrap().template, "<p>two</p>");
}

// ---- Demo mode ----

#[tokio::test]
async fn demo_mode_generates_offline() {
    let config = ServiceConfig {
        demo_latency_ms: 0,
        ..ServiceConfig::default()
    };
    let controller = GenerationController::new(build_service(&config).unwrap());

    controller.submit("A login card with glassmorphism effect").await.unwrap();

    let result = controller.current_result().await.unwrap();
    assert!(result.success);
    assert!(!result.template.is_empty());
    assert!(highlight(&result.component_source, "ts").contains("color:#569cd6"));
}

// ---- Export ----

#[tokio::test]
async fn committed_result_exports_to_file() {
    let harness = TestHarness::builder().build();
    harness.submit("A login card").await.unwrap();
    let result = harness.current_result().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let sink = LocalSink::new(dir.path(), "generated-component.ts");
    sink.export_artifact(&export_text(&result)).unwrap();

    let written = std::fs::read_to_string(dir.path().join("generated-component.ts")).unwrap();
    assert!(written.starts_with("<!-- Template -->\n<div></div>"));
    assert!(written.ends_with("/* TypeScript */\nclass X {}"));
}
