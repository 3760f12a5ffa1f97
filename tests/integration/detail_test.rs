//! Integration tests for resolving single characters over HTTP.

mod helpers;

use axum::http::StatusCode;

use charcat_cache::QueryState;
use charcat_core::ErrorKind;
use charcat_core::config::query::QueryConfig;
use charcat_service::DetailResolver;
use helpers::{Reply, StubApi, TestApp, character_json};

#[tokio::test]
async fn test_known_character_resolves() {
    let app =
        TestApp::spawn(StubApi::new().with_character(character_json(1, "Rick Sanchez", "Alive")))
            .await;
    let resolver = DetailResolver::new(app.client());

    let state = resolver.resolve(Some("1")).await;

    let character = state.data().expect("character loaded");
    assert_eq!(character.name, "Rick Sanchez");
    assert_eq!(character.location.name, "Citadel of Ricks");
}

#[tokio::test]
async fn test_unknown_character_is_not_found_without_retry() {
    let app = TestApp::spawn(StubApi::new()).await;
    let resolver = DetailResolver::new(app.client());

    let state = resolver.resolve(Some("999")).await;

    let err = state.error().expect("lookup failed");
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Character not found");
    assert_eq!(app.stub.detail_hits(), 1);
}

#[tokio::test]
async fn test_server_errors_are_retried_then_reported() {
    let app = TestApp::spawn(
        StubApi::new().with_character_reply("5", Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)),
    )
    .await;
    let resolver = DetailResolver::new(app.client());

    let state = resolver.resolve(Some("5")).await;

    assert_eq!(state.error().map(|e| e.kind), Some(ErrorKind::Server));
    assert_eq!(app.stub.detail_hits(), 4);
}

#[tokio::test]
async fn test_blank_id_fetches_nothing() {
    let app = TestApp::spawn(StubApi::new()).await;
    let resolver = DetailResolver::new(app.client());

    assert_eq!(resolver.resolve(None).await, QueryState::Idle);
    assert_eq!(resolver.resolve(Some("  ")).await, QueryState::Idle);
    assert_eq!(app.stub.detail_hits(), 0);
}

#[tokio::test]
async fn test_fresh_detail_is_reused() {
    let app =
        TestApp::spawn(StubApi::new().with_character(character_json(2, "Morty Smith", "Alive")))
            .await;
    let mut config = QueryConfig::default();
    config.detail.stale_seconds = 60;
    let resolver = DetailResolver::new(app.client_with(&config));

    for _ in 0..3 {
        assert!(resolver.resolve(Some("2")).await.data().is_some());
    }

    assert_eq!(app.stub.detail_hits(), 1);
}
