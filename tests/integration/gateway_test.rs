//! Integration tests for the HTTP character source.

mod helpers;

use axum::http::StatusCode;

use charcat_core::ErrorKind;
use charcat_core::config::api::ApiConfig;
use charcat_entity::CharacterStatus;
use charcat_gateway::{CharacterSource, HttpCharacterSource};
use helpers::{Reply, StubApi, TestApp, character_json};

#[tokio::test]
async fn test_list_page_is_decoded() {
    let app = TestApp::spawn(StubApi::new().with_page(
        1,
        3,
        vec![
            character_json(1, "Rick Sanchez", "Alive"),
            character_json(2, "Morty Smith", "Alive"),
        ],
    ))
    .await;

    let envelope = app.source().list_characters(1).await.unwrap();

    assert_eq!(envelope.results.len(), 2);
    assert_eq!(envelope.results[0].name, "Rick Sanchez");
    assert_eq!(envelope.info.pages, 3);
    assert!(envelope.info.has_next());
    assert!(!envelope.info.has_previous());
}

#[tokio::test]
async fn test_character_is_decoded() {
    let app = TestApp::spawn(
        StubApi::new().with_character(character_json(244, "Mr. Poopybutthole", "unknown")),
    )
    .await;

    let character = app.source().character_by_id("244").await.unwrap();

    assert_eq!(character.id, 244);
    assert_eq!(character.status, CharacterStatus::Unknown);
    assert_eq!(character.episode_count(), 2);
    assert_eq!(character.created_date(), "2017-11-04");
    assert_eq!(app.stub.detail_hits(), 1);
}

#[tokio::test]
async fn test_missing_page_is_not_found() {
    let app = TestApp::spawn(StubApi::new()).await;

    let err = app.source().list_characters(50).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "No characters found");
}

#[tokio::test]
async fn test_internal_error_is_a_server_error() {
    let app = TestApp::spawn(
        StubApi::new().with_page_reply(1, Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)),
    )
    .await;

    let err = app.source().list_characters(1).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Server);
    assert_eq!(err.message, "Server error. Please try again later");
}

#[tokio::test]
async fn test_other_statuses_are_generic_failures() {
    let app = TestApp::spawn(
        StubApi::new()
            .with_page_reply(1, Reply::Status(StatusCode::IM_A_TEAPOT))
            .with_character_reply("1", Reply::Status(StatusCode::SERVICE_UNAVAILABLE)),
    )
    .await;
    let source = app.source();

    let err = source.list_characters(1).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Fetch);
    assert_eq!(
        err.message,
        "Failed to fetch characters. Please check your internet connection"
    );

    let err = source.character_by_id("1").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Fetch);
    assert_eq!(
        err.message,
        "Failed to fetch character. Please check your internet connection"
    );
}

#[tokio::test]
async fn test_malformed_body_is_a_fetch_error() {
    let app = TestApp::spawn(StubApi::new().with_page_reply(1, Reply::Malformed)).await;

    let err = app.source().list_characters(1).await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Fetch);
    assert_eq!(err.message, "Failed to read characters from the server response");
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpCharacterSource::new(&ApiConfig {
        base_url: format!("http://{}/api", addr),
        timeout_seconds: 2,
        ..ApiConfig::default()
    })
    .unwrap();

    let err = source.character_by_id("1").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Network);
    assert!(err.kind.is_retryable());
    assert_eq!(
        err.message,
        "Failed to fetch character. Please check your internet connection"
    );
}
