//! Integration tests for infinite-scroll list loading over HTTP.

mod helpers;

use axum::http::StatusCode;

use charcat_service::{ListSession, ListState};
use helpers::{Reply, StubApi, TestApp, character_json};

fn names(session: &ListSession<charcat_gateway::HttpCharacterSource>) -> Vec<String> {
    session
        .controller()
        .view()
        .iter()
        .map(|c| c.name.clone())
        .collect()
}

fn rick_and_morty() -> StubApi {
    StubApi::new()
        .with_page(1, 2, vec![character_json(1, "Rick Sanchez", "Alive")])
        .with_page(2, 2, vec![character_json(2, "Morty Smith", "Alive")])
}

#[tokio::test]
async fn test_scrolls_to_the_end() {
    let app = TestApp::spawn(rick_and_morty()).await;
    let mut session = ListSession::new(app.client());

    session.start();
    assert_eq!(session.settle().await, ListState::Populated { has_more: true });
    assert_eq!(names(&session), vec!["Rick Sanchez"]);

    assert!(session.set_sentinel_visible(true).is_some());
    assert_eq!(session.settle().await, ListState::Populated { has_more: false });
    assert_eq!(names(&session), vec!["Rick Sanchez", "Morty Smith"]);

    session.set_sentinel_visible(false);
    assert_eq!(session.set_sentinel_visible(true), None);
    assert_eq!(app.stub.list_hits(), 2);

    let snapshot = session.controller().snapshot();
    assert_eq!(snapshot.total, Some(2));
    assert!(snapshot.state.is_exhausted());
}

#[tokio::test]
async fn test_empty_first_page() {
    let app = TestApp::spawn(StubApi::new().with_page(1, 1, vec![])).await;
    let mut session = ListSession::new(app.client());

    session.start();
    let state = session.settle().await;

    assert_eq!(state, ListState::Populated { has_more: false });
    assert!(session.controller().collection().is_empty());
    assert_eq!(session.controller().last_error(), None);
}

#[tokio::test]
async fn test_first_page_failure_is_not_retried() {
    let app = TestApp::spawn(
        StubApi::new().with_page_reply(1, Reply::Status(StatusCode::INTERNAL_SERVER_ERROR)),
    )
    .await;
    let mut session = ListSession::new(app.client());

    session.start();
    assert_eq!(session.settle().await, ListState::Errored);

    let snapshot = session.controller().snapshot();
    assert_eq!(snapshot.loaded, 0);
    assert_eq!(snapshot.banner, Some("Server error. Please try again later"));
    assert_eq!(app.stub.list_hits(), 1);
}

#[tokio::test]
async fn test_search_narrows_loaded_pages_only() {
    let app = TestApp::spawn(rick_and_morty()).await;
    let mut session = ListSession::new(app.client());

    session.start();
    session.settle().await;
    session.set_search("MORTY");

    assert!(names(&session).is_empty());
    assert_eq!(app.stub.list_hits(), 1);

    session.set_sentinel_visible(true);
    session.settle().await;
    assert_eq!(names(&session), vec!["Morty Smith"]);
}

#[tokio::test]
async fn test_reload_fetches_page_one_again() {
    let app = TestApp::spawn(rick_and_morty()).await;
    let mut session = ListSession::new(app.client());

    session.start();
    session.settle().await;
    session.set_sentinel_visible(true);
    session.settle().await;

    session.reload();
    assert_eq!(session.settle().await, ListState::Populated { has_more: true });
    assert_eq!(names(&session), vec!["Rick Sanchez"]);
    assert_eq!(app.stub.list_hits(), 3);
}
