//! Shared test helpers for integration tests.
//!
//! Starts a local stand-in for the character API on an ephemeral port and
//! points the real HTTP source at it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};

use charcat_core::config::api::ApiConfig;
use charcat_core::config::query::QueryConfig;
use charcat_gateway::HttpCharacterSource;
use charcat_service::QueryClient;

/// What the stub answers for one resource.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with this JSON body
    Json(Value),
    /// Bare status code with a small error body
    Status(StatusCode),
    /// 200 with a body that is not a character document
    Malformed,
}

/// Canned responses and hit counters.
#[derive(Debug, Default)]
pub struct StubApi {
    pages: HashMap<u32, Reply>,
    characters: HashMap<String, Reply>,
    list_hits: AtomicUsize,
    detail_hits: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `results` as page `page` of `pages`.
    pub fn with_page(mut self, page: u32, pages: u32, results: Vec<Value>) -> Self {
        self.pages
            .insert(page, Reply::Json(page_body(page, pages, results)));
        self
    }

    pub fn with_page_reply(mut self, page: u32, reply: Reply) -> Self {
        self.pages.insert(page, reply);
        self
    }

    pub fn with_character(mut self, body: Value) -> Self {
        let id = body["id"].to_string();
        self.characters.insert(id, Reply::Json(body));
        self
    }

    pub fn with_character_reply(mut self, id: &str, reply: Reply) -> Self {
        self.characters.insert(id.to_string(), reply);
        self
    }

    pub fn list_hits(&self) -> usize {
        self.list_hits.load(Ordering::SeqCst)
    }

    pub fn detail_hits(&self) -> usize {
        self.detail_hits.load(Ordering::SeqCst)
    }
}

/// Test application context
pub struct TestApp {
    /// Root the HTTP source is configured with, e.g. `http://127.0.0.1:4711/api`
    pub base_url: String,
    /// The stub behind `base_url`
    pub stub: Arc<StubApi>,
}

impl TestApp {
    /// Start the stub server with the given responses.
    pub async fn spawn(stub: StubApi) -> Self {
        let stub = Arc::new(stub);
        let router = Router::new()
            .route("/api/character", get(list_handler))
            .route("/api/character/{id}", get(detail_handler))
            .with_state(Arc::clone(&stub));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().expect("Stub has no local address");
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub server failed");
        });

        Self {
            base_url: format!("http://{}/api", addr),
            stub,
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: 5,
            ..ApiConfig::default()
        }
    }

    pub fn source(&self) -> HttpCharacterSource {
        HttpCharacterSource::new(&self.api_config()).expect("Failed to build HTTP source")
    }

    /// Client with the default query policies, except a short detail backoff.
    pub fn client(&self) -> Arc<QueryClient<HttpCharacterSource>> {
        let mut config = QueryConfig::default();
        config.detail.retry_delay_ms = 10;
        config.detail.max_retry_delay_ms = 50;
        self.client_with(&config)
    }

    pub fn client_with(&self, config: &QueryConfig) -> Arc<QueryClient<HttpCharacterSource>> {
        Arc::new(QueryClient::new(Arc::new(self.source()), config))
    }
}

/// A character document shaped like the real API's.
pub fn character_json(id: u64, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{}.jpeg", id),
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
        "url": format!("https://rickandmortyapi.com/api/character/{}", id),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

fn page_body(page: u32, pages: u32, results: Vec<Value>) -> Value {
    let link = |n: u32| format!("https://rickandmortyapi.com/api/character?page={}", n);
    let next = (page < pages).then(|| link(page + 1));
    let prev = (page > 1).then(|| link(page - 1));
    let count = results.len() as u64 * u64::from(pages);
    json!({
        "info": { "count": count, "pages": pages, "next": next, "prev": prev },
        "results": results,
    })
}

async fn list_handler(
    State(stub): State<Arc<StubApi>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    stub.list_hits.fetch_add(1, Ordering::SeqCst);
    let page = params
        .get("page")
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(1);
    respond(stub.pages.get(&page), "There is nothing here")
}

async fn detail_handler(State(stub): State<Arc<StubApi>>, Path(id): Path<String>) -> Response {
    stub.detail_hits.fetch_add(1, Ordering::SeqCst);
    respond(stub.characters.get(&id), "Character not found")
}

fn respond(reply: Option<&Reply>, missing: &str) -> Response {
    match reply {
        Some(Reply::Json(body)) => axum::Json(body.clone()).into_response(),
        Some(Reply::Status(status)) => {
            (*status, axum::Json(json!({ "error": status.to_string() }))).into_response()
        }
        Some(Reply::Malformed) => (
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            "{\"results\": \"nope\"",
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, axum::Json(json!({ "error": missing }))).into_response(),
    }
}
