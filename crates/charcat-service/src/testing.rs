//! In-memory character source for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use charcat_core::error::AppError;
use charcat_core::result::AppResult;
use charcat_entity::{Character, CharacterStatus, PageEnvelope, PageInfo, ResourceRef};
use charcat_gateway::{CharacterSource, Resource};

/// Build a character with plausible defaults.
pub fn character(id: u64, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
        origin: ResourceRef {
            name: "Earth (C-137)".to_string(),
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
        },
        location: ResourceRef {
            name: "Citadel of Ricks".to_string(),
            url: "https://rickandmortyapi.com/api/location/3".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episode: vec!["https://rickandmortyapi.com/api/episode/1".to_string()],
        url: format!("https://rickandmortyapi.com/api/character/{id}"),
        created: Utc.with_ymd_and_hms(2017, 11, 4, 18, 48, 46).unwrap(),
    }
}

/// Build a page envelope; `has_next` controls `info.next`.
pub fn page(results: Vec<Character>, has_next: bool) -> PageEnvelope {
    PageEnvelope {
        info: PageInfo {
            count: results.len() as u64,
            pages: 1,
            next: has_next.then(|| "https://rickandmortyapi.com/api/character?page=next".to_string()),
            prev: None,
        },
        results,
    }
}

/// Character source answering from fixtures.
#[derive(Debug, Default)]
pub struct FixtureSource {
    pages: HashMap<u32, AppResult<PageEnvelope>>,
    characters: HashMap<String, Character>,
    delays: Mutex<HashMap<u32, Duration>>,
    default_delay: Duration,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, number: u32, envelope: PageEnvelope) -> Self {
        self.pages.insert(number, Ok(envelope));
        self
    }

    pub fn with_page_error(mut self, number: u32, err: AppError) -> Self {
        self.pages.insert(number, Err(err));
        self
    }

    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.insert(character.id.to_string(), character);
        self
    }

    pub fn with_delay_ms(mut self, millis: u64) -> Self {
        self.default_delay = Duration::from_millis(millis);
        self
    }

    /// Delay answers for one page; later calls replace earlier ones.
    pub fn set_page_delay_ms(&self, number: u32, millis: u64) {
        self.delays
            .lock()
            .unwrap()
            .insert(number, Duration::from_millis(millis));
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn delay_for(&self, number: u32) -> Duration {
        self.delays
            .lock()
            .unwrap()
            .get(&number)
            .copied()
            .unwrap_or(self.default_delay)
    }
}

#[async_trait]
impl CharacterSource for FixtureSource {
    async fn list_characters(&self, page: u32) -> AppResult<PageEnvelope> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_for(page);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.pages
            .get(&page)
            .cloned()
            .unwrap_or_else(|| Err(AppError::not_found(Resource::List.not_found_message())))
    }

    async fn character_by_id(&self, id: &str) -> AppResult<Character> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if !self.default_delay.is_zero() {
            tokio::time::sleep(self.default_delay).await;
        }
        self.characters
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(Resource::Detail.not_found_message()))
    }
}
