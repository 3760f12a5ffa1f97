//! List accumulation controller.
//!
//! Synchronous state machine owning the page cursor and the accumulated
//! collection. It never performs I/O: it hands out [`PageTicket`]s for
//! pages that should be fetched and is told about their outcomes. Every
//! ticket carries the session epoch, so outcomes that belong to an
//! abandoned session are recognised and dropped.

use tracing::{debug, info, warn};

use charcat_core::error::{AppError, ErrorKind};
use charcat_core::types::{PageCursor, SearchTerm};
use charcat_entity::{Character, PageEnvelope, PageInfo};

use super::state::{ListSnapshot, ListState};

/// Banner text for failures that did not come from the remote API.
const GENERIC_LOAD_FAILURE: &str = "Failed to load characters";

/// Permission to fetch one page within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageTicket {
    /// Session the request belongs to.
    pub epoch: u64,
    /// Page to fetch.
    pub page: u32,
}

/// Accumulates pages into one ordered, searchable collection.
#[derive(Debug, Default)]
pub struct ListController {
    /// Page most recently requested.
    cursor: PageCursor,
    /// Current session; bumped on every cursor reset.
    epoch: u64,
    /// Characters merged so far, in page order.
    collection: Vec<Character>,
    /// Active search.
    search: SearchTerm,
    /// Banner text for the latest failure, cleared on dismiss or success.
    last_error: Option<String>,
    /// Metadata of the latest merged page.
    last_info: Option<PageInfo>,
    /// The request currently awaited.
    in_flight: Option<PageTicket>,
    /// Whether the latest request failed.
    failed: bool,
}

impl ListController {
    /// Create an empty controller. Nothing is requested until
    /// [`on_cursor_reset`](Self::on_cursor_reset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session at page 1.
    ///
    /// The collection is cleared before anything from the new session
    /// can merge. Any request still in flight becomes stale.
    pub fn on_cursor_reset(&mut self) -> PageTicket {
        if let Some(stale) = self.in_flight {
            debug!(epoch = stale.epoch, page = stale.page, "Abandoning in-flight page");
        }
        self.epoch += 1;
        self.cursor.reset();
        self.collection.clear();
        self.last_error = None;
        self.last_info = None;
        self.failed = false;

        let ticket = self.issue();
        info!(epoch = self.epoch, "List session started");
        ticket
    }

    /// Advance to the next page if allowed.
    ///
    /// Returns `None`, changing nothing, while a page is in flight, after
    /// a failure, or when the latest page announced no successor.
    pub fn request_next_page(&mut self) -> Option<PageTicket> {
        if !self.can_request_next() {
            debug!(
                pending = self.is_pending(),
                failed = self.failed,
                "Next page request ignored"
            );
            return None;
        }
        self.cursor.advance();
        Some(self.issue())
    }

    /// Merge a fetched page. Returns `false` if the ticket is stale.
    pub fn on_page_result(&mut self, ticket: PageTicket, envelope: PageEnvelope) -> bool {
        if !self.accepts(ticket) {
            debug!(epoch = ticket.epoch, page = ticket.page, "Discarding stale page result");
            return false;
        }
        let (info, results) = envelope.into_parts();
        debug!(
            page = ticket.page,
            received = results.len(),
            has_next = info.has_next(),
            "Merging page"
        );

        self.in_flight = None;
        self.collection.extend(results);
        self.last_info = Some(info);
        self.last_error = None;
        self.failed = false;
        true
    }

    /// Record a failed page. Returns `false` if the ticket is stale.
    ///
    /// Characters merged earlier in the session are kept.
    pub fn on_page_error(&mut self, ticket: PageTicket, err: &AppError) -> bool {
        if !self.accepts(ticket) {
            debug!(epoch = ticket.epoch, page = ticket.page, "Discarding stale page error");
            return false;
        }
        warn!(page = ticket.page, error = %err, "Page failed to load");

        self.in_flight = None;
        self.last_error = Some(banner_message(err));
        self.failed = true;
        true
    }

    /// Hide the error banner. The list stays errored until a reload.
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<SearchTerm>) {
        self.search = term.into();
    }

    /// Characters whose name contains `term`, ignoring case.
    pub fn filtered_view(&self, term: &SearchTerm) -> Vec<&Character> {
        self.collection
            .iter()
            .filter(|character| term.matches(&character.name))
            .collect()
    }

    /// [`filtered_view`](Self::filtered_view) with the active search.
    pub fn view(&self) -> Vec<&Character> {
        self.filtered_view(&self.search)
    }

    /// Lifecycle state.
    pub fn state(&self) -> ListState {
        if let Some(ticket) = self.in_flight {
            return ListState::Loading { page: ticket.page };
        }
        if self.failed {
            return ListState::Errored;
        }
        match &self.last_info {
            None => ListState::Empty,
            Some(info) => ListState::Populated {
                has_more: info.has_next(),
            },
        }
    }

    /// Everything a list screen needs, computed from current state.
    pub fn snapshot(&self) -> ListSnapshot<'_> {
        ListSnapshot {
            state: self.state(),
            items: self.view(),
            loaded: self.collection.len(),
            total: self.last_info.as_ref().map(|info| info.count),
            banner: self.last_error.as_deref(),
            search: self.search.as_str(),
        }
    }

    /// Whether [`request_next_page`](Self::request_next_page) would issue a ticket.
    pub fn can_request_next(&self) -> bool {
        !self.is_pending()
            && !self.failed
            && self.last_info.as_ref().is_some_and(PageInfo::has_next)
    }

    /// Whether a page is in flight.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether `ticket` is the request currently awaited.
    pub fn accepts(&self, ticket: PageTicket) -> bool {
        ticket.epoch == self.epoch && self.in_flight == Some(ticket)
    }

    /// All characters merged this session.
    pub fn collection(&self) -> &[Character] {
        &self.collection
    }

    /// Page most recently requested.
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Current session number.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Active search.
    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    /// Banner text, unless dismissed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn issue(&mut self) -> PageTicket {
        let ticket = PageTicket {
            epoch: self.epoch,
            page: self.cursor.page(),
        };
        self.in_flight = Some(ticket);
        ticket
    }
}

/// User-facing text for a failed page.
fn banner_message(err: &AppError) -> String {
    match err.kind {
        ErrorKind::Network | ErrorKind::NotFound | ErrorKind::Server | ErrorKind::Fetch
            if !err.message.is_empty() =>
        {
            err.message.clone()
        }
        _ => GENERIC_LOAD_FAILURE.to_string(),
    }
}
