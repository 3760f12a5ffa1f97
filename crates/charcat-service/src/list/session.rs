//! Async driver for the list controller.
//!
//! The session is the only writer of its [`ListController`]. Page fetches
//! run as tokio tasks and report back over a channel; the session applies
//! completions in [`settle`](ListSession::settle) or
//! [`drain`](ListSession::drain), where stale tickets are discarded.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use charcat_core::result::AppResult;
use charcat_core::types::SearchTerm;
use charcat_entity::PageEnvelope;
use charcat_gateway::CharacterSource;

use super::controller::{ListController, PageTicket};
use super::state::ListState;
use crate::query::QueryClient;
use crate::viewport::ViewportTrigger;

/// Outcome of one dispatched page fetch.
#[derive(Debug)]
struct PageCompletion {
    ticket: PageTicket,
    result: AppResult<Arc<PageEnvelope>>,
}

/// One mounted list screen.
#[derive(Debug)]
pub struct ListSession<S: CharacterSource> {
    /// Shared query client.
    client: Arc<QueryClient<S>>,
    /// Accumulation state.
    controller: ListController,
    /// Sentinel visibility.
    trigger: ViewportTrigger,
    /// Handed to fetch tasks.
    completions_tx: mpsc::UnboundedSender<PageCompletion>,
    /// Completed fetches waiting to be applied.
    completions_rx: mpsc::UnboundedReceiver<PageCompletion>,
}

impl<S: CharacterSource> ListSession<S> {
    /// Create a session. Call [`start`](Self::start) to request page 1.
    pub fn new(client: Arc<QueryClient<S>>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            client,
            controller: ListController::new(),
            trigger: ViewportTrigger::new(),
            completions_tx,
            completions_rx,
        }
    }

    /// Begin a session at page 1.
    pub fn start(&mut self) -> PageTicket {
        let ticket = self.controller.on_cursor_reset();
        self.trigger.rearm();
        self.dispatch(ticket);
        ticket
    }

    /// Discard everything and start over from page 1.
    pub fn reload(&mut self) -> PageTicket {
        info!(
            previous_epoch = self.controller.epoch(),
            "Reloading character list"
        );
        self.start()
    }

    /// Report sentinel visibility from the host.
    ///
    /// Requests the next page on a hidden → visible transition when the
    /// controller allows it.
    pub fn set_sentinel_visible(&mut self, visible: bool) -> Option<PageTicket> {
        if !self.trigger.observe(visible) {
            return None;
        }
        let ticket = self.controller.request_next_page()?;
        debug!(page = ticket.page, "Sentinel visible, fetching next page");
        self.dispatch(ticket);
        Some(ticket)
    }

    /// Replace the search term.
    pub fn set_search(&mut self, term: impl Into<SearchTerm>) {
        self.controller.set_search(term);
    }

    /// Hide the error banner.
    pub fn dismiss_error(&mut self) {
        self.controller.dismiss_error();
    }

    /// Wait until no page is in flight and return the resulting state.
    pub async fn settle(&mut self) -> ListState {
        while self.controller.is_pending() {
            match self.completions_rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
        self.controller.state()
    }

    /// Apply completions that already arrived, without waiting.
    /// Returns how many were merged or recorded (stale ones excluded).
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Read access to the accumulation state.
    pub fn controller(&self) -> &ListController {
        &self.controller
    }

    /// Sentinel tracking state.
    pub fn trigger(&self) -> &ViewportTrigger {
        &self.trigger
    }

    /// Lifecycle state.
    pub fn state(&self) -> ListState {
        self.controller.state()
    }

    fn dispatch(&self, ticket: PageTicket) {
        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = client.list_page(ticket.page).await;
            if tx.send(PageCompletion { ticket, result }).is_err() {
                debug!(page = ticket.page, "List session closed before page arrived");
            }
        });
    }

    fn apply(&mut self, completion: PageCompletion) -> bool {
        let PageCompletion { ticket, result } = completion;
        match result {
            Ok(envelope) => {
                let envelope = Arc::unwrap_or_clone(envelope);
                let grew = !envelope.results.is_empty();
                let merged = self.controller.on_page_result(ticket, envelope);
                if merged && grew {
                    self.trigger.rearm();
                }
                merged
            }
            Err(err) => self.controller.on_page_error(ticket, &err),
        }
    }
}
