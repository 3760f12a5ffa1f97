//! Prompt-driven screens for the list and detail routes.

use std::sync::Arc;

use tabled::{Table, Tabled};
use tracing::{debug, warn};

use charcat_cache::QueryState;
use charcat_core::error::AppError;
use charcat_core::result::AppResult;
use charcat_entity::Character;
use charcat_gateway::CharacterSource;
use charcat_service::list::ListSnapshot;
use charcat_service::{DetailResolver, ListSession, ListState, QueryClient, Route};

const EMPTY_LIST: &str = "No characters found. Please try again later.";
const LIST_FAILED: &str = "Failed to load characters. Please try again later.";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scroll the sentinel into view.
    More,
    /// Replace the search term with the text after the command word.
    Search(String),
    /// Drop the search term.
    Clear,
    /// Show the detail screen for an id.
    Open(String),
    /// Hide the error banner.
    Dismiss,
    /// Start the list over, or refetch the shown character.
    Reload,
    /// Return to the list.
    Back,
    /// Leave the viewer.
    Quit,
    /// List the commands.
    Help,
    /// Anything else, as typed.
    Unknown(String),
}

impl Command {
    /// Parse one prompt line. Blank input counts as `more`.
    ///
    /// A search term is everything after the first space, spaces included.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start();
        let (word, rest) = line.split_once(' ').unwrap_or((line.trim_end(), ""));

        match word.to_ascii_lowercase().as_str() {
            "" | "more" | "m" => Self::More,
            "search" | "s" | "/" => Self::Search(rest.to_string()),
            "clear" => Self::Clear,
            "open" | "o" if !rest.trim().is_empty() => Self::Open(rest.trim().to_string()),
            "dismiss" => Self::Dismiss,
            "reload" | "retry" | "r" => Self::Reload,
            "back" | "b" => Self::Back,
            "quit" | "q" | "exit" => Self::Quit,
            "help" | "?" => Self::Help,
            _ => Self::Unknown(line.trim_end().to_string()),
        }
    }
}

/// Grid row on the list screen.
#[derive(Debug, Tabled)]
struct GridRow {
    #[tabled(rename = "#")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Character> for GridRow {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            status: format!("{} {}", character.status.marker(), character.status_line()),
            created: character.created_date(),
        }
    }
}

/// Interactive viewer over one shared query client.
pub struct Viewer<S: CharacterSource> {
    list: ListSession<S>,
    details: DetailResolver<S>,
    route: Route,
}

impl<S: CharacterSource> Viewer<S> {
    /// Create a viewer whose list and detail screens share `client`.
    pub fn new(client: Arc<QueryClient<S>>) -> Self {
        Self {
            list: ListSession::new(Arc::clone(&client)),
            details: DetailResolver::new(client),
            route: Route::Characters,
        }
    }

    /// Run until the user quits.
    pub async fn run(mut self, initial_route: &str) -> AppResult<()> {
        let route = Route::resolve(initial_route).unwrap_or_else(|e| {
            warn!(path = initial_route, error = %e, "Unknown start route, showing the list");
            Route::Characters
        });
        self.navigate(route).await;

        loop {
            let line = prompt(self.prompt_label()).await?;
            let command = Command::parse(&line);
            debug!(?command, route = %self.route, "Viewer command");

            let keep_going = match self.route.clone() {
                Route::Characters => self.on_list_command(command).await,
                Route::Character { id } => self.on_detail_command(&id, command).await,
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    async fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "Navigating");
        self.route = route;
        match self.route.clone() {
            Route::Characters => {
                if self.list.controller().epoch() == 0 {
                    self.list.start();
                    render_snapshot(&self.list.controller().snapshot());
                }
                self.list.settle().await;
                self.render_list();
            }
            Route::Character { id } => self.show_detail(&id).await,
        }
    }

    async fn on_list_command(&mut self, command: Command) -> bool {
        match command {
            Command::More => {
                self.list.set_sentinel_visible(false);
                if self.list.set_sentinel_visible(true).is_some() {
                    println!("Loading more…");
                    self.list.settle().await;
                }
                self.render_list();
            }
            Command::Search(term) => {
                self.list.set_search(term);
                self.render_list();
            }
            Command::Clear => {
                self.list.set_search("");
                self.render_list();
            }
            Command::Open(id) => self.navigate(Route::character(id)).await,
            Command::Dismiss => {
                self.list.dismiss_error();
                self.render_list();
            }
            Command::Reload => {
                self.list.reload();
                render_snapshot(&self.list.controller().snapshot());
                self.list.settle().await;
                self.render_list();
            }
            Command::Back => self.render_list(),
            Command::Quit => return false,
            Command::Help => print_help(),
            Command::Unknown(line) => println!("Unknown command '{}'. Type 'help'.", line),
        }
        true
    }

    async fn on_detail_command(&mut self, id: &str, command: Command) -> bool {
        match command {
            Command::Back | Command::More => self.navigate(Route::Characters).await,
            Command::Reload => self.show_detail(id).await,
            Command::Open(other) => self.navigate(Route::character(other)).await,
            Command::Quit => return false,
            Command::Help => print_help(),
            other => println!("'{:?}' is only available on the list. Type 'back'.", other),
        }
        true
    }

    async fn show_detail(&self, id: &str) {
        let mut status = self.details.subscribe(id);
        let resolve = self.details.resolve(Some(id));
        tokio::pin!(resolve);

        let state = loop {
            tokio::select! {
                state = &mut resolve => break state,
                changed = status.changed() => {
                    if changed.is_err() {
                        break resolve.await;
                    }
                    if status.borrow_and_update().is_pending() {
                        println!("Loading character {}…", id);
                    }
                }
            }
        };

        match state {
            QueryState::Success(character) => render_character(&character),
            QueryState::Error(err) => render_detail_error(&err),
            QueryState::Idle | QueryState::Pending => render_detail_error(&AppError::not_found(
                "Character not found",
            )),
        }
    }

    fn prompt_label(&self) -> String {
        match &self.route {
            Route::Characters => {
                let search = self.list.controller().search();
                if search.is_empty() {
                    "characters".to_string()
                } else {
                    format!("characters [{}]", search.as_str())
                }
            }
            Route::Character { id } => format!("character {}", id),
        }
    }

    fn render_list(&self) {
        render_snapshot(&self.list.controller().snapshot());
    }
}

fn render_snapshot(snapshot: &ListSnapshot<'_>) {
    if let Some(banner) = snapshot.banner {
        println!("⚠ {} (type 'dismiss' to hide, 'reload' to retry)", banner);
    }

    if snapshot.state.is_initial_load() {
        println!("Loading characters…");
        return;
    }

    if snapshot.loaded == 0 {
        match snapshot.state {
            ListState::Errored => println!("{}", LIST_FAILED),
            _ => println!("{}", EMPTY_LIST),
        }
        return;
    }

    if snapshot.items.is_empty() {
        println!("No characters match '{}'.", snapshot.search);
    } else {
        let rows: Vec<GridRow> = snapshot.items.iter().map(|c| GridRow::from(*c)).collect();
        println!("{}", Table::new(rows));
    }

    let total = snapshot
        .total
        .map(|total| format!(" of {}", total))
        .unwrap_or_default();
    println!("{} loaded{}", snapshot.loaded, total);

    match snapshot.state {
        ListState::Loading { .. } => println!("Loading more…"),
        ListState::Populated { has_more: false } => println!("No more characters"),
        ListState::Populated { has_more: true } => println!("Press Enter or type 'more' to load more"),
        ListState::Errored | ListState::Empty => {}
    }
}

fn render_character(character: &Character) {
    println!();
    println!("{}", character.name);
    println!("{}", "=".repeat(character.name.chars().count()));
    print_field("Status", &format!("{} {}", character.status.marker(), character.status.as_str()));
    print_field("Species", &character.species);
    if !character.kind.is_empty() {
        print_field("Type", &character.kind);
    }
    print_field("Gender", &character.gender);
    print_field("Origin", &character.origin.name);
    print_field("Location", &character.location.name);
    print_field("Created At", &character.created_date());
    print_field("Episodes", &character.episode_count().to_string());
    println!();
    println!("Type 'back' to return to the list.");
}

fn render_detail_error(err: &AppError) {
    println!();
    println!("✗ {}", err.message);
    println!("Type 'back' to return to the list or 'reload' to try again.");
}

fn print_field(key: &str, value: &str) {
    println!("  {:<12} {}", format!("{}:", key), value);
}

fn print_help() {
    println!("List:   more (or Enter), search <text>, clear, open <id>, dismiss, reload, quit");
    println!("Detail: back, reload, open <id>, quit");
}

async fn prompt(label: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || {
        dialoguer::Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
    })
    .await
    .map_err(|e| AppError::internal(format!("Prompt task failed: {}", e)))?
    .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_scrolls() {
        assert_eq!(Command::parse("   "), Command::More);
        assert_eq!(Command::parse("more"), Command::More);
    }

    #[test]
    fn test_search_text_is_kept_as_typed() {
        assert_eq!(
            Command::parse("search rick sanchez "),
            Command::Search("rick sanchez ".to_string())
        );
        assert_eq!(
            Command::parse("search  rick"),
            Command::Search(" rick".to_string())
        );
        assert_eq!(Command::parse("search"), Command::Search(String::new()));
    }

    #[test]
    fn test_open_requires_an_id() {
        assert_eq!(Command::parse("open 42"), Command::Open("42".to_string()));
        assert_eq!(Command::parse("open"), Command::Unknown("open".to_string()));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(Command::parse("QUIT"), Command::Quit);
        assert_eq!(Command::parse("Reload"), Command::Reload);
    }
}
