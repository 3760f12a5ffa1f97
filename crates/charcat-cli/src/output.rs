//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use charcat_entity::Character;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One character as a table row
#[derive(Debug, Serialize, Tabled)]
pub struct CharacterRow {
    /// Character ID
    #[tabled(rename = "ID")]
    pub id: u64,
    /// Name
    #[tabled(rename = "Name")]
    pub name: String,
    /// Status and species
    #[tabled(rename = "Status")]
    pub status: String,
    /// Last known location
    #[tabled(rename = "Location")]
    pub location: String,
    /// Creation date
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&Character> for CharacterRow {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            status: format!("{} {}", character.status.marker(), character.status_line()),
            location: character.location.name.clone(),
            created: character.created_date(),
        }
    }
}

/// Print characters in the selected format
pub fn print_characters(characters: &[&Character], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if characters.is_empty() {
                println!("No characters found.");
            } else {
                let rows: Vec<CharacterRow> =
                    characters.iter().map(|c| CharacterRow::from(*c)).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(characters).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print one character in the selected format
pub fn print_character(character: &Character, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{}", character.name);
            print_kv("Status", character.status.as_str());
            print_kv("Species", &character.species);
            if !character.kind.is_empty() {
                print_kv("Type", &character.kind);
            }
            print_kv("Gender", &character.gender);
            print_kv("Origin", &character.origin.name);
            print_kv("Location", &character.location.name);
            print_kv("Episodes", &character.episode_count().to_string());
            print_kv("Created At", &character.created_date());
            print_kv("Image", &character.image);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(character).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print any serializable item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{:#?}", item);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}
