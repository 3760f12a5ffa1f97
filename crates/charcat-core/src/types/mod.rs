//! Shared types used across Charcat crates.

pub mod cursor;
pub mod search;

pub use cursor::PageCursor;
pub use search::SearchTerm;
