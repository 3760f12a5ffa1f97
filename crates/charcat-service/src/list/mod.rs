//! Infinite-scroll list: page accumulation, search, and the async driver.

pub mod controller;
pub mod session;
pub mod state;

pub use controller::{ListController, PageTicket};
pub use session::ListSession;
pub use state::{ListSnapshot, ListState};
