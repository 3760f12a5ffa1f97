//! # charcat-service
//!
//! Application logic for the character catalog:
//!
//! - [`query::QueryClient`] binds a [`charcat_gateway::CharacterSource`]
//!   to one query cache per kind (pages and single characters);
//! - [`list`] accumulates pages into one growing, searchable collection;
//! - [`viewport`] turns sentinel visibility into next-page requests;
//! - [`detail`] resolves one character by id;
//! - [`route`] maps paths to screens.

pub mod detail;
pub mod list;
pub mod query;
pub mod route;
pub mod viewport;

#[cfg(test)]
pub(crate) mod testing;

pub use detail::DetailResolver;
pub use list::{ListController, ListSession, ListState, PageTicket};
pub use query::QueryClient;
pub use route::Route;
pub use viewport::ViewportTrigger;
