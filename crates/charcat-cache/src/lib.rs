//! # charcat-cache
//!
//! Query bookkeeping for Charcat, modelled on client-side query caches:
//!
//! - identical queries that overlap in time are coalesced into a single
//!   fetch (via [moka](https://crates.io/crates/moka)'s `try_get_with`);
//! - every key exposes an observable [`QueryState`];
//! - each cache applies one [`QueryPolicy`] for retries and freshness.
//!
//! The cache holds no domain logic. Callers supply the fetch future.

pub mod keys;
pub mod policy;
pub mod query;
pub mod state;

pub use keys::QueryKey;
pub use policy::QueryPolicy;
pub use query::QueryCache;
pub use state::QueryState;
