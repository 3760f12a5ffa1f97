//! Coalescing query store.

mod retry;
pub mod store;

pub use store::QueryCache;
