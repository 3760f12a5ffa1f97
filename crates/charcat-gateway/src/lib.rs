//! # charcat-gateway
//!
//! Read-only access to the remote character API.
//!
//! - [`CharacterSource`] is the seam the cache and service layers depend on.
//! - [`HttpCharacterSource`] implements it over HTTP with reqwest and
//!   translates transport and status failures into the domain error kinds.
//!
//! Nothing in this crate retries; retry policy belongs to the caller.

pub mod http;
pub mod source;

pub use http::HttpCharacterSource;
pub use source::{CharacterSource, Resource};
