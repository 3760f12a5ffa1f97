//! # charcat-core
//!
//! Core crate for Charcat. Contains configuration schemas, the page
//! cursor and search term types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Charcat crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
