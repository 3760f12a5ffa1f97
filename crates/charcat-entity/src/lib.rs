//! # charcat-entity
//!
//! Domain models for Charcat. Every struct in this crate mirrors a JSON
//! document served by the character API and derives `Debug`, `Clone`,
//! `Serialize` and `Deserialize`. Entities are read-only once fetched.

pub mod character;
pub mod page;

pub use character::{Character, CharacterStatus, ResourceRef};
pub use page::{PageEnvelope, PageInfo};
