//! Paginated list responses.

pub mod envelope;

pub use envelope::{PageEnvelope, PageInfo};
