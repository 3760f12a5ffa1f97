//! HTTP implementation of [`crate::CharacterSource`].

pub mod classify;
pub mod client;

pub use client::HttpCharacterSource;
