//! Character entity and its value objects.

pub mod model;
pub mod reference;
pub mod status;

pub use model::Character;
pub use reference::ResourceRef;
pub use status::CharacterStatus;
