pub mod catalog;
pub mod chat;
pub mod error;
pub mod label;
pub mod player;

pub use catalog::{CatalogOption, ColorOption, NODE_PREFIX, SEEN_ALWAYS_NODE, StyleOption};
pub use chat::{ChatCode, SECTION_SIGN};
pub use error::{Error, Result};
pub use label::{ComposedLabel, MAX_LABEL_UNITS};
pub use player::{PlayerId, PlayerName, PlayerRef};
