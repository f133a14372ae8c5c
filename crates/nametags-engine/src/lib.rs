// Engine module - label rules (composition, truncation, visibility, change detection)
// This layer is host-free: permissions arrive as a predicate, randomness as an Rng

pub mod change;
pub mod composer;
pub mod overrides;
pub mod truncate;
pub mod visibility;

pub use change::label_changed;
pub use composer::{ComposeOptions, Composition, DecorationSource, compose};
pub use overrides::{OverrideEntry, OverrideTable, RawOverride};
pub use truncate::{Fitted, LongNamePolicy, fit};
pub use visibility::{TagDecision, TagRequest, resolve_tag};
