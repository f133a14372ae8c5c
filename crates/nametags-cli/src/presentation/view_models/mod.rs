pub mod result;
pub mod session;
pub mod system;

pub use result::{CommandResultViewModel, Guidance};
pub use session::{
    AppliedChangeViewModel, LabelChangeViewModel, LabelsViewModel, PlayerLabelViewModel,
    RefreshEventViewModel, SimulationViewModel, TagKind, TagViewModel,
};
pub use system::{CatalogEntryViewModel, CatalogViewModel, ReloadViewModel, SettingsViewModel};

use std::fmt;

/// How labels are written in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// Raw `§x` sequences
    #[default]
    Codes,
    /// Terminal colors and attributes
    Ansi,
}

/// Text rendering of a view model
pub trait CreateView {
    fn create_view<'a>(&'a self, style: LabelStyle) -> Box<dyn fmt::Display + 'a>;
}
