//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ]  --> stdout
//! ```
//!
//! View models carry raw data (codes, booleans, counts), never pre-rendered
//! console text. `--format json` always dumps the complete view model; the
//! [`LabelStyle`] only affects text output.

pub mod ansi;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, LabelStyle};
