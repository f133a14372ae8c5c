// NOTE: Layering
//
// types    : chat codes, catalog, labels (no host, no randomness)
// engine   : composition, truncation, mutual visibility
// runtime  : plugin lifecycle, config file, refresh scheduling, simulated host
// cli      : this crate; turns runtime results into console or JSON output

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
