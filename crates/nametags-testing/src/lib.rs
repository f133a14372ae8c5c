//! Testing infrastructure for nametags integration tests.
//!
//! - `TestWorld`: isolated data directory plus CLI execution
//! - `fixtures`: session files built in code
//! - `assertions`: lookups into `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::SessionBuilder;
pub use world::{CliResult, TestWorld};
