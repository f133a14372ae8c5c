// NOTE: Command Organization
//
// `reload` mirrors the in-game admin command. Everything else runs the
// plugin against a simulated server described by a session file, so labels
// and tags can be previewed without a game server.

use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nametags")]
#[command(about = "Permission-driven player nametag labels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml [default: $NAMETAGS_PATH, then the platform data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Re-read config.toml, creating it with defaults when missing
    Reload,

    /// List every color and style with its permission node
    Catalog,

    /// Compose the label of every player in a session
    Labels {
        #[arg(long)]
        session: PathBuf,

        /// Render formatting codes as terminal colors (only when stdout is a terminal)
        #[arg(long)]
        ansi: bool,

        /// Seed for the tie-break between equally granted options
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the tag one player sees above another
    Tag {
        #[arg(long)]
        session: PathBuf,

        #[arg(long)]
        observer: String,

        #[arg(long)]
        target: String,

        #[arg(long)]
        ansi: bool,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a session forward and report every refresh that changed a label
    Simulate {
        #[arg(long)]
        session: PathBuf,

        #[arg(long, default_value_t = 2400)]
        ticks: u64,

        #[arg(long)]
        seed: Option<u64>,
    },
}
