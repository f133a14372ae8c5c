use super::args::{Cli, Commands};
use super::handlers;
use crate::logging;
use crate::presentation::{ConsoleRenderer, LabelStyle};
use anyhow::Result;
use is_terminal::IsTerminal;
use nametags_runtime::config::CONFIG_FILE_NAME;
use nametags_runtime::resolve_data_dir;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = data_dir.join(CONFIG_FILE_NAME);
    let renderer = ConsoleRenderer::new(cli.format);

    let Some(command) = cli.command else {
        show_guidance(&config_path);
        return Ok(());
    };

    match command {
        Commands::Reload => handlers::reload::handle(&config_path, &renderer),

        Commands::Catalog => handlers::catalog::handle(&renderer),

        Commands::Labels {
            session,
            ansi,
            seed,
        } => handlers::labels::handle(
            &config_path,
            &session,
            rng(seed),
            label_style(ansi),
            &renderer,
        ),

        Commands::Tag {
            session,
            observer,
            target,
            ansi,
            seed,
        } => handlers::tag::handle(
            &config_path,
            &session,
            &observer,
            &target,
            rng(seed),
            label_style(ansi),
            &renderer,
        ),

        Commands::Simulate {
            session,
            ticks,
            seed,
        } => handlers::simulate::handle(&config_path, &session, ticks, rng(seed), &renderer),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn label_style(ansi: bool) -> LabelStyle {
    if ansi && std::io::stdout().is_terminal() {
        LabelStyle::Ansi
    } else {
        LabelStyle::Codes
    }
}

fn show_guidance(config_path: &Path) {
    println!("nametags - permission-driven player nametags\n");

    if !config_path.exists() {
        println!("Get started:");
        println!("  nametags reload                   # Write the default config.toml\n");
    } else {
        println!("Config: {}\n", config_path.display());
    }

    println!("Quick commands:");
    println!("  nametags catalog                  # Colors, styles and their nodes");
    println!("  nametags labels --session FILE    # Labels for a session's players");
    println!("  nametags simulate --session FILE  # Watch refreshes over time\n");

    println!("For more commands:");
    println!("  nametags --help");
}
