use super::view_models::{CommandResultViewModel, CreateView, LabelStyle};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

pub trait Renderer {
    fn render<T>(&self, result: CommandResultViewModel<T>, style: LabelStyle) -> Result<()>
    where
        T: Serialize + CreateView;
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>, style: LabelStyle) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        print!("{}", result.content.create_view(style));

        if !result.suggestions.is_empty() {
            let heading = "Tips:";
            if self.color {
                println!("\n{}", heading.yellow().bold());
            } else {
                println!("\n{}", heading);
            }
            for tip in &result.suggestions {
                print!("  - {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.color {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
