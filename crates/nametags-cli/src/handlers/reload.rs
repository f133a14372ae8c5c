use crate::presentation::presenters::present_reload;
use crate::presentation::{CommandResultViewModel, Guidance, LabelStyle, Renderer};
use anyhow::Result;
use nametags_runtime::{COMPANION_PLUGIN, NameTags, SimulatedServer};
use std::path::Path;

pub fn handle(config_path: &Path, renderer: &impl Renderer) -> Result<()> {
    let created = !config_path.exists();

    let mut server = SimulatedServer::new().with_plugin(COMPANION_PLUGIN);
    let mut plugin = NameTags::attach(&mut server, config_path)?;
    let reply = plugin
        .handle_command(&mut server, &["reload"])?
        .unwrap_or_default();

    let mut result = CommandResultViewModel::new(present_reload(reply, config_path, &plugin));
    if created {
        result = result.with_suggestion(
            Guidance::new("Wrote a default configuration")
                .with_command(format!("edit {}", config_path.display())),
        );
    }

    renderer.render(result, LabelStyle::Codes)
}
