use super::load_session;
use crate::presentation::presenters::present_tag;
use crate::presentation::{CommandResultViewModel, LabelStyle, Renderer};
use anyhow::Result;
use rand::rngs::StdRng;
use std::path::Path;

pub fn handle(
    config_path: &Path,
    session_path: &Path,
    observer: &str,
    target: &str,
    rng: StdRng,
    style: LabelStyle,
    renderer: &impl Renderer,
) -> Result<()> {
    let loaded = load_session(config_path, session_path, rng)?;
    let observer = loaded.server.find(observer)?;
    let target = loaded.server.find(target)?;

    let decision = loaded.plugin.decide_tag(&loaded.server, &observer, &target);

    renderer.render(
        CommandResultViewModel::new(present_tag(&observer, &target, decision)),
        style,
    )
}
