use super::load_session;
use crate::presentation::presenters::present_player;
use crate::presentation::view_models::LabelsViewModel;
use crate::presentation::{CommandResultViewModel, LabelStyle, Renderer};
use anyhow::Result;
use rand::rngs::StdRng;
use std::path::Path;

pub fn handle(
    config_path: &Path,
    session_path: &Path,
    rng: StdRng,
    style: LabelStyle,
    renderer: &impl Renderer,
) -> Result<()> {
    let loaded = load_session(config_path, session_path, rng)?;

    let players = loaded
        .joined
        .iter()
        .map(|(player, composition)| {
            present_player(&loaded.server, player, composition.as_ref())
        })
        .collect();

    renderer.render(
        CommandResultViewModel::new(LabelsViewModel { players }),
        style,
    )
}
