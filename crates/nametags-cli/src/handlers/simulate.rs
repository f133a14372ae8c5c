use super::load_session;
use crate::presentation::presenters::{present_label, present_refresh};
use crate::presentation::view_models::{AppliedChangeViewModel, SimulationViewModel};
use crate::presentation::{CommandResultViewModel, LabelStyle, Renderer};
use anyhow::Result;
use nametags_runtime::Host;
use rand::rngs::StdRng;
use std::path::Path;

pub fn handle(
    config_path: &Path,
    session_path: &Path,
    ticks: u64,
    rng: StdRng,
    renderer: &impl Renderer,
) -> Result<()> {
    let mut loaded = load_session(config_path, session_path, rng)?;
    let mut applied_changes = Vec::new();
    let mut refreshes = Vec::new();

    for _ in 0..ticks {
        let next = loaded.server.current_tick() + 1;

        for change in loaded.session.changes_at(next) {
            match change.apply(&mut loaded.server) {
                Ok(_) => applied_changes.push(AppliedChangeViewModel {
                    tick: next,
                    player: change.player.clone(),
                    granted: change.grant.clone(),
                    revoked: change.revoke.clone(),
                }),
                Err(err) => tracing::warn!(tick = next, "permission change skipped: {}", err),
            }
        }

        for due in loaded.server.advance(1) {
            let report = loaded.plugin.run_task(&mut loaded.server, due.task);
            tracing::debug!(
                tick = due.tick,
                task = %due.id,
                changed = report.changed.len(),
                "task ran"
            );
            refreshes.push(present_refresh(due.tick, &report, &loaded.plugin));
        }
    }

    let final_labels = loaded
        .server
        .online_players()
        .iter()
        .map(|player| present_label(&loaded.plugin, player))
        .collect();

    let view = SimulationViewModel {
        ticks,
        applied_changes,
        refreshes,
        final_labels,
    };
    renderer.render(CommandResultViewModel::new(view), LabelStyle::Codes)
}
