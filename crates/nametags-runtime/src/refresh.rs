use crate::host::{Host, ScheduledTask, Scheduler, TaskId};
use crate::state::NametagState;
use nametags_engine::label_changed;
use nametags_types::PlayerRef;

/// Period of the automatic refresh, in host ticks (one minute at 20 tps).
pub const REFRESH_INTERVAL_TICKS: u64 = 1200;

/// Delay between a configuration reload and the refresh that follows it.
pub const RELOAD_REFRESH_DELAY_TICKS: u64 = 2;

/// Outcome of one refresh pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub checked: usize,
    /// Players whose label changed and whose tag was re-sent
    pub changed: Vec<PlayerRef>,
    /// Players left untouched because the host failed mid-pass
    pub skipped: Vec<PlayerRef>,
}

/// Owns the periodic refresh task and runs refresh passes
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    repeating: Option<TaskId>,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running periodic task and start a new one when enabled,
    /// so reloads never stack periodic callbacks.
    pub fn reschedule<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, automatic: bool) {
        self.cancel(scheduler);
        if automatic {
            let id = scheduler.run_repeating(
                REFRESH_INTERVAL_TICKS,
                REFRESH_INTERVAL_TICKS,
                ScheduledTask::RefreshAll,
            );
            tracing::debug!(task = %id, "scheduled periodic refresh");
            self.repeating = Some(id);
        }
    }

    pub fn schedule_after_reload<S: Scheduler + ?Sized>(&self, scheduler: &mut S) -> TaskId {
        scheduler.run_later(RELOAD_REFRESH_DELAY_TICKS, ScheduledTask::RefreshAll)
    }

    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.repeating.take() {
            scheduler.cancel(id);
        }
    }

    pub fn periodic_task(&self) -> Option<TaskId> {
        self.repeating
    }

    /// Recompute every online player's label and signal the host for each
    /// one that changed.
    pub fn refresh_all<H: Host + ?Sized>(
        &self,
        host: &mut H,
        state: &mut NametagState,
    ) -> RefreshReport {
        let mut report = RefreshReport::default();

        for player in host.online_players() {
            if !host.is_online(player.id) {
                continue;
            }
            report.checked += 1;

            let previous = state.labels.get(player.id).cloned();
            if let Err(err) = state.calculate(host, &player) {
                tracing::debug!(player = %player.name, "skipping refresh: {}", err);
                report.skipped.push(player);
                continue;
            }

            if !label_changed(previous.as_ref(), state.labels.get(player.id)) {
                continue;
            }
            match host.refresh_tag(player.id) {
                Ok(()) => {
                    tracing::debug!(
                        player = %player.name,
                        label = state.labels.get(player.id).map(|l| l.as_str()).unwrap_or(""),
                        "label changed"
                    );
                    report.changed.push(player);
                }
                Err(err) => {
                    tracing::debug!(player = %player.name, "tag refresh failed: {}", err);
                    report.skipped.push(player);
                }
            }
        }

        report
    }
}
