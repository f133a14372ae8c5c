use crate::Result;
use nametags_types::{PlayerId, PlayerRef};
use std::fmt;

/// Game-server services this system consumes
///
/// Responsibilities:
/// - Answer permission queries for connected players
/// - Enumerate connected players
/// - Accept display-name, roster-name and tag-refresh updates
pub trait Host {
    /// Whether another plugin is loaded and enabled
    fn is_plugin_enabled(&self, name: &str) -> bool;

    fn online_players(&self) -> Vec<PlayerRef>;

    fn is_online(&self, player: PlayerId) -> bool;

    /// Fails with `PlayerOffline` for an identity that is no longer connected
    fn has_permission(&self, player: PlayerId, node: &str) -> Result<bool>;

    fn set_display_name(&mut self, player: PlayerId, name: &str) -> Result<()>;

    fn set_player_list_name(&mut self, player: PlayerId, name: &str) -> Result<()>;

    /// Re-send the player's tag to every observer
    fn refresh_tag(&mut self, player: PlayerId) -> Result<()>;
}

/// Handle returned by the scheduler, used to cancel a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Work this system asks the host to call back for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledTask {
    /// Recompute every online player's label
    RefreshAll,
}

/// Tick-based callback scheduling on the host's main thread
pub trait Scheduler {
    fn run_later(&mut self, delay_ticks: u64, task: ScheduledTask) -> TaskId;

    fn run_repeating(&mut self, delay_ticks: u64, period_ticks: u64, task: ScheduledTask)
    -> TaskId;

    /// Cancelling an unknown or finished task is a no-op
    fn cancel(&mut self, id: TaskId);
}

/// A host that also schedules
pub trait Server: Host + Scheduler {}

impl<T: Host + Scheduler + ?Sized> Server for T {}
