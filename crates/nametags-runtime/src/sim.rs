//! In-process stand-in for a game server.
//!
//! Holds a player roster with permission sets and a tick scheduler, so the
//! plugin can be driven without a real host: the CLI uses it to preview
//! labels, and tests use it to observe display-name and refresh side effects.

use crate::host::{Host, ScheduledTask, Scheduler, TaskId};
use crate::{Error, Result};
use nametags_types::{PlayerId, PlayerName, PlayerRef};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Player as tracked by the simulated server
#[derive(Debug, Clone)]
pub struct SimPlayer {
    pub name: PlayerName,
    pub permissions: HashSet<String>,
    pub display_name: String,
    pub list_name: String,
    pub online: bool,
}

#[derive(Debug, Clone)]
struct PendingTask {
    id: TaskId,
    task: ScheduledTask,
    due: u64,
    period: Option<u64>,
}

/// A task that came due during [`SimulatedServer::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTask {
    pub tick: u64,
    pub id: TaskId,
    pub task: ScheduledTask,
}

#[derive(Debug, Default)]
pub struct SimulatedServer {
    plugins: HashSet<String>,
    players: BTreeMap<PlayerId, SimPlayer>,
    next_player: u64,
    tick: u64,
    tasks: Vec<PendingTask>,
    next_task: u64,
    refreshed: Vec<PlayerId>,
}

impl SimulatedServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugin(mut self, name: impl Into<String>) -> Self {
        self.plugins.insert(name.into());
        self
    }

    /// Connect a player. Display and roster names start as the plain name.
    pub fn join<I, S>(&mut self, name: &str, permissions: I) -> PlayerRef
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_player += 1;
        let id = PlayerId::new(self.next_player);
        self.players.insert(
            id,
            SimPlayer {
                name: PlayerName::new(name),
                permissions: permissions.into_iter().map(Into::into).collect(),
                display_name: name.to_string(),
                list_name: name.to_string(),
                online: true,
            },
        );
        PlayerRef::new(id, name)
    }

    pub fn quit(&mut self, player: PlayerId) {
        if let Some(p) = self.players.get_mut(&player) {
            p.online = false;
        }
    }

    pub fn grant(&mut self, player: PlayerId, node: &str) {
        if let Some(p) = self.players.get_mut(&player) {
            p.permissions.insert(node.to_string());
        }
    }

    pub fn revoke(&mut self, player: PlayerId, node: &str) {
        if let Some(p) = self.players.get_mut(&player) {
            p.permissions.remove(node);
        }
    }

    pub fn player(&self, player: PlayerId) -> Option<&SimPlayer> {
        self.players.get(&player)
    }

    /// Online player by exact name.
    pub fn find(&self, name: &str) -> Result<PlayerRef> {
        self.players
            .iter()
            .find(|(_, p)| p.online && p.name.as_str() == name)
            .map(|(id, p)| PlayerRef::new(*id, p.name.clone()))
            .ok_or_else(|| Error::UnknownPlayer(name.to_string()))
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Drain the players whose tag refresh was requested, in request order.
    pub fn take_refreshed(&mut self) -> Vec<PlayerId> {
        std::mem::take(&mut self.refreshed)
    }

    /// Move the clock forward, returning every task that came due in order.
    /// Repeating tasks are re-armed; one-shot tasks are dropped.
    pub fn advance(&mut self, ticks: u64) -> Vec<DueTask> {
        let mut due = Vec::new();
        for _ in 0..ticks {
            self.tick += 1;
            let now = self.tick;
            for pending in self.tasks.iter_mut().filter(|t| t.due == now) {
                due.push(DueTask {
                    tick: now,
                    id: pending.id,
                    task: pending.task,
                });
                if let Some(period) = pending.period {
                    pending.due = now + period;
                }
            }
            self.tasks.retain(|t| t.due > now);
        }
        due
    }

    fn schedule(&mut self, delay: u64, period: Option<u64>, task: ScheduledTask) -> TaskId {
        self.next_task += 1;
        let id = TaskId::new(self.next_task);
        self.tasks.push(PendingTask {
            id,
            task,
            due: self.tick + delay.max(1),
            period: period.map(|p| p.max(1)),
        });
        id
    }

    fn online_mut(&mut self, player: PlayerId) -> Result<&mut SimPlayer> {
        self.players
            .get_mut(&player)
            .filter(|p| p.online)
            .ok_or(Error::PlayerOffline(player))
    }
}

impl Host for SimulatedServer {
    fn is_plugin_enabled(&self, name: &str) -> bool {
        self.plugins.contains(name)
    }

    fn online_players(&self) -> Vec<PlayerRef> {
        self.players
            .iter()
            .filter(|(_, p)| p.online)
            .map(|(id, p)| PlayerRef::new(*id, p.name.clone()))
            .collect()
    }

    fn is_online(&self, player: PlayerId) -> bool {
        self.players.get(&player).is_some_and(|p| p.online)
    }

    fn has_permission(&self, player: PlayerId, node: &str) -> Result<bool> {
        match self.players.get(&player) {
            Some(p) if p.online => Ok(p.permissions.contains(node)),
            _ => Err(Error::PlayerOffline(player)),
        }
    }

    fn set_display_name(&mut self, player: PlayerId, name: &str) -> Result<()> {
        self.online_mut(player)?.display_name = name.to_string();
        Ok(())
    }

    fn set_player_list_name(&mut self, player: PlayerId, name: &str) -> Result<()> {
        self.online_mut(player)?.list_name = name.to_string();
        Ok(())
    }

    fn refresh_tag(&mut self, player: PlayerId) -> Result<()> {
        self.online_mut(player)?;
        self.refreshed.push(player);
        Ok(())
    }
}

impl Scheduler for SimulatedServer {
    fn run_later(&mut self, delay_ticks: u64, task: ScheduledTask) -> TaskId {
        self.schedule(delay_ticks, None, task)
    }

    fn run_repeating(
        &mut self,
        delay_ticks: u64,
        period_ticks: u64,
        task: ScheduledTask,
    ) -> TaskId {
        self.schedule(delay_ticks, Some(period_ticks), task)
    }

    fn cancel(&mut self, id: TaskId) {
        self.tasks.retain(|t| t.id != id);
    }
}

/// Session description read from TOML:
///
/// ```toml
/// plugins = ["TagAPI"]
///
/// [[players]]
/// name = "Alex"
/// permissions = ["nametags.color.red"]
///
/// [[changes]]
/// tick = 1300
/// player = "Alex"
/// revoke = ["nametags.color.red"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub players: Vec<SessionPlayer>,
    #[serde(default)]
    pub changes: Vec<PermissionChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPlayer {
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Permission edit applied when the simulated clock reaches `tick`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionChange {
    pub tick: u64,
    pub player: String,
    #[serde(default)]
    pub grant: Vec<String>,
    #[serde(default)]
    pub revoke: Vec<String>,
}

impl SessionFile {
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let session: SessionFile = toml::from_str(&content)?;
        Ok(session)
    }

    /// Build a server with the listed plugins. Players are not joined yet;
    /// use [`SessionFile::join_all`] once the plugin is enabled.
    pub fn server(&self) -> SimulatedServer {
        self.plugins
            .iter()
            .fold(SimulatedServer::new(), |server, name| server.with_plugin(name.clone()))
    }

    pub fn join_all(&self, server: &mut SimulatedServer) -> Vec<PlayerRef> {
        self.players
            .iter()
            .map(|p| server.join(&p.name, p.permissions.iter().cloned()))
            .collect()
    }

    /// Changes scheduled for exactly `tick`.
    pub fn changes_at(&self, tick: u64) -> impl Iterator<Item = &PermissionChange> {
        self.changes.iter().filter(move |c| c.tick == tick)
    }
}

impl PermissionChange {
    pub fn apply(&self, server: &mut SimulatedServer) -> Result<PlayerRef> {
        let player = server.find(&self.player)?;
        for node in &self.grant {
            server.grant(player.id, node);
        }
        for node in &self.revoke {
            server.revoke(player.id, node);
        }
        Ok(player)
    }
}
