use crate::config::{Config, Settings};
use crate::host::{Host, ScheduledTask, Server, TaskId};
use crate::refresh::{RefreshCoordinator, RefreshReport};
use crate::state::NametagState;
use crate::{Error, Result};
use nametags_engine::{Composition, TagDecision};
use nametags_types::{ComposedLabel, PlayerRef};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// Plugin that provides the tag-render event this system hooks into.
pub const COMPANION_PLUGIN: &str = "TagAPI";

const COMPANION_HINT: &str = "TagAPI required. Get it at http://dev.bukkit.org/server-mods/tag/";

/// Reply sent to whoever issued `reload`.
pub const RELOADED_MESSAGE: &str = "Reloaded!";

/// What a reload changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadReport {
    pub settings: Settings,
    pub overrides: usize,
    pub periodic_task: Option<TaskId>,
    pub follow_up_task: TaskId,
    /// Display names reset because `setDisplayName` was switched off
    pub display_names_reset: usize,
    /// Roster names reset because `setTabName` was switched off
    pub tab_names_reset: usize,
}

/// The nametag plugin as the host sees it: one entry point per host
/// callback, all state owned here.
pub struct NameTags {
    config_path: PathBuf,
    state: NametagState,
    refresh: RefreshCoordinator,
}

impl NameTags {
    /// Start the plugin against `server`, reading settings from `config_path`.
    pub fn enable<S: Server + ?Sized>(
        server: &mut S,
        config_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        Self::enable_with_rng(server, config_path, StdRng::from_entropy())
    }

    /// Like [`NameTags::enable`], with a caller-provided tie-break source.
    pub fn enable_with_rng<S: Server + ?Sized>(
        server: &mut S,
        config_path: impl Into<PathBuf>,
        rng: StdRng,
    ) -> Result<Self> {
        let mut plugin = Self::attach_with_rng(server, config_path, rng)?;
        plugin.reload(server)?;
        tracing::info!(config = %plugin.config_path.display(), "nametags enabled");
        Ok(plugin)
    }

    /// Check the companion plugin and build the plugin without loading the
    /// configuration. Nothing is scheduled until the first [`NameTags::reload`].
    pub fn attach<S: Server + ?Sized>(
        server: &mut S,
        config_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        Self::attach_with_rng(server, config_path, StdRng::from_entropy())
    }

    pub fn attach_with_rng<S: Server + ?Sized>(
        server: &mut S,
        config_path: impl Into<PathBuf>,
        rng: StdRng,
    ) -> Result<Self> {
        if !server.is_plugin_enabled(COMPANION_PLUGIN) {
            tracing::error!("{}", COMPANION_HINT);
            return Err(Error::MissingDependency(COMPANION_PLUGIN.to_string()));
        }

        Ok(Self {
            config_path: config_path.into(),
            state: NametagState::with_rng(rng),
            refresh: RefreshCoordinator::new(),
        })
    }

    /// Stop tracking every player and cancel the periodic refresh.
    pub fn disable<S: Server + ?Sized>(&mut self, server: &mut S) {
        self.refresh.cancel(server);
        self.state.labels.clear();
        tracing::info!("nametags disabled");
    }

    /// Re-read settings and overrides, then schedule a refresh of everyone.
    ///
    /// On a configuration error nothing changes and the previous settings
    /// stay active.
    pub fn reload<S: Server + ?Sized>(&mut self, server: &mut S) -> Result<ReloadReport> {
        let config = Config::load_or_init(&self.config_path)?;
        let settings = Settings::from_config(&config);

        self.state.overrides.rebuild(config.overrides().iter());
        self.refresh.reschedule(server, settings.refresh_automatically);

        let previous = self.state.settings;
        let reset_display = previous.set_display_name && !settings.set_display_name;
        let reset_tab = previous.set_tab_name && !settings.set_tab_name;
        let mut display_names_reset = 0;
        let mut tab_names_reset = 0;
        if reset_display || reset_tab {
            for player in server.online_players() {
                let name = player.name.as_str();
                if reset_display && server.set_display_name(player.id, name).is_ok() {
                    display_names_reset += 1;
                }
                if reset_tab && server.set_player_list_name(player.id, name).is_ok() {
                    tab_names_reset += 1;
                }
            }
        }

        self.state.settings = settings;
        let follow_up_task = self.refresh.schedule_after_reload(server);

        tracing::info!(
            overrides = self.state.overrides.len(),
            only_see_same = settings.only_see_same,
            refresh_automatically = settings.refresh_automatically,
            "configuration loaded"
        );

        Ok(ReloadReport {
            settings,
            overrides: self.state.overrides.len(),
            periodic_task: self.refresh.periodic_task(),
            follow_up_task,
            display_names_reset,
            tab_names_reset,
        })
    }

    /// Administrative command entry point. Returns the reply for the sender,
    /// if any.
    pub fn handle_command<S: Server + ?Sized>(
        &mut self,
        server: &mut S,
        args: &[&str],
    ) -> Result<Option<String>> {
        match args.first() {
            Some(sub) if sub.eq_ignore_ascii_case("reload") => {
                self.reload(server)?;
                Ok(Some(RELOADED_MESSAGE.to_string()))
            }
            _ => Ok(None),
        }
    }

    /// Player joined: compute their label right away.
    pub fn on_join<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        player: &PlayerRef,
    ) -> Option<Composition> {
        match self.state.calculate(host, player) {
            Ok(composition) => Some(composition),
            Err(err) => {
                tracing::debug!(player = %player.name, "skipping join: {}", err);
                None
            }
        }
    }

    /// Player left: forget their label.
    pub fn on_quit(&mut self, player: &PlayerRef) {
        self.state.labels.remove(player.id);
    }

    /// Tag about to be rendered above `target` for `observer`. `None` keeps
    /// the host's default.
    pub fn on_name_tag<H: Host + ?Sized>(
        &self,
        host: &H,
        observer: &PlayerRef,
        target: &PlayerRef,
    ) -> Option<String> {
        self.state
            .render_tag(host, observer, target)
            .map(TagDecision::into_text)
    }

    /// Like [`NameTags::on_name_tag`], keeping whether the full label or the
    /// fallback was chosen.
    pub fn decide_tag<H: Host + ?Sized>(
        &self,
        host: &H,
        observer: &PlayerRef,
        target: &PlayerRef,
    ) -> Option<TagDecision> {
        self.state.render_tag(host, observer, target)
    }

    /// Scheduled callback.
    pub fn run_task<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        task: ScheduledTask,
    ) -> RefreshReport {
        match task {
            ScheduledTask::RefreshAll => self.refresh.refresh_all(host, &mut self.state),
        }
    }

    pub fn label(&self, player: &PlayerRef) -> Option<&ComposedLabel> {
        self.state.label(player)
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    /// Number of players with an active override entry.
    pub fn override_count(&self) -> usize {
        self.state.overrides.len()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn periodic_task(&self) -> Option<TaskId> {
        self.refresh.periodic_task()
    }
}
