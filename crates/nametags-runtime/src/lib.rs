pub mod config;
pub mod error;
pub mod host;
pub mod plugin;
pub mod refresh;
pub mod sim;
pub mod state;
pub mod store;

pub use config::{Config, Settings, resolve_data_dir};
pub use error::{Error, Result};
pub use host::{Host, ScheduledTask, Scheduler, Server, TaskId};
pub use plugin::{COMPANION_PLUGIN, NameTags, RELOADED_MESSAGE, ReloadReport};
pub use refresh::{
    REFRESH_INTERVAL_TICKS, RELOAD_REFRESH_DELAY_TICKS, RefreshCoordinator, RefreshReport,
};
pub use sim::{DueTask, SessionFile, SimulatedServer};
pub use state::NametagState;
pub use store::LabelStore;
