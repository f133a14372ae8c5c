use crate::{Error, Result};
use nametags_engine::{ComposeOptions, LongNamePolicy, RawOverride};
use nametags_types::ChatCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_BASE_COLOR: &str = "white";

/// Keys a config file must carry; any missing one is filled and written back.
const SETTING_KEYS: &[&str] = &[
    "baseColor",
    "noChangeForLongNames",
    "onlySeeSame",
    "refreshAutomatically",
    "setDisplayName",
    "setTabName",
];

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. NAMETAGS_PATH environment variable (with tilde expansion)
/// 3. System data directory
/// 4. ~/.nametags (fallback for systems without a data directory)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("NAMETAGS_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("nametags"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".nametags"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

fn default_base_color() -> String {
    DEFAULT_BASE_COLOR.to_string()
}

/// Settings file as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_base_color")]
    pub base_color: String,
    #[serde(default)]
    pub no_change_for_long_names: bool,
    #[serde(default)]
    pub only_see_same: bool,
    #[serde(default)]
    pub refresh_automatically: bool,
    #[serde(default)]
    pub set_display_name: bool,
    #[serde(default)]
    pub set_tab_name: bool,
    #[serde(default)]
    pub preserve_format_codes: bool,
    #[serde(
        default,
        rename = "IgnoredPlayers",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub ignored_players: BTreeMap<String, RawOverride>,
    /// Historical misspelling of the override section. Read, never written.
    #[serde(default, rename = "IngoredPlayers", skip_serializing)]
    pub legacy_ignored_players: BTreeMap<String, RawOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_color: default_base_color(),
            no_change_for_long_names: false,
            only_see_same: false,
            refresh_automatically: false,
            set_display_name: false,
            set_tab_name: false,
            preserve_format_codes: false,
            ignored_players: BTreeMap::new(),
            legacy_ignored_players: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file, creating it with defaults when absent and writing
    /// back any setting keys it lacks.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&content)?;
        let config: Config = toml::from_str(&content)?;

        if SETTING_KEYS.iter().any(|key| !table.contains_key(*key)) {
            config.save_to(path)?;
        }
        Ok(config)
    }

    /// Override entries from both section spellings, keyed by lowercase
    /// player name. `IgnoredPlayers` wins over `IngoredPlayers` for the same
    /// player.
    pub fn overrides(&self) -> BTreeMap<String, RawOverride> {
        self.legacy_ignored_players
            .iter()
            .chain(self.ignored_players.iter())
            .map(|(name, entry)| (name.to_lowercase(), entry.clone()))
            .collect()
    }

    /// Write the file. Legacy override entries are folded into
    /// `IgnoredPlayers`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut on_disk = self.clone();
        if !on_disk.legacy_ignored_players.is_empty() {
            on_disk.ignored_players = self.overrides();
            on_disk.legacy_ignored_players.clear();
        }

        let content = toml::to_string_pretty(&on_disk)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Effective settings derived from [`Config`] at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// `None` when configured as white or as an unknown name.
    pub base_color: Option<ChatCode>,
    pub long_names: LongNamePolicy,
    pub only_see_same: bool,
    pub refresh_automatically: bool,
    pub set_display_name: bool,
    pub set_tab_name: bool,
}

impl Settings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_color: resolve_base_color(&config.base_color),
            long_names: LongNamePolicy::from_flags(
                config.no_change_for_long_names,
                config.preserve_format_codes,
            ),
            only_see_same: config.only_see_same,
            refresh_automatically: config.refresh_automatically,
            set_display_name: config.set_display_name,
            set_tab_name: config.set_tab_name,
        }
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            base_color: self.base_color,
            long_names: self.long_names,
        }
    }
}

fn resolve_base_color(name: &str) -> Option<ChatCode> {
    match name.parse::<ChatCode>() {
        Ok(ChatCode::White) => None,
        Ok(code) => Some(code),
        Err(err) => {
            tracing::warn!(base_color = name, "{}; using no base color", err);
            None
        }
    }
}
