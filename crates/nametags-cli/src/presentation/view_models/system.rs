use nametags_engine::LongNamePolicy;
use nametags_types::ChatCode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReloadViewModel {
    pub message: String,
    pub config_path: String,
    pub settings: SettingsViewModel,
    pub overrides: usize,
    pub periodic_refresh: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsViewModel {
    /// `None` when no base color applies (white or unrecognized)
    pub base_color: Option<ChatCode>,
    pub long_names: LongNamePolicy,
    pub only_see_same: bool,
    pub refresh_automatically: bool,
    pub set_display_name: bool,
    pub set_tab_name: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogViewModel {
    pub colors: Vec<CatalogEntryViewModel>,
    pub styles: Vec<CatalogEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntryViewModel {
    pub name: String,
    pub override_name: String,
    pub node: String,
    pub code: ChatCode,
}
