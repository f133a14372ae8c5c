use super::view_models::{
    CatalogEntryViewModel, CatalogViewModel, LabelChangeViewModel, PlayerLabelViewModel,
    RefreshEventViewModel, ReloadViewModel, SettingsViewModel, TagKind, TagViewModel,
};
use nametags_engine::{Composition, TagDecision};
use nametags_runtime::{NameTags, RefreshReport, Settings, SimulatedServer};
use nametags_types::PlayerRef;
use nametags_types::catalog::{colors, styles};
use std::path::Path;

pub fn present_reload(message: String, config_path: &Path, plugin: &NameTags) -> ReloadViewModel {
    ReloadViewModel {
        message,
        config_path: config_path.display().to_string(),
        settings: present_settings(plugin.settings()),
        overrides: plugin.override_count(),
        periodic_refresh: plugin.periodic_task().is_some(),
    }
}

pub fn present_settings(settings: &Settings) -> SettingsViewModel {
    SettingsViewModel {
        base_color: settings.base_color,
        long_names: settings.long_names,
        only_see_same: settings.only_see_same,
        refresh_automatically: settings.refresh_automatically,
        set_display_name: settings.set_display_name,
        set_tab_name: settings.set_tab_name,
    }
}

pub fn present_catalog() -> CatalogViewModel {
    CatalogViewModel {
        colors: colors()
            .iter()
            .map(|c| CatalogEntryViewModel {
                name: c.name.to_string(),
                override_name: c.canonical_name.to_string(),
                node: c.node.to_string(),
                code: c.code,
            })
            .collect(),
        styles: styles()
            .iter()
            .map(|s| CatalogEntryViewModel {
                name: s.name.to_string(),
                override_name: s.canonical_name.to_string(),
                node: s.node.to_string(),
                code: s.code,
            })
            .collect(),
    }
}

pub fn present_player(
    server: &SimulatedServer,
    player: &PlayerRef,
    composition: Option<&Composition>,
) -> PlayerLabelViewModel {
    let sim = server.player(player.id);
    PlayerLabelViewModel {
        name: player.name.to_string(),
        label: composition.map(|c| c.label.as_str().to_string()),
        color: composition.and_then(|c| c.color),
        style: composition.and_then(|c| c.style),
        source: composition.map(|c| c.source),
        truncated: composition.is_some_and(|c| c.truncated),
        display_name: sim
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| player.name.to_string()),
        list_name: sim
            .map(|p| p.list_name.clone())
            .unwrap_or_else(|| player.name.to_string()),
    }
}

pub fn present_tag(
    observer: &PlayerRef,
    target: &PlayerRef,
    decision: Option<TagDecision>,
) -> TagViewModel {
    let (kind, text) = match decision {
        Some(TagDecision::Full(label)) => (TagKind::Full, Some(label.into_string())),
        Some(TagDecision::Fallback(text)) => (TagKind::Fallback, Some(text)),
        None => (TagKind::HostDefault, None),
    };
    TagViewModel {
        observer: observer.name.to_string(),
        target: target.name.to_string(),
        kind,
        text,
    }
}

pub fn present_label(plugin: &NameTags, player: &PlayerRef) -> LabelChangeViewModel {
    LabelChangeViewModel {
        name: player.name.to_string(),
        label: plugin.label(player).map(|l| l.as_str().to_string()),
    }
}

pub fn present_refresh(
    tick: u64,
    report: &RefreshReport,
    plugin: &NameTags,
) -> RefreshEventViewModel {
    RefreshEventViewModel {
        tick,
        checked: report.checked,
        changed: report
            .changed
            .iter()
            .map(|p| present_label(plugin, p))
            .collect(),
        skipped: report.skipped.iter().map(|p| p.name.to_string()).collect(),
    }
}
