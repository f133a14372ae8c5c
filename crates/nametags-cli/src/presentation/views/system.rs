use super::yes_no;
use crate::presentation::view_models::{
    CatalogEntryViewModel, CatalogViewModel, CreateView, LabelStyle, ReloadViewModel,
};
use crate::presentation::ansi;
use nametags_engine::LongNamePolicy;
use std::fmt;

// --------------------------------------------------------
// Reload View
// --------------------------------------------------------

impl CreateView for ReloadViewModel {
    fn create_view<'a>(&'a self, _style: LabelStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(ReloadView { data: self })
    }
}

struct ReloadView<'a> {
    data: &'a ReloadViewModel,
}

impl fmt::Display for ReloadView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let settings = &self.data.settings;
        writeln!(f, "{}", self.data.message)?;
        writeln!(f)?;
        writeln!(f, "{:<24}{}", "config", self.data.config_path)?;
        writeln!(
            f,
            "{:<24}{}",
            "base color",
            settings.base_color.map(|c| c.name()).unwrap_or("none")
        )?;
        writeln!(
            f,
            "{:<24}{}",
            "long names",
            policy_name(settings.long_names)
        )?;
        writeln!(f, "{:<24}{}", "only see same", yes_no(settings.only_see_same))?;
        writeln!(
            f,
            "{:<24}{} (periodic task {})",
            "refresh automatically",
            yes_no(settings.refresh_automatically),
            if self.data.periodic_refresh { "running" } else { "stopped" }
        )?;
        writeln!(f, "{:<24}{}", "set display name", yes_no(settings.set_display_name))?;
        writeln!(f, "{:<24}{}", "set tab name", yes_no(settings.set_tab_name))?;
        writeln!(f, "{:<24}{}", "overrides", self.data.overrides)?;
        Ok(())
    }
}

fn policy_name(policy: LongNamePolicy) -> &'static str {
    match policy {
        LongNamePolicy::KeepPlainName => "keep plain name",
        LongNamePolicy::RawCut => "cut at 16",
        LongNamePolicy::PreserveCodes => "shorten name, keep codes",
    }
}

// --------------------------------------------------------
// Catalog View
// --------------------------------------------------------

impl CreateView for CatalogViewModel {
    fn create_view<'a>(&'a self, style: LabelStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogView { data: self, style })
    }
}

struct CatalogView<'a> {
    data: &'a CatalogViewModel,
    style: LabelStyle,
}

impl CatalogView<'_> {
    fn section(
        &self,
        f: &mut fmt::Formatter,
        title: &str,
        entries: &[CatalogEntryViewModel],
    ) -> fmt::Result {
        writeln!(f, "{}", title)?;
        writeln!(f, "{:<15} {:<15} {:<30} CODE", "NAME", "OVERRIDE", "NODE")?;
        writeln!(f, "{}", "-".repeat(66))?;
        for entry in entries {
            let sample = format!("{}{}", entry.code, entry.name);
            writeln!(
                f,
                "{:<15} {:<15} {:<30} {}  {}",
                entry.name,
                entry.override_name,
                entry.node,
                entry.code,
                ansi::label(&sample, self.style)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for CatalogView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.section(f, "COLORS", &self.data.colors)?;
        writeln!(f)?;
        self.section(f, "STYLES", &self.data.styles)
    }
}
