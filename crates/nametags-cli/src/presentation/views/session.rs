use crate::presentation::ansi;
use crate::presentation::view_models::{
    AppliedChangeViewModel, CreateView, LabelStyle, LabelsViewModel, RefreshEventViewModel,
    SimulationViewModel, TagKind, TagViewModel,
};
use nametags_engine::DecorationSource;
use std::fmt;

// --------------------------------------------------------
// Labels View
// --------------------------------------------------------

impl CreateView for LabelsViewModel {
    fn create_view<'a>(&'a self, style: LabelStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(LabelsView { data: self, style })
    }
}

struct LabelsView<'a> {
    data: &'a LabelsViewModel,
    style: LabelStyle,
}

impl fmt::Display for LabelsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.players.is_empty() {
            writeln!(f, "No players in session.")?;
            return Ok(());
        }

        writeln!(f, "{:<17} {:<11} {:<10} LABEL", "PLAYER", "SOURCE", "NOTE")?;
        writeln!(f, "{}", "-".repeat(60))?;

        for player in &self.data.players {
            let source = match player.source {
                Some(DecorationSource::Override) => "override",
                Some(DecorationSource::Permission) => "permission",
                None => "-",
            };
            let note = if player.truncated { "truncated" } else { "" };
            let label = match &player.label {
                Some(label) => ansi::label(label, self.style),
                None => "(offline)".to_string(),
            };
            writeln!(
                f,
                "{:<17} {:<11} {:<10} {}",
                player.name, source, note, label
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Tag View
// --------------------------------------------------------

impl CreateView for TagViewModel {
    fn create_view<'a>(&'a self, style: LabelStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(TagView { data: self, style })
    }
}

struct TagView<'a> {
    data: &'a TagViewModel,
    style: LabelStyle,
}

impl fmt::Display for TagView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        match (&data.kind, &data.text) {
            (TagKind::HostDefault, _) | (_, None) => writeln!(
                f,
                "{} sees the default tag above {}",
                data.observer, data.target
            ),
            (kind, Some(text)) => writeln!(
                f,
                "{} sees {} as {} ({})",
                data.observer,
                data.target,
                ansi::label(text, self.style),
                if *kind == TagKind::Full {
                    "full label"
                } else {
                    "fallback"
                }
            ),
        }
    }
}

// --------------------------------------------------------
// Simulation View
// --------------------------------------------------------

impl CreateView for SimulationViewModel {
    fn create_view<'a>(&'a self, _style: LabelStyle) -> Box<dyn fmt::Display + 'a> {
        Box::new(SimulationView { data: self })
    }
}

struct SimulationView<'a> {
    data: &'a SimulationViewModel,
}

enum TimelineEntry<'a> {
    Change(&'a AppliedChangeViewModel),
    Refresh(&'a RefreshEventViewModel),
}

impl SimulationView<'_> {
    /// Permission changes and refreshes merged by tick. A change takes
    /// effect before any refresh due on the same tick.
    fn timeline(&self) -> Vec<(u64, TimelineEntry<'_>)> {
        let mut entries: Vec<(u64, TimelineEntry<'_>)> = self
            .data
            .applied_changes
            .iter()
            .map(|c| (c.tick, TimelineEntry::Change(c)))
            .chain(
                self.data
                    .refreshes
                    .iter()
                    .map(|r| (r.tick, TimelineEntry::Refresh(r))),
            )
            .collect();
        // Stable sort keeps changes ahead of refreshes within a tick.
        entries.sort_by_key(|(tick, _)| *tick);
        entries
    }
}

impl fmt::Display for SimulationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Simulated {} ticks", self.data.ticks)?;
        writeln!(f)?;

        for (tick, entry) in self.timeline() {
            match entry {
                TimelineEntry::Change(change) => {
                    write!(f, "[{:>6}] {}:", tick, change.player)?;
                    for node in &change.granted {
                        write!(f, " +{}", node)?;
                    }
                    for node in &change.revoked {
                        write!(f, " -{}", node)?;
                    }
                    writeln!(f)?;
                }
                TimelineEntry::Refresh(refresh) => {
                    writeln!(
                        f,
                        "[{:>6}] refresh: {} checked, {} changed",
                        tick,
                        refresh.checked,
                        refresh.changed.len()
                    )?;
                    for changed in &refresh.changed {
                        writeln!(
                            f,
                            "         {} -> {}",
                            changed.name,
                            changed.label.as_deref().unwrap_or("(none)")
                        )?;
                    }
                    for skipped in &refresh.skipped {
                        writeln!(f, "         {} skipped", skipped)?;
                    }
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Final labels:")?;
        for label in &self.data.final_labels {
            writeln!(
                f,
                "  {:<17} {}",
                label.name,
                label.label.as_deref().unwrap_or("(none)")
            )?;
        }
        Ok(())
    }
}
