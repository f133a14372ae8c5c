use crate::config::Settings;
use crate::host::Host;
use crate::store::LabelStore;
use crate::{Error, Result};
use nametags_engine::{Composition, OverrideTable, TagDecision, TagRequest, compose, resolve_tag};
use nametags_types::{ChatCode, ComposedLabel, PlayerRef, SEEN_ALWAYS_NODE};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;

/// Process-wide label state, owned by the plugin and passed to whoever
/// composes or reads labels
pub struct NametagState {
    pub settings: Settings,
    pub overrides: OverrideTable,
    pub labels: LabelStore,
    rng: StdRng,
}

impl Default for NametagState {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl NametagState {
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            settings: Settings::default(),
            overrides: OverrideTable::new(),
            labels: LabelStore::new(),
            rng,
        }
    }

    /// Recompute and store `player`'s label, then push it into the host's
    /// display-name and roster-name fields when enabled.
    ///
    /// A failed permission query leaves the stored label untouched. The new
    /// label is stored before the host fields are written, so a failing
    /// setter never leaves the store behind what the host already shows.
    pub fn calculate<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        player: &PlayerRef,
    ) -> Result<Composition> {
        if !host.is_online(player.id) {
            return Err(Error::PlayerOffline(player.id));
        }

        let failure: RefCell<Option<Error>> = RefCell::new(None);
        let composition = {
            let host: &H = host;
            compose(
                &player.name,
                |node| match host.has_permission(player.id, node) {
                    Ok(granted) => granted,
                    Err(err) => {
                        failure.borrow_mut().get_or_insert(err);
                        false
                    }
                },
                &self.overrides,
                &self.settings.compose_options(),
                &mut self.rng,
            )
        };
        if let Some(err) = failure.into_inner() {
            return Err(err);
        }

        self.labels.insert(player.id, composition.label.clone());

        let label = composition.label.as_str();
        if self.settings.set_display_name {
            host.set_display_name(player.id, &format!("{}{}", label, ChatCode::Reset))?;
        }
        if self.settings.set_tab_name {
            host.set_player_list_name(player.id, label)?;
        }

        Ok(composition)
    }

    pub fn label(&self, player: &PlayerRef) -> Option<&ComposedLabel> {
        self.labels.get(player.id)
    }

    /// Tag the observer should see above the target, or `None` to keep the
    /// host's default.
    pub fn render_tag<H: Host + ?Sized>(
        &self,
        host: &H,
        observer: &PlayerRef,
        target: &PlayerRef,
    ) -> Option<TagDecision> {
        let target_label = self.labels.get(target.id)?;
        let seen_always = self.settings.only_see_same
            && host
                .has_permission(target.id, SEEN_ALWAYS_NODE)
                .unwrap_or(false);

        resolve_tag(&TagRequest {
            observer_name: observer.name.as_str(),
            observer_label: self.labels.get(observer.id),
            target_name: target.name.as_str(),
            target_label: Some(target_label),
            base_color: self.settings.base_color,
            only_mutual: self.settings.only_see_same,
            target_seen_always: seen_always,
        })
    }
}
