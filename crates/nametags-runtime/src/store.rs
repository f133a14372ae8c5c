use nametags_types::{ComposedLabel, PlayerId};
use std::collections::HashMap;

/// Current composed label per tracked player
#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    labels: HashMap<PlayerId, ComposedLabel>,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: PlayerId) -> Option<&ComposedLabel> {
        self.labels.get(&player)
    }

    /// Store `label`, returning the one it replaced.
    pub fn insert(&mut self, player: PlayerId, label: ComposedLabel) -> Option<ComposedLabel> {
        self.labels.insert(player, label)
    }

    pub fn remove(&mut self, player: PlayerId) -> Option<ComposedLabel> {
        self.labels.remove(&player)
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_returns_previous() {
        let mut store = LabelStore::new();
        let id = PlayerId::new(1);

        assert_eq!(store.insert(id, ComposedLabel::new("§9Alex")), None);
        assert_eq!(
            store.insert(id, ComposedLabel::new("Alex")),
            Some(ComposedLabel::new("§9Alex"))
        );
        assert_eq!(store.get(id).map(|l| l.as_str()), Some("Alex"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = LabelStore::new();
        store.insert(PlayerId::new(1), ComposedLabel::new("Alex"));
        store.insert(PlayerId::new(2), ComposedLabel::new("Bob"));

        assert!(store.remove(PlayerId::new(1)).is_some());
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
    }
}
