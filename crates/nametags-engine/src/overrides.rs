use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One configured override as written in the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

/// Forced decoration for a single player. Names are stored uppercased and
/// are not validated against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideEntry {
    pub color: Option<String>,
    pub style: Option<String>,
}

impl OverrideEntry {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.style.is_none()
    }
}

/// Per-player forced decorations keyed by lowercase player name
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: HashMap<String, OverrideEntry>,
}

impl OverrideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table with `raw`.
    pub fn rebuild<'a, I, K>(&mut self, raw: I)
    where
        I: IntoIterator<Item = (K, &'a RawOverride)>,
        K: AsRef<str>,
    {
        self.entries.clear();
        for (name, entry) in raw {
            let parsed = OverrideEntry {
                color: entry.color.as_deref().map(str::to_uppercase),
                style: entry.format.as_deref().map(str::to_uppercase),
            };
            if parsed.is_empty() {
                continue;
            }
            self.entries.insert(name.as_ref().to_lowercase(), parsed);
        }
    }

    /// `name_lower` must already be lowercased.
    pub fn lookup(&self, name_lower: &str) -> Option<&OverrideEntry> {
        self.entries.get(name_lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(color: Option<&str>, format: Option<&str>) -> RawOverride {
        RawOverride {
            color: color.map(String::from),
            format: format.map(String::from),
        }
    }

    #[test]
    fn test_rebuild_lowercases_keys_and_uppercases_names() {
        let source = vec![("Alex".to_string(), raw(Some("dark_red"), Some("Bold")))];
        let mut table = OverrideTable::new();
        table.rebuild(source.iter().map(|(k, v)| (k, v)));

        let entry = table.lookup("alex").unwrap();
        assert_eq!(entry.color.as_deref(), Some("DARK_RED"));
        assert_eq!(entry.style.as_deref(), Some("BOLD"));
        assert!(table.lookup("Alex").is_none());
    }

    #[test]
    fn test_rebuild_clears_previous_content() {
        let first = vec![("alex", raw(Some("red"), None))];
        let second = vec![("bob", raw(None, Some("italic")))];
        let mut table = OverrideTable::new();

        table.rebuild(first.iter().map(|(k, v)| (*k, v)));
        table.rebuild(second.iter().map(|(k, v)| (*k, v)));

        assert!(table.lookup("alex").is_none());
        assert_eq!(table.lookup("bob").unwrap().color, None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_entry_without_fields_is_not_an_override() {
        let source = vec![("ghost", raw(None, None))];
        let mut table = OverrideTable::new();
        table.rebuild(source.iter().map(|(k, v)| (*k, v)));
        assert!(table.is_empty());
    }

    #[test]
    fn test_unknown_names_are_kept_verbatim() {
        let source = vec![("alex", raw(Some("purple"), None))];
        let mut table = OverrideTable::new();
        table.rebuild(source.iter().map(|(k, v)| (*k, v)));
        assert_eq!(table.lookup("alex").unwrap().color.as_deref(), Some("PURPLE"));
    }
}
