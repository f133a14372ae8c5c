use serde::{Deserialize, Serialize};
use std::fmt;

/// Display budget for a composed label, counted in `char`s.
pub const MAX_LABEL_UNITS: usize = 16;

/// Decorated name computed for one player at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComposedLabel(String);

impl ComposedLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in display units.
    pub fn units(&self) -> usize {
        self.0.chars().count()
    }

    /// Byte offset of the first occurrence of `name` in this label.
    pub fn name_offset(&self, name: &str) -> Option<usize> {
        self.0.find(name)
    }

    /// Everything in front of `name`, if `name` occurs in the label.
    pub fn decoration_before(&self, name: &str) -> Option<&str> {
        self.name_offset(name).map(|at| &self.0[..at])
    }
}

impl fmt::Display for ComposedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComposedLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComposedLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComposedLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_count_section_sign_once() {
        let label = ComposedLabel::new("§9Alex");
        assert_eq!(label.units(), 6);
        assert_eq!(label.as_str().len(), 7);
    }

    #[test]
    fn test_decoration_before_name() {
        let label = ComposedLabel::new("§c§lAlex");
        assert_eq!(label.decoration_before("Alex"), Some("§c§l"));
        assert_eq!(label.decoration_before("Bob"), None);
        assert_eq!(ComposedLabel::new("Alex").decoration_before("Alex"), Some(""));
    }
}
