use nametags_types::ComposedLabel;

/// A label changed when it appeared, disappeared, or differs from before.
pub fn label_changed(old: Option<&ComposedLabel>, new: Option<&ComposedLabel>) -> bool {
    match (old, new) {
        (None, None) => false,
        (Some(old), Some(new)) => old != new,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_changed() {
        let blue = ComposedLabel::new("§9Alex");
        let plain = ComposedLabel::new("Alex");

        assert!(!label_changed(None, None));
        assert!(label_changed(None, Some(&plain)));
        assert!(label_changed(Some(&plain), None));
        assert!(label_changed(Some(&blue), Some(&plain)));
        assert!(!label_changed(Some(&plain), Some(&ComposedLabel::new("Alex"))));
    }
}
