use crate::overrides::{OverrideEntry, OverrideTable};
use crate::truncate::{self, LongNamePolicy};
use nametags_types::catalog::{self, CatalogOption};
use nametags_types::{ChatCode, ComposedLabel, PlayerName};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Settings that shape composition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Color used when permission scanning found none. Never applied to
    /// overridden players.
    pub base_color: Option<ChatCode>,
    pub long_names: LongNamePolicy,
}

/// Where a label's decoration came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecorationSource {
    Override,
    Permission,
}

/// Outcome of one composition, with the choices that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    pub label: ComposedLabel,
    pub color: Option<ChatCode>,
    pub style: Option<ChatCode>,
    pub source: DecorationSource,
    pub truncated: bool,
}

/// Compose the decorated label for `name`.
///
/// `has_node` answers whether the player currently holds a permission node.
/// It is not consulted at all when the player has an override entry.
pub fn compose<F, R>(
    name: &PlayerName,
    has_node: F,
    overrides: &OverrideTable,
    options: &ComposeOptions,
    rng: &mut R,
) -> Composition
where
    F: Fn(&str) -> bool,
    R: Rng + ?Sized,
{
    let (color, style, source) = match overrides.lookup(&name.key()) {
        Some(entry) => {
            let (color, style) = resolve_override(entry);
            (color, style, DecorationSource::Override)
        }
        None => {
            let color = first_granted(catalog::colors(), &has_node, rng)
                .map(|c| c.code)
                .or(options.base_color);
            let style = first_granted(catalog::styles(), &has_node, rng).map(|s| s.code);
            (color, style, DecorationSource::Permission)
        }
    };

    let mut decoration = String::new();
    if let Some(code) = color {
        decoration.push_str(&code.to_string());
    }
    if let Some(code) = style {
        decoration.push_str(&code.to_string());
    }

    let fitted = truncate::fit(&decoration, name.as_str(), options.long_names);

    Composition {
        label: ComposedLabel::new(fitted.text),
        color,
        style,
        source,
        truncated: fitted.truncated,
    }
}

/// Names that match no catalog entry yield no decoration of that kind.
fn resolve_override(entry: &OverrideEntry) -> (Option<ChatCode>, Option<ChatCode>) {
    let color = entry
        .color
        .as_deref()
        .and_then(catalog::find_color)
        .map(|c| c.code);
    let style = entry
        .style
        .as_deref()
        .and_then(catalog::find_style)
        .map(|s| s.code);
    (color, style)
}

/// Scan `options` in a fresh random order and return the first one granted.
///
/// A player holding several nodes of the same kind gets one of them at
/// random on each call, not whichever is declared first.
fn first_granted<T, F, R>(options: &'static [T], has_node: &F, rng: &mut R) -> Option<&'static T>
where
    T: CatalogOption,
    F: Fn(&str) -> bool,
    R: Rng + ?Sized,
{
    let mut order: Vec<&'static T> = options.iter().collect();
    order.shuffle(rng);
    order.into_iter().find(|option| has_node(option.node()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::RawOverride;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn nodes(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn compose_with(name: &str, granted: &HashSet<String>, options: &ComposeOptions) -> Composition {
        let mut rng = StdRng::seed_from_u64(7);
        compose(
            &PlayerName::new(name),
            |node| granted.contains(node),
            &OverrideTable::new(),
            options,
            &mut rng,
        )
    }

    #[test]
    fn test_no_permissions_yields_plain_name() {
        let composition = compose_with("Alex", &nodes(&[]), &ComposeOptions::default());
        assert_eq!(composition.label.as_str(), "Alex");
        assert_eq!(composition.color, None);
        assert_eq!(composition.style, None);
        assert_eq!(composition.source, DecorationSource::Permission);
    }

    #[test]
    fn test_single_color_permission() {
        let composition = compose_with(
            "Alex",
            &nodes(&["nametags.color.blue"]),
            &ComposeOptions::default(),
        );
        assert_eq!(composition.label.as_str(), "§9Alex");
    }

    #[test]
    fn test_color_precedes_style() {
        let composition = compose_with(
            "Alex",
            &nodes(&["nametags.format.bold", "nametags.color.red"]),
            &ComposeOptions::default(),
        );
        assert_eq!(composition.label.as_str(), "§c§lAlex");
    }

    #[test]
    fn test_base_color_fills_missing_color() {
        let options = ComposeOptions {
            base_color: Some(ChatCode::Gray),
            ..Default::default()
        };
        let composition = compose_with("Alex", &nodes(&["nametags.format.italic"]), &options);
        assert_eq!(composition.label.as_str(), "§7§oAlex");
    }

    #[test]
    fn test_override_ignores_permissions_and_base_color() {
        let raw = vec![(
            "alex",
            RawOverride {
                color: Some("gold".to_string()),
                format: None,
            },
        )];
        let mut table = OverrideTable::new();
        table.rebuild(raw.iter().map(|(k, v)| (*k, v)));
        let options = ComposeOptions {
            base_color: Some(ChatCode::Gray),
            ..Default::default()
        };
        let granted = nodes(&["nametags.color.red", "nametags.format.bold"]);
        let mut rng = StdRng::seed_from_u64(1);

        let composition = compose(
            &PlayerName::new("ALEX"),
            |node| granted.contains(node),
            &table,
            &options,
            &mut rng,
        );

        assert_eq!(composition.label.as_str(), "§6ALEX");
        assert_eq!(composition.source, DecorationSource::Override);
    }

    #[test]
    fn test_first_granted_does_not_reorder_catalog() {
        let mut rng = StdRng::seed_from_u64(99);
        let before: Vec<_> = catalog::colors().iter().map(|c| c.name).collect();
        let _ = first_granted(catalog::colors(), &|_: &str| true, &mut rng);
        let after: Vec<_> = catalog::colors().iter().map(|c| c.name).collect();
        assert_eq!(before, after);
    }
}
