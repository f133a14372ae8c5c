use crate::chat::ChatCode;
use serde::Serialize;

/// Namespace shared by every permission node this system checks.
pub const NODE_PREFIX: &str = "nametags";

/// Node that exempts a player's label from mutual-visibility filtering.
pub const SEEN_ALWAYS_NODE: &str = "nametags.seenalways";

/// Shared shape of catalog entries, so resolution code can scan colors and
/// styles the same way.
pub trait CatalogOption: Copy + 'static {
    /// Lowercase symbolic name, as used in permission nodes.
    fn name(&self) -> &'static str;

    /// Uppercase name that override entries are compared against.
    fn canonical_name(&self) -> &'static str;

    /// Permission node that grants this option.
    fn node(&self) -> &'static str;

    fn code(&self) -> ChatCode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorOption {
    pub name: &'static str,
    pub canonical_name: &'static str,
    pub node: &'static str,
    pub code: ChatCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleOption {
    pub name: &'static str,
    pub canonical_name: &'static str,
    pub node: &'static str,
    pub code: ChatCode,
}

macro_rules! option {
    ($ty:ident, $kind:literal, $name:literal, $canonical:literal, $code:expr) => {
        $ty {
            name: $name,
            canonical_name: $canonical,
            node: concat!("nametags.", $kind, ".", $name),
            code: $code,
        }
    };
}

const COLORS: &[ColorOption] = &[
    option!(ColorOption, "color", "aqua", "AQUA", ChatCode::Aqua),
    option!(ColorOption, "color", "black", "BLACK", ChatCode::Black),
    option!(ColorOption, "color", "blue", "BLUE", ChatCode::Blue),
    option!(ColorOption, "color", "dark_aqua", "DARK_AQUA", ChatCode::DarkAqua),
    option!(ColorOption, "color", "dark_blue", "DARK_BLUE", ChatCode::DarkBlue),
    option!(ColorOption, "color", "dark_gray", "DARK_GRAY", ChatCode::DarkGray),
    option!(ColorOption, "color", "dark_green", "DARK_GREEN", ChatCode::DarkGreen),
    option!(ColorOption, "color", "dark_purple", "DARK_PURPLE", ChatCode::DarkPurple),
    option!(ColorOption, "color", "dark_red", "DARK_RED", ChatCode::DarkRed),
    option!(ColorOption, "color", "gold", "GOLD", ChatCode::Gold),
    option!(ColorOption, "color", "gray", "GRAY", ChatCode::Gray),
    option!(ColorOption, "color", "green", "GREEN", ChatCode::Green),
    option!(ColorOption, "color", "light_purple", "LIGHT_PURPLE", ChatCode::LightPurple),
    option!(ColorOption, "color", "red", "RED", ChatCode::Red),
    option!(ColorOption, "color", "yellow", "YELLOW", ChatCode::Yellow),
];

const STYLES: &[StyleOption] = &[
    option!(StyleOption, "format", "bold", "BOLD", ChatCode::Bold),
    option!(StyleOption, "format", "italic", "ITALIC", ChatCode::Italic),
    option!(StyleOption, "format", "magic", "MAGIC", ChatCode::Magic),
    option!(StyleOption, "format", "strikethrough", "STRIKETHROUGH", ChatCode::Strikethrough),
    option!(StyleOption, "format", "underline", "UNDERLINE", ChatCode::Underline),
];

/// Every selectable color, in declaration order.
pub fn colors() -> &'static [ColorOption] {
    COLORS
}

/// Every selectable style, in declaration order.
pub fn styles() -> &'static [StyleOption] {
    STYLES
}

pub fn find_color(canonical_name: &str) -> Option<&'static ColorOption> {
    COLORS.iter().find(|c| c.canonical_name == canonical_name)
}

pub fn find_style(canonical_name: &str) -> Option<&'static StyleOption> {
    STYLES.iter().find(|s| s.canonical_name == canonical_name)
}

impl CatalogOption for ColorOption {
    fn name(&self) -> &'static str {
        self.name
    }

    fn canonical_name(&self) -> &'static str {
        self.canonical_name
    }

    fn node(&self) -> &'static str {
        self.node
    }

    fn code(&self) -> ChatCode {
        self.code
    }
}

impl CatalogOption for StyleOption {
    fn name(&self) -> &'static str {
        self.name
    }

    fn canonical_name(&self) -> &'static str {
        self.canonical_name
    }

    fn node(&self) -> &'static str {
        self.node
    }

    fn code(&self) -> ChatCode {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(colors().len(), 15);
        assert_eq!(styles().len(), 5);
    }

    #[test]
    fn test_nodes_use_shared_prefix() {
        for color in colors() {
            assert_eq!(color.node, format!("{}.color.{}", NODE_PREFIX, color.name));
        }
        for style in styles() {
            assert_eq!(style.node, format!("{}.format.{}", NODE_PREFIX, style.name));
        }
    }

    #[test]
    fn test_canonical_name_matches_code_name() {
        for color in colors() {
            assert_eq!(color.canonical_name, color.name.to_uppercase());
            assert_eq!(color.code.name(), color.name);
            assert!(color.code.is_color());
        }
        for style in styles() {
            assert_eq!(style.canonical_name, style.name.to_uppercase());
            assert_eq!(style.code.name(), style.name);
            assert!(style.code.is_style());
        }
    }

    #[test]
    fn test_white_is_not_selectable() {
        assert!(find_color("WHITE").is_none());
        assert!(colors().iter().all(|c| c.code != ChatCode::White));
    }

    #[test]
    fn test_find_is_exact_on_canonical_name() {
        assert_eq!(find_color("RED").map(|c| c.code), Some(ChatCode::Red));
        assert!(find_color("red").is_none());
        assert_eq!(find_style("BOLD").map(|s| s.code), Some(ChatCode::Bold));
    }
}
