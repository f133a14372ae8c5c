use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker that starts every legacy formatting sequence.
pub const SECTION_SIGN: char = '§';

/// Legacy formatting code understood by the game client.
///
/// Each code renders as [`SECTION_SIGN`] followed by a single character,
/// two units in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatCode {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

const ALL_CODES: [ChatCode; 22] = [
    ChatCode::Black,
    ChatCode::DarkBlue,
    ChatCode::DarkGreen,
    ChatCode::DarkAqua,
    ChatCode::DarkRed,
    ChatCode::DarkPurple,
    ChatCode::Gold,
    ChatCode::Gray,
    ChatCode::DarkGray,
    ChatCode::Blue,
    ChatCode::Green,
    ChatCode::Aqua,
    ChatCode::Red,
    ChatCode::LightPurple,
    ChatCode::Yellow,
    ChatCode::White,
    ChatCode::Magic,
    ChatCode::Bold,
    ChatCode::Strikethrough,
    ChatCode::Underline,
    ChatCode::Italic,
    ChatCode::Reset,
];

impl ChatCode {
    pub fn all() -> &'static [ChatCode] {
        &ALL_CODES
    }

    /// Character that follows the section sign.
    pub fn code_char(self) -> char {
        match self {
            ChatCode::Black => '0',
            ChatCode::DarkBlue => '1',
            ChatCode::DarkGreen => '2',
            ChatCode::DarkAqua => '3',
            ChatCode::DarkRed => '4',
            ChatCode::DarkPurple => '5',
            ChatCode::Gold => '6',
            ChatCode::Gray => '7',
            ChatCode::DarkGray => '8',
            ChatCode::Blue => '9',
            ChatCode::Green => 'a',
            ChatCode::Aqua => 'b',
            ChatCode::Red => 'c',
            ChatCode::LightPurple => 'd',
            ChatCode::Yellow => 'e',
            ChatCode::White => 'f',
            ChatCode::Magic => 'k',
            ChatCode::Bold => 'l',
            ChatCode::Strikethrough => 'm',
            ChatCode::Underline => 'n',
            ChatCode::Italic => 'o',
            ChatCode::Reset => 'r',
        }
    }

    /// Lowercase symbolic name (`dark_aqua`, `bold`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ChatCode::Black => "black",
            ChatCode::DarkBlue => "dark_blue",
            ChatCode::DarkGreen => "dark_green",
            ChatCode::DarkAqua => "dark_aqua",
            ChatCode::DarkRed => "dark_red",
            ChatCode::DarkPurple => "dark_purple",
            ChatCode::Gold => "gold",
            ChatCode::Gray => "gray",
            ChatCode::DarkGray => "dark_gray",
            ChatCode::Blue => "blue",
            ChatCode::Green => "green",
            ChatCode::Aqua => "aqua",
            ChatCode::Red => "red",
            ChatCode::LightPurple => "light_purple",
            ChatCode::Yellow => "yellow",
            ChatCode::White => "white",
            ChatCode::Magic => "magic",
            ChatCode::Bold => "bold",
            ChatCode::Strikethrough => "strikethrough",
            ChatCode::Underline => "underline",
            ChatCode::Italic => "italic",
            ChatCode::Reset => "reset",
        }
    }

    pub fn is_color(self) -> bool {
        !self.is_style() && self != ChatCode::Reset
    }

    pub fn is_style(self) -> bool {
        matches!(
            self,
            ChatCode::Magic
                | ChatCode::Bold
                | ChatCode::Strikethrough
                | ChatCode::Underline
                | ChatCode::Italic
        )
    }

    /// Look up a code by the character that follows the section sign.
    pub fn from_code_char(c: char) -> Option<ChatCode> {
        let c = c.to_ascii_lowercase();
        ALL_CODES.iter().copied().find(|code| code.code_char() == c)
    }
}

impl fmt::Display for ChatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SECTION_SIGN, self.code_char())
    }
}

impl FromStr for ChatCode {
    type Err = Error;

    /// Case-insensitive lookup by symbolic name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ALL_CODES
            .iter()
            .copied()
            .find(|code| code.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCode(s.to_string()))
    }
}

/// Split a legacy-formatted string into runs of text and the codes active
/// for each run. Dangling section signs are dropped.
pub fn segments(text: &str) -> Vec<(Vec<ChatCode>, String)> {
    let mut out = Vec::new();
    let mut active: Vec<ChatCode> = Vec::new();
    let mut buf = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != SECTION_SIGN {
            buf.push(c);
            continue;
        }
        let Some(code) = chars.next().and_then(ChatCode::from_code_char) else {
            continue;
        };
        if !buf.is_empty() {
            out.push((active.clone(), std::mem::take(&mut buf)));
        }
        if code == ChatCode::Reset || code.is_color() {
            active.clear();
        }
        if code != ChatCode::Reset {
            active.push(code);
        }
    }
    if !buf.is_empty() {
        out.push((active, buf));
    }
    out
}

/// Remove every formatting sequence, leaving the visible text.
pub fn strip_codes(text: &str) -> String {
    segments(text).into_iter().map(|(_, run)| run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_section_sequence() {
        assert_eq!(ChatCode::Blue.to_string(), "§9");
        assert_eq!(ChatCode::Reset.to_string(), "§r");
        assert_eq!(ChatCode::Bold.to_string(), "§l");
    }

    #[test]
    fn test_from_str_ignores_case() {
        assert_eq!("WHITE".parse::<ChatCode>(), Ok(ChatCode::White));
        assert_eq!("Dark_Aqua".parse::<ChatCode>(), Ok(ChatCode::DarkAqua));
        assert!("purple".parse::<ChatCode>().is_err());
    }

    #[test]
    fn test_color_and_style_partition() {
        let colors = ChatCode::all().iter().filter(|c| c.is_color()).count();
        let styles = ChatCode::all().iter().filter(|c| c.is_style()).count();
        assert_eq!(colors, 16);
        assert_eq!(styles, 5);
    }

    #[test]
    fn test_strip_codes() {
        assert_eq!(strip_codes("§9§lAlex"), "Alex");
        assert_eq!(strip_codes("Alex§"), "Alex");
        assert_eq!(strip_codes("§cRed§rPlain"), "RedPlain");
    }

    #[test]
    fn test_segments_track_active_codes() {
        let parts = segments("§9§lAl§rex");
        assert_eq!(
            parts,
            vec![
                (vec![ChatCode::Blue, ChatCode::Bold], "Al".to_string()),
                (vec![], "ex".to_string()),
            ]
        );
    }
}
