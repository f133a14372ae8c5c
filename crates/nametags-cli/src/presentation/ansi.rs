use super::LabelStyle;
use nametags_types::ChatCode;
use nametags_types::chat::segments;
use owo_colors::{AnsiColors, OwoColorize, Style};

/// Write a label the way `style` asks for.
pub fn label(text: &str, style: LabelStyle) -> String {
    match style {
        LabelStyle::Codes => text.to_string(),
        LabelStyle::Ansi => paint(text),
    }
}

/// Translate legacy formatting codes into terminal escape sequences.
pub fn paint(text: &str) -> String {
    segments(text)
        .into_iter()
        .map(|(codes, run)| run.style(style_for(&codes)).to_string())
        .collect()
}

fn style_for(codes: &[ChatCode]) -> Style {
    codes.iter().fold(Style::new(), |style, code| match code {
        ChatCode::Bold => style.bold(),
        ChatCode::Italic => style.italic(),
        ChatCode::Underline => style.underline(),
        ChatCode::Strikethrough => style.strikethrough(),
        ChatCode::Magic => style.blink(),
        ChatCode::Reset => Style::new(),
        color => match ansi_color(*color) {
            Some(c) => style.color(c),
            None => style,
        },
    })
}

fn ansi_color(code: ChatCode) -> Option<AnsiColors> {
    let color = match code {
        ChatCode::Black => AnsiColors::Black,
        ChatCode::DarkBlue => AnsiColors::Blue,
        ChatCode::DarkGreen => AnsiColors::Green,
        ChatCode::DarkAqua => AnsiColors::Cyan,
        ChatCode::DarkRed => AnsiColors::Red,
        ChatCode::DarkPurple => AnsiColors::Magenta,
        ChatCode::Gold => AnsiColors::Yellow,
        ChatCode::Gray => AnsiColors::White,
        ChatCode::DarkGray => AnsiColors::BrightBlack,
        ChatCode::Blue => AnsiColors::BrightBlue,
        ChatCode::Green => AnsiColors::BrightGreen,
        ChatCode::Aqua => AnsiColors::BrightCyan,
        ChatCode::Red => AnsiColors::BrightRed,
        ChatCode::LightPurple => AnsiColors::BrightMagenta,
        ChatCode::Yellow => AnsiColors::BrightYellow,
        ChatCode::White => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_style_is_verbatim() {
        assert_eq!(label("§cAlex", LabelStyle::Codes), "§cAlex");
    }

    #[test]
    fn test_paint_replaces_codes_with_escapes() {
        let painted = paint("§c§lAlex");
        assert!(painted.contains("Alex"));
        assert!(painted.contains("\u{1b}["));
        assert!(!painted.contains('§'));
    }

    #[test]
    fn test_paint_keeps_plain_text() {
        assert!(paint("Bob").contains("Bob"));
    }

    #[test]
    fn test_styles_have_no_terminal_color() {
        assert_eq!(ansi_color(ChatCode::Bold), None);
        assert_eq!(ansi_color(ChatCode::Red), Some(AnsiColors::BrightRed));
    }
}
