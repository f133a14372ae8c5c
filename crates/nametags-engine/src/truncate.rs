use nametags_types::{MAX_LABEL_UNITS, SECTION_SIGN};
use serde::{Deserialize, Serialize};

/// What to do when a decorated label exceeds [`MAX_LABEL_UNITS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LongNamePolicy {
    /// Drop every decoration and show the plain name.
    KeepPlainName,
    /// Cut the decorated string at the budget. May split a formatting code.
    #[default]
    RawCut,
    /// Keep all formatting codes and shorten only the name.
    PreserveCodes,
}

impl LongNamePolicy {
    pub fn from_flags(no_change_for_long_names: bool, preserve_format_codes: bool) -> Self {
        if no_change_for_long_names {
            LongNamePolicy::KeepPlainName
        } else if preserve_format_codes {
            LongNamePolicy::PreserveCodes
        } else {
            LongNamePolicy::RawCut
        }
    }
}

/// Result of fitting a label into the display budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted {
    pub text: String,
    pub truncated: bool,
}

/// Fit `decoration + name` into the display budget under `policy`.
pub fn fit(decoration: &str, name: &str, policy: LongNamePolicy) -> Fitted {
    let decoration_units = decoration.chars().count();
    let name_units = name.chars().count();

    if decoration_units + name_units <= MAX_LABEL_UNITS {
        return Fitted {
            text: format!("{}{}", decoration, name),
            truncated: false,
        };
    }

    let text = match policy {
        LongNamePolicy::KeepPlainName => name.to_string(),
        LongNamePolicy::RawCut => decoration
            .chars()
            .chain(name.chars())
            .take(MAX_LABEL_UNITS)
            .collect(),
        LongNamePolicy::PreserveCodes => {
            let mut text = String::new();
            let mut used = 0;
            for sequence in code_sequences(decoration) {
                let units = sequence.chars().count();
                if used + units > MAX_LABEL_UNITS {
                    break;
                }
                text.push_str(sequence);
                used += units;
            }
            text.extend(name.chars().take(MAX_LABEL_UNITS - used));
            text
        }
    };

    Fitted {
        text,
        truncated: true,
    }
}

/// Split a decoration into whole formatting sequences, each starting at a
/// section sign.
fn code_sequences(decoration: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for (at, _) in decoration
        .char_indices()
        .filter(|(_, c)| *c == SECTION_SIGN)
    {
        if at > start {
            out.push(&decoration[start..at]);
            start = at;
        }
    }
    if start < decoration.len() {
        out.push(&decoration[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label_passes_through() {
        let fitted = fit("§9", "Alex", LongNamePolicy::RawCut);
        assert_eq!(fitted.text, "§9Alex");
        assert!(!fitted.truncated);
    }

    #[test]
    fn test_exact_budget_is_not_truncated() {
        // 2 + 14 = 16
        let fitted = fit("§9", "FourteenChars_", LongNamePolicy::KeepPlainName);
        assert_eq!(fitted.text, "§9FourteenChars_");
        assert!(!fitted.truncated);
    }

    #[test]
    fn test_keep_plain_name_drops_decoration() {
        let fitted = fit("§9§l", "Fifteen_Letters", LongNamePolicy::KeepPlainName);
        assert_eq!(fitted.text, "Fifteen_Letters");
        assert!(fitted.truncated);
    }

    #[test]
    fn test_raw_cut_counts_codes_toward_budget() {
        // 4 units of decoration + 13 units of name = 17
        let fitted = fit("§9§l", "ThirteenChars", LongNamePolicy::RawCut);
        assert_eq!(fitted.text, "§9§lThirteenChar");
        assert_eq!(fitted.text.chars().count(), 16);
    }

    #[test]
    fn test_raw_cut_ignores_code_boundaries() {
        let fitted = fit("§9§l§n§m§o§k§c§", "ab", LongNamePolicy::RawCut);
        assert_eq!(fitted.text, "§9§l§n§m§o§k§c§a");
    }

    #[test]
    fn test_preserve_codes_shortens_name_only() {
        let fitted = fit("§9§l", "ThirteenChars", LongNamePolicy::PreserveCodes);
        assert_eq!(fitted.text, "§9§lThirteenChar");
        assert!(fitted.text.starts_with("§9§l"));
    }

    #[test]
    fn test_preserve_codes_never_emits_partial_sequence() {
        let fitted = fit("§9§l§n§m§o§k§c§a§b", "x", LongNamePolicy::PreserveCodes);
        assert_eq!(fitted.text, "§9§l§n§m§o§k§c§a");
    }

    #[test]
    fn test_code_sequences() {
        assert_eq!(code_sequences("§9§l"), vec!["§9", "§l"]);
        assert_eq!(code_sequences(""), Vec::<&str>::new());
    }

    #[test]
    fn test_policy_from_flags() {
        assert_eq!(
            LongNamePolicy::from_flags(true, true),
            LongNamePolicy::KeepPlainName
        );
        assert_eq!(
            LongNamePolicy::from_flags(false, true),
            LongNamePolicy::PreserveCodes
        );
        assert_eq!(LongNamePolicy::from_flags(false, false), LongNamePolicy::RawCut);
    }
}
