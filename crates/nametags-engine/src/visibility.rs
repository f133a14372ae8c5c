use nametags_types::{ChatCode, ComposedLabel};
use serde::Serialize;

/// Everything needed to decide what one observer sees above one target
#[derive(Debug, Clone, Copy)]
pub struct TagRequest<'a> {
    pub observer_name: &'a str,
    pub observer_label: Option<&'a ComposedLabel>,
    pub target_name: &'a str,
    pub target_label: Option<&'a ComposedLabel>,
    pub base_color: Option<ChatCode>,
    pub only_mutual: bool,
    pub target_seen_always: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum TagDecision {
    /// The target's composed label, unchanged.
    Full(ComposedLabel),
    /// Base color (if any) and the plain name.
    Fallback(String),
}

impl TagDecision {
    pub fn text(&self) -> &str {
        match self {
            TagDecision::Full(label) => label.as_str(),
            TagDecision::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            TagDecision::Full(label) => label.into_string(),
            TagDecision::Fallback(text) => text,
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, TagDecision::Full(_))
    }
}

/// Decide the tag rendered above the target for this observer.
///
/// Returns `None` when the target has no composed label, in which case the
/// host keeps its own default. In mutual mode the full label is shown only
/// when both labels carry the same non-empty decoration at the same offset
/// in front of the respective plain name.
pub fn resolve_tag(request: &TagRequest<'_>) -> Option<TagDecision> {
    let target_label = request.target_label?;

    if !request.only_mutual || request.target_seen_always {
        return Some(TagDecision::Full(target_label.clone()));
    }

    let Some(observer_label) = request.observer_label else {
        return Some(fallback(request));
    };

    let target_at = target_label.name_offset(request.target_name);
    let observer_at = observer_label.name_offset(request.observer_name);

    match (target_at, observer_at) {
        (Some(at), Some(other))
            if at > 0
                && at == other
                && target_label.as_str()[..at] == observer_label.as_str()[..other] =>
        {
            Some(TagDecision::Full(target_label.clone()))
        }
        _ => Some(fallback(request)),
    }
}

fn fallback(request: &TagRequest<'_>) -> TagDecision {
    let mut text = request
        .base_color
        .map(|code| code.to_string())
        .unwrap_or_default();
    text.push_str(request.target_name);
    TagDecision::Fallback(text)
}
