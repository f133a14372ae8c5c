use nametags_engine::DecorationSource;
use nametags_types::ChatCode;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LabelsViewModel {
    pub players: Vec<PlayerLabelViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerLabelViewModel {
    pub name: String,
    /// `None` when the player could not be composed (offline)
    pub label: Option<String>,
    pub color: Option<ChatCode>,
    pub style: Option<ChatCode>,
    pub source: Option<DecorationSource>,
    pub truncated: bool,
    pub display_name: String,
    pub list_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Target's full label
    Full,
    /// Base color plus plain name
    Fallback,
    /// Host keeps its own tag
    HostDefault,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagViewModel {
    pub observer: String,
    pub target: String,
    pub kind: TagKind,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationViewModel {
    pub ticks: u64,
    pub applied_changes: Vec<AppliedChangeViewModel>,
    pub refreshes: Vec<RefreshEventViewModel>,
    pub final_labels: Vec<LabelChangeViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppliedChangeViewModel {
    pub tick: u64,
    pub player: String,
    pub granted: Vec<String>,
    pub revoked: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshEventViewModel {
    pub tick: u64,
    pub checked: usize,
    pub changed: Vec<LabelChangeViewModel>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelChangeViewModel {
    pub name: String,
    pub label: Option<String>,
}
