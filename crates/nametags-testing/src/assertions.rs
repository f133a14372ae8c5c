//! Lookups into `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Player entry from `labels` output.
pub fn player<'a>(json: &'a Value, name: &str) -> Result<&'a Value> {
    json["content"]["players"]
        .as_array()
        .context("Expected 'content.players' array in JSON")?
        .iter()
        .find(|p| p["name"] == name)
        .with_context(|| format!("Player {} not in output", name))
}

/// Assert the composed label of one player in `labels` output.
pub fn assert_label(json: &Value, name: &str, expected: &str) -> Result<()> {
    let entry = player(json, name)?;
    let label = entry["label"]
        .as_str()
        .with_context(|| format!("Player {} has no label", name))?;

    if label != expected {
        anyhow::bail!("Expected label {:?} for {}, got {:?}", expected, name, label);
    }
    Ok(())
}

/// Label a player ended with in `simulate` output.
pub fn final_label<'a>(json: &'a Value, name: &str) -> Result<Option<&'a str>> {
    let entry = json["content"]["final_labels"]
        .as_array()
        .context("Expected 'content.final_labels' array in JSON")?
        .iter()
        .find(|p| p["name"] == name)
        .with_context(|| format!("Player {} not in final labels", name))?;
    Ok(entry["label"].as_str())
}

/// Ticks of every refresh in `simulate` output that changed `name`'s label.
pub fn change_ticks(json: &Value, name: &str) -> Result<Vec<u64>> {
    let refreshes = json["content"]["refreshes"]
        .as_array()
        .context("Expected 'content.refreshes' array in JSON")?;

    Ok(refreshes
        .iter()
        .filter(|r| {
            r["changed"]
                .as_array()
                .is_some_and(|changed| changed.iter().any(|c| c["name"] == name))
        })
        .filter_map(|r| r["tick"].as_u64())
        .collect())
}
