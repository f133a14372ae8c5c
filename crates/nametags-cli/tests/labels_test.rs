//! `nametags labels` composes every player of a session.

use anyhow::Result;
use nametags_testing::assertions::{assert_label, player};
use nametags_testing::{SessionBuilder, TestWorld};

fn session_arg(path: &std::path::Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn test_permission_colors_and_styles() -> Result<()> {
    let world = TestWorld::new();
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new()
            .player("Alex", &["nametags.color.red", "nametags.format.bold"])
            .player("Bob", &[]),
    )?;

    let json = world.run_json(&["labels", "--session", session_arg(&session)])?;

    assert_label(&json, "Alex", "§c§lAlex")?;
    assert_label(&json, "Bob", "Bob")?;

    let alex = player(&json, "Alex")?;
    assert_eq!(alex["color"], "red");
    assert_eq!(alex["style"], "bold");
    assert_eq!(alex["source"], "permission");
    assert_eq!(alex["truncated"], false);
    Ok(())
}

#[test]
fn test_base_color_for_undecorated_players() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("baseColor = \"yellow\"\n")?;
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new()
            .player("Bob", &[])
            .player("Cara", &["nametags.format.italic"]),
    )?;

    let json = world.run_json(&["labels", "--session", session_arg(&session)])?;
    assert_label(&json, "Bob", "§eBob")?;
    assert_label(&json, "Cara", "§e§oCara")?;
    Ok(())
}

#[test]
fn test_config_override_replaces_permissions() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config(
        r#"
baseColor = "gray"

[IgnoredPlayers.alex]
color = "gold"
"#,
    )?;
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new().player("Alex", &["nametags.color.red"]),
    )?;

    let json = world.run_json(&["labels", "--session", session_arg(&session)])?;
    assert_label(&json, "Alex", "§6Alex")?;
    assert_eq!(player(&json, "Alex")?["source"], "override");
    Ok(())
}

#[test]
fn test_long_names_are_cut_to_sixteen() -> Result<()> {
    let world = TestWorld::new();
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new().player(
            "Abcdefghijklmno",
            &["nametags.color.red", "nametags.format.bold"],
        ),
    )?;

    let json = world.run_json(&["labels", "--session", session_arg(&session)])?;
    assert_label(&json, "Abcdefghijklmno", "§c§lAbcdefghijkl")?;
    assert_eq!(player(&json, "Abcdefghijklmno")?["truncated"], true);
    Ok(())
}

#[test]
fn test_long_names_can_stay_plain() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("noChangeForLongNames = true\n")?;
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new().player(
            "Abcdefghijklmno",
            &["nametags.color.red", "nametags.format.bold"],
        ),
    )?;

    let json = world.run_json(&["labels", "--session", session_arg(&session)])?;
    assert_label(&json, "Abcdefghijklmno", "Abcdefghijklmno")?;
    Ok(())
}

#[test]
fn test_display_and_tab_names_follow_settings() -> Result<()> {
    let world = TestWorld::new();
    world.write_raw_config("setDisplayName = true\nsetTabName = true\n")?;
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new().player("Alex", &["nametags.color.aqua"]),
    )?;

    let json = world.run_json(&["labels", "--session", session_arg(&session)])?;
    let alex = player(&json, "Alex")?;
    assert_eq!(alex["display_name"], "§bAlex§r");
    assert_eq!(alex["list_name"], "§bAlex");
    Ok(())
}

#[test]
fn test_plain_output_lists_players() -> Result<()> {
    let world = TestWorld::new();
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::new().player("Alex", &["nametags.color.green"]),
    )?;

    // --ansi is ignored when stdout is not a terminal
    let result = world.run(&["labels", "--session", session_arg(&session), "--ansi"])?;
    assert!(result.success());
    assert!(result.stdout().contains("PLAYER"));
    assert!(result.stdout().contains("§aAlex"));
    Ok(())
}

#[test]
fn test_missing_companion_plugin_fails() -> Result<()> {
    let world = TestWorld::new();
    let session = world.write_session(
        "session.toml",
        &SessionBuilder::without_companion().player("Alex", &[]),
    )?;

    let result = world.run(&["labels", "--session", session_arg(&session)])?;
    assert!(!result.success());
    assert!(result.stderr().contains("TagAPI"));
    Ok(())
}

#[test]
fn test_missing_session_file_fails() -> Result<()> {
    let world = TestWorld::new();
    let missing = world.temp_dir().join("nope.toml");

    let result = world.run(&["labels", "--session", session_arg(&missing)])?;
    assert!(!result.success());
    assert!(result.stderr().contains("failed to read session"));
    Ok(())
}
