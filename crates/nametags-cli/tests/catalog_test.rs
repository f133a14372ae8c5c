use assert_cmd::Command;
use nametags_testing::TestWorld;
use predicates::prelude::*;

#[test]
#[allow(deprecated)]
fn test_catalog_lists_nodes() {
    Command::cargo_bin("nametags")
        .unwrap()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("nametags.color.dark_red"))
        .stdout(predicate::str::contains("nametags.format.strikethrough"))
        .stdout(predicate::str::contains("LIGHT_PURPLE"));
}

#[test]
fn test_catalog_json_matches_tables() {
    let world = TestWorld::new();
    let json = world.run_json(&["catalog"]).unwrap();

    let colors = json["content"]["colors"].as_array().unwrap();
    let styles = json["content"]["styles"].as_array().unwrap();
    assert_eq!(colors.len(), 15);
    assert_eq!(styles.len(), 5);
    assert_eq!(colors[0]["name"], "aqua");
    assert_eq!(colors[0]["code"], "aqua");
    assert!(
        colors.iter().all(|c| c["name"] != "white"),
        "white is only a base color"
    );
}

#[test]
#[allow(deprecated)]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();
    let mut cmd = Command::cargo_bin("nametags").unwrap();
    world
        .configure_command(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains("nametags reload"));
}
