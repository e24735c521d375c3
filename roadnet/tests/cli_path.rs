//! CLI tests for `roadnet` listing and routing commands.
//!
//! Spawns the roadnet binary inside a temp dir holding `towns.txt` and checks
//! stdout and exit codes.

use std::fs;
use std::process::{Command, Output};

use roadnet::exit_codes;
use roadnet::io::config::{CONFIG_FILE, RoadnetConfig, write_config};
use roadnet::test_support::{SAMPLE_MAP, map_fixture};

fn roadnet(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roadnet"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn roadnet")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn path_prints_cheapest_route() {
    let (temp, _map) = map_fixture(SAMPLE_MAP);
    let output = roadnet(temp.path(), &["path", "A", "C"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout_lines(&output),
        vec!["A via R1 to B 5 mi", "B via R2 to C 3 mi"]
    );
}

#[test]
fn path_between_disjoint_towns_exits_with_no_path() {
    let (temp, _map) = map_fixture("R1,5;A;B\nR7,2;D;E\n");
    let output = roadnet(temp.path(), &["path", "A", "D"]);
    assert_eq!(output.status.code(), Some(exit_codes::NO_PATH));
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn path_json_reports_distance() {
    let (temp, _map) = map_fixture(SAMPLE_MAP);
    let output = roadnet(temp.path(), &["path", "C", "A", "--json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["distance"], 8);
    assert_eq!(
        report["segments"],
        serde_json::json!(["C via R2 to B 3 mi", "B via R1 to A 5 mi"])
    );
}

#[test]
fn towns_and_roads_are_sorted() {
    let (temp, _map) = map_fixture("Zeta,1;Crater;Amber\nAlpha,2;Amber;Brook\n");
    let towns = roadnet(temp.path(), &["towns"]);
    assert_eq!(towns.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&towns), vec!["Amber", "Brook", "Crater"]);

    let roads = roadnet(temp.path(), &["roads"]);
    assert_eq!(stdout_lines(&roads), vec!["Alpha", "Zeta"]);
}

#[test]
fn unknown_town_exits_invalid() {
    let (temp, _map) = map_fixture(SAMPLE_MAP);
    let output = roadnet(temp.path(), &["path", "A", "Nowhere"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Nowhere"));
}

#[test]
fn config_selects_map_and_unit() {
    let (temp, _map) = map_fixture("");
    fs::write(temp.path().join("county.txt"), "N1,4;A;B\n").expect("write county");
    let cfg = RoadnetConfig {
        map_path: "county.txt".into(),
        strict: true,
        distance_unit: "km".to_string(),
    };
    write_config(&temp.path().join(CONFIG_FILE), &cfg).expect("write config");

    let output = roadnet(temp.path(), &["path", "A", "B"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["A via N1 to B 4 km"]);
}

#[test]
fn map_flag_overrides_config() {
    let (temp, _map) = map_fixture(SAMPLE_MAP);
    fs::write(temp.path().join("other.txt"), "Q1,9;X;Y\n").expect("write other");
    let output = roadnet(temp.path(), &["towns", "--map", "other.txt"]);
    assert_eq!(stdout_lines(&output), vec!["X", "Y"]);
}

#[test]
fn strict_load_rejects_malformed_map() {
    let (temp, _map) = map_fixture("R1,5;A;B\nbroken line\n");
    let output = roadnet(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("towns.txt:2"));
}

#[test]
fn check_reports_consistent_map() {
    let (temp, _map) = map_fixture(SAMPLE_MAP);
    let output = roadnet(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout_lines(&output), vec!["ok: 3 towns, 3 roads"]);
}

#[test]
fn init_writes_config_once() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = roadnet(temp.path(), &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    assert!(temp.path().join(CONFIG_FILE).exists());

    let second = roadnet(temp.path(), &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::INVALID));
    let forced = roadnet(temp.path(), &["init", "--force"]);
    assert_eq!(forced.status.code(), Some(exit_codes::OK));
}
