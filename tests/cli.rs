//! Tests for the `expensify` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the binary with an empty config file so the user's config is ignored.
fn expensify(dir: &TempDir, args: &[&str]) -> Output {
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    Command::new(env!("CARGO_BIN_EXE_expensify"))
        .arg("--config")
        .arg(&config)
        .arg("--compact")
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn counter_prints_state_before_and_after() {
    let dir = TempDir::new().unwrap();
    let output = expensify(&dir, &["counter"]);

    assert!(output.status.success());
    let lines = json_lines(&output);
    assert_eq!(lines, vec![serde_json::json!({"count": 0}), serde_json::json!({"count": 0})]);
}

#[test]
fn expenses_prints_state_after_every_dispatch() {
    let dir = TempDir::new().unwrap();
    let output = expensify(&dir, &["expenses"]);

    assert!(output.status.success());
    let lines = json_lines(&output);
    // Five dispatches, then the summary.
    assert_eq!(lines.len(), 6);

    let after_edit = &lines[3];
    let expenses = after_edit["expenses"].as_array().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0]["description"], "Coffee");
    assert_eq!(expenses[0]["amount"], 500);

    assert_eq!(lines[4]["filters"]["text"], "rent");
    assert_eq!(lines[5]["first_action"]["type"], "ADD_EXPENSE");
    assert_eq!(lines[5]["visible"], serde_json::json!([]));
}

#[test]
fn replay_dispatches_actions_from_file() {
    let dir = TempDir::new().unwrap();
    let actions = write(
        &dir,
        "actions.json",
        r#"[
            {"type": "ADD_EXPENSE", "expense": {"id": "e1", "description": "Rent", "amount": 100}},
            {"type": "EDIT_EXPENSE", "id": "e1", "updates": {"note": "March"}},
            {"type": "SORT_BY_AMOUNT"},
            {"type": "UNKNOWN_THING"}
        ]"#,
    );
    let output = expensify(&dir, &["replay", actions.to_str().unwrap()]);

    assert!(output.status.success());
    let lines = json_lines(&output);
    assert_eq!(lines.len(), 4);
    let last = &lines[3];
    assert_eq!(last["expenses"][0]["id"], "e1");
    assert_eq!(last["expenses"][0]["note"], "March");
    assert_eq!(last["filters"]["sortBy"], "amount");
    assert_eq!(lines[2], lines[3]);
}

#[test]
fn replay_starts_from_initial_state() {
    let dir = TempDir::new().unwrap();
    let initial = write(
        &dir,
        "state.json",
        r#"{"expenses": [{"id": "e1", "description": "Gum", "amount": 195}]}"#,
    );
    let actions = write(&dir, "actions.json", r#"[{"type": "REMOVE_EXPENSE", "id": "e1"}]"#);
    let output = expensify(
        &dir,
        &[
            "replay",
            actions.to_str().unwrap(),
            "--initial",
            initial.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let lines = json_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["expenses"], serde_json::json!([]));
    assert_eq!(lines[0]["filters"]["sortBy"], "date");
}

#[test]
fn replay_rejects_action_without_type() {
    let dir = TempDir::new().unwrap();
    let actions = write(&dir, "actions.json", r#"[{"id": "e1"}]"#);
    let output = expensify(&dir, &["replay", actions.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to decode actions"));
    assert!(output.stdout.is_empty());
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "bad.toml", "[log]\nlevel = \"expensify=loudest\"\n");

    let output = Command::new(env!("CARGO_BIN_EXE_expensify"))
        .arg("--config")
        .arg(&config)
        .arg("counter")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}
