//! Tests for the cprojecthub binary

mod common;

use std::path::Path;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;

/// Binary isolated from the user's config files and environment
fn cprojecthub(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cprojecthub").unwrap();
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env_remove("CPROJECTHUB_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let (_dir, root) = create_workspace();

    cprojecthub(&root)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks"))
        .stdout(predicate::str::contains("locate"))
        .stdout(predicate::str::contains("mcp"));
}

#[test]
fn test_tasks_json() {
    let (_dir, root) = create_workspace();
    write_project(&root, "foo", &foo_project());

    let output = cprojecthub(&root)
        .args(["tasks", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tasks = parsed["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["name"], "Build Project Foo");
    assert_eq!(tasks[0]["args"], serde_json::json!(["-j4", "all"]));
    assert_eq!(tasks[1]["name"], "Clean Project Foo");
    assert_eq!(parsed["warnings"], serde_json::json!([]));
}

#[test]
fn test_tasks_plain_with_project_flag() {
    let (_dir, cwd) = create_workspace();
    let (_ws, ws) = create_workspace();
    write_project(&ws, "foo", &foo_project());

    cprojecthub(&cwd)
        .args(["tasks", "-f", "plain", "-p"])
        .arg(&ws)
        .assert()
        .success()
        .stdout("Build Project Foo\nClean Project Foo\n");
}

#[test]
fn test_tasks_reports_warnings_on_stderr() {
    let (_dir, root) = create_workspace();
    write_project(&root, "orphan", NO_COMMAND_PROJECT);

    cprojecthub(&root)
        .args(["tasks", "-f", "plain"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains(
            "Invalid XPath expression in builderCommand!",
        ));
}

#[test]
fn test_tasks_honors_env_override() {
    let (_dir, root) = create_workspace();
    write_project(&root, ".", &foo_project());

    let output = cprojecthub(&root)
        .args(["tasks", "-f", "json"])
        .env("CPROJECTHUB_XPATH__BUILDER_TARGET", "//project/@name")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["tasks"][0]["args"], serde_json::json!(["-j4", "Foo"]));
}

#[test]
fn test_locate_plain() {
    let (_dir, root) = create_workspace();
    let project = write_project(&root, "a/b", &foo_project());

    cprojecthub(&root)
        .args(["locate", "-f", "plain", "-p"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains(project.display().to_string()));
}

#[test]
fn test_locate_empty_workspace() {
    let (_dir, root) = create_workspace();

    cprojecthub(&root)
        .args(["locate", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"eligible\": false"));
}

#[test]
fn test_config_reads_override_file() {
    let (_dir, root) = create_workspace();
    let config = root.join("custom.toml");
    std::fs::write(&config, "environment_variables = [\"CC=clang\"]\n").unwrap();

    cprojecthub(&root)
        .args(["config", "-f", "json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("CC=clang"));
}

#[test]
fn test_config_table_prints_toml() {
    let (_dir, root) = create_workspace();

    cprojecthub(&root)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[xpath]"))
        .stdout(predicate::str::contains("discovery = \"recursive\""));
}
