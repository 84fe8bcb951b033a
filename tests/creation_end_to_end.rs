mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn record_only_run_emits_canonical_record() {
  let td = tempfile::TempDir::new().unwrap();
  let form = common::write_json(td.path(), "form.json", &common::sample_form());

  let out = Command::cargo_bin("insight-create")
    .unwrap()
    .args(["--form", form.to_str().unwrap()])
    .output()
    .unwrap();

  assert!(out.status.success());
  let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

  assert_eq!(v["executionType"], "backend");
  assert_eq!(v["type"], "search-based");
  assert_eq!(v["title"], "Migration to CSS modules");
  assert_eq!(
    v["repositories"],
    serde_json::json!(["github.com/a/b", "github.com/c/d"])
  );
  assert_eq!(v["series"][0]["query"], "lang:SCSS file:module");
  assert_eq!(v["series"][1]["stroke"], "var(--pink)");
  assert_eq!(v["step"], serde_json::json!({ "week": 2 }));
  assert_eq!(v["dashboards"], serde_json::json!([]));
  assert_eq!(
    v["filters"],
    serde_json::json!({ "excludeRepoRegexp": "", "includeRepoRegexp": "", "context": "" })
  );
}

#[test]
fn form_on_stdin_is_accepted_and_all_repos_wins() {
  let mut form = common::sample_form();
  // Leftover repositories from a prior UI state must be ignored.
  form["allRepos"] = serde_json::json!(true);

  Command::cargo_bin("insight-create")
    .unwrap()
    .write_stdin(form.to_string())
    .assert()
    .success()
    .stdout(predicate::str::contains("\"repositories\": []"));
}

#[test]
fn record_is_written_to_out_file_when_given() {
  let td = tempfile::TempDir::new().unwrap();
  let form = common::write_json(td.path(), "form.json", &common::sample_form());
  let out_path = td.path().join("record.json");

  Command::cargo_bin("insight-create")
    .unwrap()
    .args(["--form", form.to_str().unwrap(), "--out", out_path.to_str().unwrap()])
    .assert()
    .success();

  let written = std::fs::read_to_string(&out_path).unwrap();
  let v: serde_json::Value = serde_json::from_str(&written).unwrap();
  assert_eq!(v["title"], "Migration to CSS modules");
  assert!(written.ends_with('\n'));
}

#[test]
fn non_numeric_step_value_fails_loudly() {
  let mut form = common::sample_form();
  form["stepValue"] = serde_json::json!("abc");

  Command::cargo_bin("insight-create")
    .unwrap()
    .write_stdin(form.to_string())
    .assert()
    .failure()
    .stderr(predicate::str::contains("abc"));
}

#[test]
fn empty_series_is_rejected_before_sanitizing() {
  let mut form = common::sample_form();
  form["series"] = serde_json::json!([]);

  Command::cargo_bin("insight-create")
    .unwrap()
    .write_stdin(form.to_string())
    .assert()
    .failure()
    .stderr(predicate::str::contains("series"));
}

#[test]
fn in_place_without_settings_is_a_usage_error() {
  Command::cargo_bin("insight-create")
    .unwrap()
    .arg("--in-place")
    .write_stdin(common::sample_form().to_string())
    .assert()
    .failure()
    .stderr(predicate::str::contains("--settings"));
}
