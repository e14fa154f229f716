//! Apply command integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn apply_runs_ascending() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .arg("apply")
    .assert()
    .success()
    .stdout(predicate::str::contains("Applied 5 patch(es)"))
    .stdout(predicate::str::contains("add index"));

  assert_eq!(
    env.log(),
    ["apply-0.1.0", "apply-1.0.0", "apply-1.7.3", "apply-2.0.1", "apply-64.3.2"]
  );
}

#[test]
fn apply_with_range() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .args(["apply", "--range", ">1.0.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Applied 3 patch(es)"));

  assert_eq!(env.log(), ["apply-1.7.3", "apply-2.0.1", "apply-64.3.2"]);
}

#[test]
fn apply_range_matching_nothing() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .args(["apply", "-r", ">=100.0.0"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to apply"));

  assert!(env.log().is_empty());
}

#[test]
fn apply_dry_run_runs_nothing() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .args(["apply", "--dry-run"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Would apply 5 patch(es)"));

  assert!(env.log().is_empty());
}

#[test]
fn apply_json_report() {
  let env = TestEnv::from_fixture("basic.toml");

  let output = env
    .verpatch_cmd()
    .args(["apply", "--range", "<1.7.3", "-o", "json"])
    .output()
    .unwrap();
  assert!(output.status.success());

  let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["direction"], "apply");
  assert_eq!(report["dry_run"], false);
  assert_eq!(report["versions"], serde_json::json!(["0.1.0", "1.0.0"]));
}

#[test]
fn apply_stops_at_failing_patch() {
  let env = TestEnv::from_fixture("failing.toml");

  env
    .verpatch_cmd()
    .arg("apply")
    .assert()
    .code(3)
    .stderr(predicate::str::contains("failed to apply patch 1.7.6"));

  assert_eq!(env.log(), ["apply-1.5.3"]);
}

#[test]
fn apply_uses_manifest_workdir() {
  let env = TestEnv::from_fixture("workdir.toml");
  std::fs::create_dir(env.temp.path().join("data")).unwrap();

  env.verpatch_cmd().arg("apply").assert().success();

  assert_eq!(env.lines("data/log.txt"), ["apply-1.0.0"]);
  assert!(env.log().is_empty());
}

#[test]
fn apply_with_explicit_manifest_path() {
  let env = TestEnv::from_fixture("basic.toml");
  let other = TestEnv::empty();

  // Commands run next to the manifest, not in the current directory.
  other
    .verpatch_cmd()
    .args(["apply", "-r", "=64.3.2", "--file"])
    .arg(&env.manifest_path)
    .assert()
    .success();

  assert_eq!(env.log(), ["apply-64.3.2"]);
  assert!(other.log().is_empty());
}
