//! `versions`, `highest` and `pick` integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn versions_are_sorted() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .arg("versions")
    .assert()
    .success()
    .stdout("0.1.0\n1.0.0\n1.7.3\n2.0.1\n64.3.2\n");

  // Inspection never runs patches.
  assert!(env.log().is_empty());
}

#[test]
fn versions_as_json() {
  let env = TestEnv::from_fixture("basic.toml");

  let output = env.verpatch_cmd().args(["versions", "-o", "json"]).output().unwrap();
  assert!(output.status.success());

  let versions: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(versions, ["0.1.0", "1.0.0", "1.7.3", "2.0.1", "64.3.2"]);
}

#[test]
fn highest_version() {
  let env = TestEnv::from_fixture("basic.toml");

  env.verpatch_cmd().arg("highest").assert().success().stdout("64.3.2\n");
}

#[test]
fn pick_filters_by_constraint() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .args(["pick", ">=1.0.0, <2.0.0"])
    .assert()
    .success()
    .stdout("1.0.0\n1.7.3\n");
}

#[test]
fn pick_matching_nothing_succeeds() {
  let env = TestEnv::from_fixture("basic.toml");

  env
    .verpatch_cmd()
    .args(["pick", ">100"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No patch versions match"));

  let output = env.verpatch_cmd().args(["pick", ">100", "-o", "json"]).output().unwrap();
  let picked: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
  assert!(picked.is_empty());
}

#[test]
fn pick_rejects_invalid_constraint() {
  let env = TestEnv::from_fixture("basic.toml");

  env.verpatch_cmd().args(["pick", "not a constraint"]).assert().code(2);
}

#[test]
fn invalid_version_key_fails() {
  let env = TestEnv::from_fixture("invalid_version.toml");

  env
    .verpatch_cmd()
    .arg("versions")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("invalid patch version \"latest\""));
}

#[test]
fn empty_manifest_fails() {
  let env = TestEnv::empty();
  std::fs::write(&env.manifest_path, "").unwrap();

  env
    .verpatch_cmd()
    .arg("highest")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("patch list empty"));
}
