//! Implementation of the `verpatch pick` command.
//!
//! Lists the versions a constraint selects without running anything, which is
//! how an operator previews a ranged apply or revert.

use std::path::Path;

use anyhow::Result;
use verpatch_lib::VersionReq;

use crate::output::{OutputFormat, print_info, print_json};

pub fn cmd_pick(file: &Path, constraint: &VersionReq, output: OutputFormat) -> Result<()> {
  let (_, list) = super::load(file)?;
  let picked: Vec<String> = list.pick_versions(constraint)?.iter().map(ToString::to_string).collect();

  if output.is_json() {
    print_json(&picked)?;
  } else if picked.is_empty() {
    print_info(&format!("No patch versions match {}", constraint));
  } else {
    for version in &picked {
      println!("{}", version);
    }
  }

  Ok(())
}
