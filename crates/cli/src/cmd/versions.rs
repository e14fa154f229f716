//! Implementation of the `verpatch versions` command.

use std::path::Path;

use anyhow::Result;

use crate::output::{OutputFormat, print_json};

/// Print every patch version, lowest first.
pub fn cmd_versions(file: &Path, output: OutputFormat) -> Result<()> {
  let (_, list) = super::load(file)?;
  let versions: Vec<String> = list.versions()?.iter().map(ToString::to_string).collect();

  if output.is_json() {
    print_json(&versions)?;
  } else {
    for version in &versions {
      println!("{}", version);
    }
  }

  Ok(())
}
