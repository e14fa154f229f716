//! Implementation of the `verpatch highest` command.

use std::path::Path;

use anyhow::Result;

use crate::output::{OutputFormat, print_json};

pub fn cmd_highest(file: &Path, output: OutputFormat) -> Result<()> {
  let (_, list) = super::load(file)?;
  let highest = list.highest_version()?.to_string();

  if output.is_json() {
    print_json(&serde_json::json!({ "highest": highest }))?;
  } else {
    println!("{}", highest);
  }

  Ok(())
}
