//! Implementation of the `verpatch apply` command.

use std::path::Path;

use anyhow::Result;
use verpatch_lib::{Direction, VersionReq};

use super::run::run_patches;
use crate::output::OutputFormat;

/// Apply patches lowest version first, stopping at the first failure.
///
/// With `range`, versions outside the constraint are skipped. With `dry_run`,
/// the versions that would run are listed and no command is executed.
pub fn cmd_apply(file: &Path, range: Option<&VersionReq>, dry_run: bool, output: OutputFormat) -> Result<()> {
  run_patches(file, Direction::Apply, range, dry_run, output)
}
