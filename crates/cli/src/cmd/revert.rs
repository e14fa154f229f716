//! Implementation of the `verpatch revert` command.

use std::path::Path;

use anyhow::Result;
use verpatch_lib::{Direction, VersionReq};

use super::run::run_patches;
use crate::output::OutputFormat;

/// Revert patches highest version first, stopping at the first failure.
///
/// A patch without a revert command fails the run when it is reached.
pub fn cmd_revert(file: &Path, range: Option<&VersionReq>, dry_run: bool, output: OutputFormat) -> Result<()> {
  run_patches(file, Direction::Revert, range, dry_run, output)
}
