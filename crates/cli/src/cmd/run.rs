//! Shared traversal for `apply` and `revert`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};
use verpatch_lib::{BoxError, Direction, Patch, Version, VersionReq};

use crate::output::{
  OutputFormat, direction_symbol, format_duration, print_info, print_json, print_step, print_success,
  print_warning,
};

/// JSON report of a completed run.
#[derive(Debug, Serialize)]
struct RunReport {
  direction: &'static str,
  dry_run: bool,
  versions: Vec<String>,
}

pub(super) fn run_patches(
  file: &Path,
  direction: Direction,
  range: Option<&VersionReq>,
  dry_run: bool,
  output: OutputFormat,
) -> Result<()> {
  let (manifest, list) = super::load(file)?;
  let json = output.is_json();

  info!(manifest = %file.display(), %direction, dry_run, "starting run");

  if !json {
    let verb = if dry_run { "Would" } else { "Will" };
    print_info(&format!("{} {} patches from {}", verb, direction, file.display()));
  }

  let start = Instant::now();
  let mut visited = Vec::new();

  let mut step = |version: &Version, patch: &dyn Patch| -> Result<(), BoxError> {
    if let Some(req) = range
      && !req.matches(version)
    {
      debug!(%version, constraint = %req, "outside range");
      return Ok(());
    }

    if !dry_run {
      match direction {
        Direction::Apply => patch.apply()?,
        Direction::Revert => patch.revert()?,
      }
    }

    let key = version.to_string();
    if !json {
      print_step(direction_symbol(direction), &key, manifest.describe(&key));
      let irreversible = manifest.patches.get(&key).is_some_and(|def| def.revert.is_none());
      if dry_run && direction == Direction::Revert && irreversible {
        print_warning(&format!("{} has no revert command and would fail", key));
      }
    }
    visited.push(key);
    Ok(())
  };

  match direction {
    Direction::Apply => list.apply_with(&mut step)?,
    Direction::Revert => list.revert_with(&mut step)?,
  }

  if json {
    return print_json(&RunReport {
      direction: direction.as_str(),
      dry_run,
      versions: visited,
    });
  }

  if visited.is_empty() {
    print_info(&format!("Nothing to {}", direction));
  } else if dry_run {
    print_success(&format!("Would {} {} patch(es)", direction, visited.len()));
  } else {
    print_success(&format!(
      "{} {} patch(es) in {}",
      past_tense(direction),
      visited.len(),
      format_duration(start.elapsed())
    ));
  }

  Ok(())
}

fn past_tense(direction: Direction) -> &'static str {
  match direction {
    Direction::Apply => "Applied",
    Direction::Revert => "Reverted",
  }
}
