mod apply;
mod highest;
mod pick;
mod revert;
mod run;
mod versions;

pub use apply::cmd_apply;
pub use highest::cmd_highest;
pub use pick::cmd_pick;
pub use revert::cmd_revert;
pub use versions::cmd_versions;

use std::path::Path;

use anyhow::Result;
use verpatch_lib::PatchList;
use verpatch_lib::manifest::Manifest;

/// Load the manifest at `file` and build its patch list.
fn load(file: &Path) -> Result<(Manifest, PatchList)> {
  let manifest = Manifest::load(file)?;
  let list = manifest.patch_list();
  Ok((manifest, list))
}
