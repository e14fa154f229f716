//! verpatch-lib: version-ordered patch application
//!
//! This crate runs a set of versioned patches in semantic version order:
//! - `Patch`: a unit of change with `apply` and `revert`
//! - `PatchList`: patches keyed by version, applied ascending and reverted descending
//! - `PatchError`: the failure of a single patch, naming its version and direction
//! - `Manifest` / `CommandPatch`: shell command patches declared in a TOML file
//!
//! The crate keeps no record of which patches have run; callers scope a run
//! with a `semver::VersionReq`.

pub mod command;
pub mod list;
pub mod manifest;
pub mod patch;

#[cfg(test)]
mod util;

pub use list::{Direction, ListError, PatchError, PatchList};
pub use patch::{BoxError, FnPatch, Patch};
pub use semver::{Version, VersionReq};
