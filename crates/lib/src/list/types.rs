//! Error and direction types for patch list traversal.

use std::fmt;

use semver::Version;
use thiserror::Error;

use crate::patch::BoxError;

/// Which way a traversal walks the version sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
  /// Ascending order, calling [`Patch::apply`](crate::patch::Patch::apply).
  Apply,
  /// Descending order, calling [`Patch::revert`](crate::patch::Patch::revert).
  Revert,
}

impl Direction {
  pub fn is_apply(self) -> bool {
    matches!(self, Direction::Apply)
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Direction::Apply => "apply",
      Direction::Revert => "revert",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A patch failed while being applied or reverted.
///
/// This is the only error a traversal produces once patches have started
/// running, and it always names the version and direction that broke. Callers
/// that drive a rollback strategy branch on this type:
///
/// ```
/// use verpatch_lib::list::{ListError, PatchList};
///
/// fn run(list: &PatchList) {
///   match list.apply() {
///     Ok(()) => {}
///     Err(ListError::Patch(failed)) => {
///       eprintln!("patch {} failed during {}", failed.version, failed.direction);
///     }
///     Err(other) => eprintln!("invalid patch list: {other}"),
///   }
/// }
/// ```
#[derive(Debug, Error)]
#[error("failed to {direction} patch {version}: {source}")]
pub struct PatchError {
  /// Version of the patch that failed.
  pub version: Version,
  /// Whether the failed operation was an apply or a revert.
  pub direction: Direction,
  /// The error reported by the patch (or the callback standing in for it).
  #[source]
  pub source: BoxError,
}

impl PatchError {
  pub fn is_apply(&self) -> bool {
    self.direction.is_apply()
  }
}

/// Errors returned by [`PatchList`](super::PatchList) operations.
///
/// Everything except [`ListError::Patch`] is structural and is raised before
/// any patch runs.
#[derive(Debug, Error)]
pub enum ListError {
  /// The list holds no patches.
  #[error("patch list empty")]
  Empty,

  /// A key is not a valid semantic version.
  #[error("invalid patch version {key:?}: {source}")]
  InvalidVersion {
    key: String,
    #[source]
    source: semver::Error,
  },

  /// Two keys resolve to versions of equal precedence, so their order is undefined.
  #[error("patch versions {first} and {second} have equal precedence")]
  AmbiguousVersion { first: String, second: String },

  /// A resolved version has no entry in the list.
  #[error("unable to locate patch {0}")]
  MissingPatch(Version),

  /// A patch failed during apply or revert.
  #[error(transparent)]
  Patch(#[from] PatchError),
}

impl ListError {
  /// Returns the patch failure, if this error is one.
  pub fn as_patch_error(&self) -> Option<&PatchError> {
    match self {
      ListError::Patch(err) => Some(err),
      _ => None,
    }
  }

  /// Converts into the patch failure, handing back structural errors unchanged.
  pub fn into_patch_error(self) -> Result<PatchError, ListError> {
    match self {
      ListError::Patch(err) => Ok(err),
      other => Err(other),
    }
  }
}
