//! The patch contract.
//!
//! A patch is a unit of change that knows how to apply itself and how to undo
//! itself. The engine in [`crate::list`] never looks inside a patch; it only
//! decides when each one runs.

use std::fmt;

/// Error type returned by patch operations.
///
/// Patch failures are opaque to the engine, so any error type can be boxed
/// into this and recovered later through [`std::error::Error::source`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A versioned unit of change.
///
/// Either operation may fail, including when the operation is impossible. A
/// data migration that drops information, for example, may refuse to revert.
pub trait Patch {
  /// Apply the patch.
  fn apply(&self) -> Result<(), BoxError>;

  /// Revert the patch.
  fn revert(&self) -> Result<(), BoxError>;
}

/// A patch that forwards both operations to closures.
///
/// Concrete types read better in application code; this exists for tests and
/// one-off lists built inline.
pub struct FnPatch<A, R> {
  apply: A,
  revert: R,
}

impl<A, R> FnPatch<A, R>
where
  A: Fn() -> Result<(), BoxError>,
  R: Fn() -> Result<(), BoxError>,
{
  pub fn new(apply: A, revert: R) -> Self {
    Self { apply, revert }
  }
}

impl<A, R> Patch for FnPatch<A, R>
where
  A: Fn() -> Result<(), BoxError>,
  R: Fn() -> Result<(), BoxError>,
{
  fn apply(&self) -> Result<(), BoxError> {
    (self.apply)()
  }

  fn revert(&self) -> Result<(), BoxError> {
    (self.revert)()
  }
}

impl<A, R> fmt::Debug for FnPatch<A, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnPatch").finish_non_exhaustive()
  }
}
