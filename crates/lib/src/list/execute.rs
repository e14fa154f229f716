//! Ordered apply and revert.
//!
//! Both traversals resolve the full version order once, then visit one patch
//! at a time and stop at the first failure. The failure is wrapped in a
//! [`PatchError`] naming the version and direction.

use semver::{Version, VersionReq};
use tracing::{debug, error, info};

use super::{Direction, ListError, PatchError, PatchList};
use crate::patch::{BoxError, Patch};

impl PatchList {
  /// Apply every patch in ascending version order.
  pub fn apply(&self) -> Result<(), ListError> {
    self.apply_with(|_, patch| patch.apply())
  }

  /// Apply through a callback instead of calling [`Patch::apply`] directly.
  ///
  /// The callback sees every version in ascending order and decides what to
  /// do with its patch: run it, log around it, skip it, or record it for a
  /// dry run. An error from the callback is reported as a failed apply of
  /// that version and stops the traversal.
  pub fn apply_with<F>(&self, f: F) -> Result<(), ListError>
  where
    F: FnMut(&Version, &dyn Patch) -> Result<(), BoxError>,
  {
    self.traverse(Direction::Apply, f)
  }

  /// Apply only the patches whose versions match `req`, in ascending order.
  ///
  /// Versions outside `req` are skipped but still resolved, so an invalid key
  /// anywhere in the list fails the call.
  pub fn apply_within(&self, req: &VersionReq) -> Result<(), ListError> {
    self.apply_with(within(req, |patch| patch.apply()))
  }

  /// Revert every patch in descending version order.
  pub fn revert(&self) -> Result<(), ListError> {
    self.revert_with(|_, patch| patch.revert())
  }

  /// Revert through a callback; see [`PatchList::apply_with`].
  ///
  /// When the callback fails at version V, every version above V has been
  /// visited and V and everything below it have not been reverted.
  pub fn revert_with<F>(&self, f: F) -> Result<(), ListError>
  where
    F: FnMut(&Version, &dyn Patch) -> Result<(), BoxError>,
  {
    self.traverse(Direction::Revert, f)
  }

  /// Revert only the patches whose versions match `req`, in descending order.
  pub fn revert_within(&self, req: &VersionReq) -> Result<(), ListError> {
    self.revert_with(within(req, |patch| patch.revert()))
  }

  fn traverse<F>(&self, direction: Direction, mut f: F) -> Result<(), ListError>
  where
    F: FnMut(&Version, &dyn Patch) -> Result<(), BoxError>,
  {
    let mut resolved = self.resolve()?;
    if direction == Direction::Revert {
      resolved.reverse();
    }

    info!(%direction, count = resolved.len(), "running patches");

    for (version, key) in &resolved {
      let patch = self
        .patches
        .get(*key)
        .ok_or_else(|| ListError::MissingPatch(version.clone()))?;

      debug!(%version, %direction, "running patch");

      if let Err(source) = f(version, patch.as_ref()) {
        error!(%version, %direction, error = %source, "patch failed");
        return Err(
          PatchError {
            version: version.clone(),
            direction,
            source,
          }
          .into(),
        );
      }
    }

    info!(%direction, count = resolved.len(), "patches complete");
    Ok(())
  }
}

/// Wrap `run` so it only fires for versions matching `req`.
fn within<'r, R>(req: &'r VersionReq, run: R) -> impl FnMut(&Version, &dyn Patch) -> Result<(), BoxError> + 'r
where
  R: Fn(&dyn Patch) -> Result<(), BoxError> + 'r,
{
  move |version, patch| {
    if req.matches(version) {
      run(patch)
    } else {
      debug!(%version, constraint = %req, "skipping patch outside constraint");
      Ok(())
    }
  }
}
