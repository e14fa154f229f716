//! Version-ordered patch lists.
//!
//! A [`PatchList`] maps version strings to patches. It keeps no order of its
//! own: every query parses the keys and sorts them by semantic version
//! precedence, so insertion order never matters.
//!
//! - [`PatchList::versions`] and [`PatchList::highest_version`] inspect the order
//! - [`PatchList::pick`] and [`PatchList::pick_versions`] select by constraint
//! - [`PatchList::apply`] and [`PatchList::revert`] run the patches

mod execute;
mod resolve;
mod types;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub use types::{Direction, ListError, PatchError};

use crate::patch::Patch;

/// A set of patches keyed by version string.
///
/// Patches are held behind [`Arc`] so a list produced by [`PatchList::pick`]
/// shares them with the list it came from.
#[derive(Clone, Default)]
pub struct PatchList {
  patches: HashMap<String, Arc<dyn Patch>>,
}

impl PatchList {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a patch under `version`, returning the patch it replaced.
  ///
  /// The key is validated lazily; an unparsable key makes every later
  /// query fail with [`ListError::InvalidVersion`].
  pub fn insert(&mut self, version: impl Into<String>, patch: impl Patch + 'static) -> Option<Arc<dyn Patch>> {
    self.patches.insert(version.into(), Arc::new(patch))
  }

  /// Add an already shared patch under `version`.
  pub fn insert_shared(&mut self, version: impl Into<String>, patch: Arc<dyn Patch>) -> Option<Arc<dyn Patch>> {
    self.patches.insert(version.into(), patch)
  }

  /// Builder-style [`PatchList::insert`].
  pub fn with(mut self, version: impl Into<String>, patch: impl Patch + 'static) -> Self {
    self.insert(version, patch);
    self
  }

  pub fn get(&self, version: &str) -> Option<&Arc<dyn Patch>> {
    self.patches.get(version)
  }

  pub fn remove(&mut self, version: &str) -> Option<Arc<dyn Patch>> {
    self.patches.remove(version)
  }

  pub fn contains(&self, version: &str) -> bool {
    self.patches.contains_key(version)
  }

  pub fn len(&self) -> usize {
    self.patches.len()
  }

  pub fn is_empty(&self) -> bool {
    self.patches.is_empty()
  }

  /// Version keys in no particular order.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.patches.keys().map(String::as_str)
  }
}

impl fmt::Debug for PatchList {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut keys: Vec<&str> = self.keys().collect();
    keys.sort_unstable();
    f.debug_struct("PatchList").field("versions", &keys).finish()
  }
}

impl<K, P> FromIterator<(K, P)> for PatchList
where
  K: Into<String>,
  P: Patch + 'static,
{
  fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
    let mut list = PatchList::new();
    for (version, patch) in iter {
      list.insert(version, patch);
    }
    list
  }
}
