//! Version resolution and constraint-based selection.

use std::cmp::Ordering;

use semver::{Version, VersionReq};

use super::{ListError, PatchList};

impl PatchList {
  /// Parse every key and sort ascending by semver precedence.
  ///
  /// Each entry pairs the parsed version with the key it came from. Keys are
  /// parsed in lexical order so the reported error is the same on every call
  /// when several keys are invalid.
  ///
  /// # Errors
  ///
  /// - [`ListError::Empty`] if the list holds no patches
  /// - [`ListError::InvalidVersion`] for the first key that does not parse
  /// - [`ListError::AmbiguousVersion`] if two keys differ only in build metadata
  pub fn resolve(&self) -> Result<Vec<(Version, &str)>, ListError> {
    if self.patches.is_empty() {
      return Err(ListError::Empty);
    }

    let mut keys: Vec<&str> = self.keys().collect();
    keys.sort_unstable();

    let mut resolved = Vec::with_capacity(keys.len());
    for key in keys {
      let version = Version::parse(key).map_err(|source| ListError::InvalidVersion {
        key: key.to_string(),
        source,
      })?;
      resolved.push((version, key));
    }

    resolved.sort_by(|(a, _), (b, _)| a.cmp_precedence(b));

    // Equal precedence would leave the relative order of two patches up to
    // the sort, so refuse to pick one.
    if let Some(pair) = resolved
      .windows(2)
      .find(|pair| pair[0].0.cmp_precedence(&pair[1].0) == Ordering::Equal)
    {
      return Err(ListError::AmbiguousVersion {
        first: pair[0].1.to_string(),
        second: pair[1].1.to_string(),
      });
    }

    Ok(resolved)
  }

  /// Versions in the list, lowest to highest.
  pub fn versions(&self) -> Result<Vec<Version>, ListError> {
    Ok(self.resolve()?.into_iter().map(|(version, _)| version).collect())
  }

  /// The highest version in the list.
  pub fn highest_version(&self) -> Result<Version, ListError> {
    self.resolve()?.pop().map(|(version, _)| version).ok_or(ListError::Empty)
  }

  /// Versions matching `req`, lowest to highest.
  ///
  /// A constraint that matches nothing yields an empty vector, not an error.
  pub fn pick_versions(&self, req: &VersionReq) -> Result<Vec<Version>, ListError> {
    Ok(
      self
        .resolve()?
        .into_iter()
        .filter(|(version, _)| req.matches(version))
        .map(|(version, _)| version)
        .collect(),
    )
  }

  /// A new list holding only the patches whose versions match `req`.
  ///
  /// The returned list shares its patches with `self`.
  pub fn pick(&self, req: &VersionReq) -> Result<PatchList, ListError> {
    let mut picked = PatchList::new();
    for (version, key) in self.resolve()? {
      if !req.matches(&version) {
        continue;
      }
      let patch = self.patches.get(key).ok_or_else(|| ListError::MissingPatch(version.clone()))?;
      picked.insert_shared(key, patch.clone());
    }
    Ok(picked)
  }
}
