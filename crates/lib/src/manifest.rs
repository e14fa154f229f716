//! TOML patch manifests.
//!
//! A manifest declares command patches keyed by version:
//!
//! ```toml
//! [settings]
//! shell = "/bin/sh"
//! workdir = "db"
//!
//! [env]
//! DATABASE_URL = "sqlite://app.db"
//!
//! [patches."1.0.0"]
//! apply = "sqlite3 app.db < 001_up.sql"
//! revert = "sqlite3 app.db < 001_down.sql"
//! description = "create tables"
//! ```
//!
//! Version keys are not checked here; they are validated when the resulting
//! [`PatchList`] is resolved.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::command::CommandPatch;
use crate::list::PatchList;

pub const DEFAULT_MANIFEST: &str = "patches.toml";

#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("failed to read manifest {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to parse manifest {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },
}

/// Options shared by every patch in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
  /// Shell override; defaults to `/bin/sh` (Unix) or `cmd.exe` (Windows).
  pub shell: Option<String>,
  /// Working directory, relative to the manifest's directory.
  pub workdir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchDef {
  pub apply: String,
  pub revert: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestFile {
  #[serde(default)]
  settings: Settings,
  #[serde(default)]
  env: BTreeMap<String, String>,
  #[serde(default)]
  patches: BTreeMap<String, PatchDef>,
}

/// A parsed manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
  pub settings: Settings,
  pub env: BTreeMap<String, String>,
  pub patches: BTreeMap<String, PatchDef>,
  base_dir: PathBuf,
}

impl Manifest {
  /// Read and parse the manifest at `path`.
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(&content, path)
  }

  /// Parse manifest `content` as if it had been read from `path`.
  ///
  /// `path` only anchors relative working directories; it need not exist.
  pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
    let file: ManifestFile = toml::from_str(content).map_err(|source| ManifestError::Parse {
      path: path.to_path_buf(),
      source,
    })?;

    let base_dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
      _ => PathBuf::from("."),
    };

    debug!(path = %path.display(), patches = file.patches.len(), "loaded manifest");

    Ok(Self {
      settings: file.settings,
      env: file.env,
      patches: file.patches,
      base_dir,
    })
  }

  /// Directory commands run in.
  pub fn workdir(&self) -> PathBuf {
    match &self.settings.workdir {
      Some(dir) if dir.is_absolute() => dir.clone(),
      Some(dir) => self.base_dir.join(dir),
      None => self.base_dir.clone(),
    }
  }

  pub fn describe(&self, version: &str) -> Option<&str> {
    self.patches.get(version)?.description.as_deref()
  }

  /// Build a command patch for each entry.
  pub fn patch_list(&self) -> PatchList {
    let workdir = self.workdir();
    let mut list = PatchList::new();

    for (version, def) in &self.patches {
      let mut patch = CommandPatch::new(version.as_str(), def.apply.as_str())
        .with_workdir(&workdir)
        .with_env(self.env.clone());
      if let Some(revert) = &def.revert {
        patch = patch.with_revert(revert.as_str());
      }
      if let Some(shell) = &self.settings.shell {
        patch = patch.with_shell(shell.as_str());
      }
      list.insert(version.as_str(), patch);
    }

    list
  }
}
