// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Filesystem-backed [`ConfigStore`]: one JSON file per key.

use crate::config::{ConfigError, ConfigStore};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store configs as `<key>.json` files under a base directory.
#[derive(Debug, Clone)]
pub struct FsConfigStore {
    base: PathBuf,
}

impl FsConfigStore {
    /// Store rooted at the user config directory (e.g. `~/.config/edgemax`).
    ///
    /// The directory is created lazily on first save.
    pub fn new() -> Result<Self, ConfigError> {
        let proj =
            ProjectDirs::from("dev", "flyingrobots", "edgemax").ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::at(proj.config_dir()))
    }

    /// Store rooted at an explicit directory.
    pub fn at(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// Directory holding the config files.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl ConfigStore for FsConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let path = self.path_for(key);
        debug!(path = %path.display(), "reading config");
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(ConfigError::NotFound),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let path = self.path_for(key);
        fs::create_dir_all(&self.base)?;
        fs::write(&path, data)?;
        debug!(path = %path.display(), bytes = data.len(), "wrote config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path());
        assert!(matches!(store.load_raw("scan"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn save_creates_nested_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsConfigStore::at(dir.path().join("a/b"));
        store.save_raw("scan", b"{}").unwrap();
        assert!(store.path_for("scan").is_file());
        assert_eq!(store.load_raw("scan").unwrap(), b"{}");
    }

    #[test]
    fn keys_map_to_json_files_under_base() {
        let store = FsConfigStore::at("/tmp/edgemax");
        assert_eq!(store.base(), Path::new("/tmp/edgemax"));
        assert_eq!(store.path_for("scan"), store.base().join("scan.json"));
    }
}
