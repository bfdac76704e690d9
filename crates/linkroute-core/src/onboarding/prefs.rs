//! String preference storage used by onboarding and the CLI.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the last app version the user ran.
pub const APP_VERSION_LATEST: &str = "app-version.latest";
/// Key holding whether the user was last browsing privately (`true`/`false`).
pub const LAST_MODE_PRIVATE: &str = "browsing.last-mode-private";

/// Simple string key/value preferences.
pub trait Prefs {
    fn string_for_key(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
}

/// In-memory preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPrefs {
    values: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prefs for MemoryPrefs {
    fn string_for_key(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Preferences persisted as a TOML table, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefs {
    /// `$XDG_STATE_HOME/linkroute/prefs.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("linkroute")?;
        Ok(xdg_dirs.place_state_file("prefs.toml")?)
    }

    pub fn open_default() -> Result<Self> {
        Self::open_at(&Self::default_path()?)
    }

    /// Opens prefs at `path`; a missing file is an empty store.
    pub fn open_at(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let data = fs::read_to_string(path)?;
            toml::from_str(&data)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current table to disk.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(&self.values)?)
            .with_context(|| format!("writing prefs {}", self.path.display()))?;
        Ok(())
    }

    /// Like [`Prefs::set_string`] but reports a failed write. The value is
    /// kept in memory either way.
    pub fn try_set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

impl Prefs for FilePrefs {
    fn string_for_key(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        if let Err(e) = self.try_set_string(key, value) {
            tracing::warn!("failed to persist prefs to {}: {:#}", self.path.display(), e);
        }
    }
}
