//! Open-tab snapshot written by the tabs widget.
//!
//! The snapshot is a JSON object mapping tab id to a [`SimpleTab`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use super::TabSnapshot;

/// Minimal tab description shared with widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTab {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<Url>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_used_time: Option<u64>,
    #[serde(default)]
    pub is_private: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TabStoreError {
    #[error("reading tab snapshot {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("decoding tab snapshot {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a tab snapshot from `path`.
pub fn load_simple_tabs(path: &Path) -> Result<HashMap<String, SimpleTab>, TabStoreError> {
    let data = fs::read_to_string(path).map_err(|source| TabStoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| TabStoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Tab snapshot read from disk on every query.
#[derive(Debug, Clone)]
pub struct FileTabSnapshot {
    path: PathBuf,
}

impl FileTabSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabSnapshot for FileTabSnapshot {
    /// Missing or corrupt snapshots read as "no open tabs".
    fn open_tabs(&self) -> HashMap<String, SimpleTab> {
        match load_simple_tabs(&self.path) {
            Ok(tabs) => tabs,
            Err(e) => {
                tracing::warn!("tab snapshot unavailable: {}", e);
                HashMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_snapshot_keyed_by_id() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{
                "tab-1": {{ "title": "Docs", "url": "https://docs.rs/", "last_used_time": 1700000000000 }},
                "tab-2": {{ "is_private": true }}
            }}"#
        )
        .unwrap();

        let tabs = load_simple_tabs(f.path()).unwrap();
        assert_eq!(tabs.len(), 2);
        let docs = &tabs["tab-1"];
        assert_eq!(docs.title.as_deref(), Some("Docs"));
        assert_eq!(docs.url.as_ref().unwrap().as_str(), "https://docs.rs/");
        assert!(!docs.is_private);
        assert!(tabs["tab-2"].url.is_none());
        assert!(tabs["tab-2"].is_private);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_simple_tabs(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TabStoreError::Read { .. }));
    }

    #[test]
    fn corrupt_file_reads_as_empty_snapshot() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        assert!(matches!(
            load_simple_tabs(f.path()),
            Err(TabStoreError::Decode { .. })
        ));
        assert!(FileTabSnapshot::new(f.path()).open_tabs().is_empty());
    }
}
