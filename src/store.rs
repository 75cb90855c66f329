//! File-backed storage for the `/files/` route.
//!
//! The store owns a serving directory and an index of the file names known
//! to exist in it. The index is filled once when the store is opened and is
//! kept current on every successful write, so a lookup never needs a syscall
//! to decide whether a name exists.
//!
//! Writes are not coordinated across connections: two writers racing on the
//! same name interleave at whatever granularity the OS gives, and a reader
//! may observe a partially written file. The index lock is held across a
//! filesystem call only when dropping a name whose file has vanished.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("invalid file name {0:?}")]
    InvalidName(String),
    #[error("file {0:?} not found")]
    NotFound(String),
    #[error("I/O error on {name:?}: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    index: RwLock<HashSet<String>>,
}

impl FileStore {
    /// Opens `root` and indexes the regular files directly inside it.
    ///
    /// Fails only when `root` is not an existing directory. A directory that
    /// exists but cannot be listed yields an empty index.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();

        let is_dir = tokio::fs::metadata(&root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        if !is_dir {
            return Err(StoreError::NotADirectory(root));
        }

        let names = match scan(&root).await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(dir = %root.display(), error = %e, "Could not list serving directory");
                HashSet::new()
            }
        };

        tracing::info!(dir = %root.display(), files = names.len(), "Indexed serving directory");

        Ok(Self {
            root,
            index: RwLock::new(names),
        })
    }

    /// Opens the configured directory, or returns `None` (file routes
    /// disabled) when there is none or it is unusable.
    pub async fn open_configured(dir: Option<&Path>) -> Option<Self> {
        let Some(dir) = dir else {
            tracing::warn!("No serving directory configured, file routes disabled");
            return None;
        };

        match Self::open(dir).await {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!(error = %e, "File routes disabled");
                None
            }
        }
    }

    pub async fn contains(&self, name: &str) -> bool {
        self.index.read().await.contains(name)
    }

    /// Snapshot of the indexed names, sorted.
    pub async fn known_files(&self) -> Vec<String> {
        let mut names: Vec<String> = self.index.read().await.iter().cloned().collect();
        names.sort();
        names
    }

    /// Reads a file that is present in the index.
    ///
    /// A file that vanished from disk since it was indexed is reported as
    /// `NotFound` and dropped from the index.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        validate_name(name)?;

        if !self.contains(name).await {
            return Err(StoreError::NotFound(name.to_string()));
        }

        match tokio::fs::read(self.root.join(name)).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.forget_if_missing(name).await;
                Err(StoreError::NotFound(name.to_string()))
            }
            Err(source) => Err(StoreError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    /// Drops `name` from the index unless it exists on disk again.
    ///
    /// The existence check runs under the write lock so that a concurrent
    /// `write` that recreated the file cannot lose its index entry.
    async fn forget_if_missing(&self, name: &str) {
        let mut index = self.index.write().await;
        let exists = tokio::fs::try_exists(self.root.join(name))
            .await
            .unwrap_or(true);
        if !exists {
            index.remove(name);
        }
    }

    /// Creates or truncates `name` and writes `contents` to it.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StoreError> {
        validate_name(name)?;

        tokio::fs::write(self.root.join(name), contents)
            .await
            .map_err(|source| StoreError::Io {
                name: name.to_string(),
                source,
            })?;

        self.index.write().await.insert(name.to_string());
        Ok(())
    }
}

/// Names must refer to an entry directly inside the root.
fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        Err(StoreError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

async fn scan(root: &Path) -> io::Result<HashSet<String>> {
    let mut names = HashSet::new();
    let mut entries = tokio::fs::read_dir(root).await?;

    while let Some(entry) = entries.next_entry().await? {
        // metadata() follows symlinks, DirEntry::file_type() does not
        let is_file = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => {
                names.insert(name);
            }
            Err(raw) => {
                tracing::debug!(name = ?raw, "Skipping non UTF-8 file name");
            }
        }
    }

    Ok(names)
}
