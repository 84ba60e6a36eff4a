use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::Item;

/// Failures of the backing document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed item document {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no item id left to assign")]
    IdsExhausted,
    #[error("failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Whole-collection access to persisted items.
///
/// Every write replaces the full collection.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Load every item in insertion order.
    async fn read_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Replace the stored collection with `items`.
    async fn write_all(&self, items: &[Item]) -> Result<(), StoreError>;
}

/// Item collection kept as a pretty-printed JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "items".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ItemStore for JsonFileStore {
    /// A missing or blank file is an empty collection. Anything unreadable
    /// or unparseable is an error.
    async fn read_all(&self) -> Result<Vec<Item>, StoreError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "Data file {} does not exist yet, starting empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<Item> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!("Read {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    async fn write_all(&self, items: &[Item]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items)?;
        let temp_path = self.temp_path();

        let write_error = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        tokio::fs::write(&temp_path, json).await.map_err(write_error)?;
        if let Err(source) = tokio::fs::rename(&temp_path, &self.path).await {
            if let Err(e) = tokio::fs::remove_file(&temp_path).await {
                tracing::warn!("Failed to remove {}: {}", temp_path.display(), e);
            }
            return Err(write_error(source));
        }

        tracing::debug!("Wrote {} items to {}", items.len(), self.path.display());
        Ok(())
    }
}

/// In-process store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: tokio::sync::Mutex<Vec<Item>>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: tokio::sync::Mutex::new(items),
            fail_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[async_trait]
impl ItemStore for MemoryStore {
    async fn read_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.lock().await.clone())
    }

    async fn write_all(&self, items: &[Item]) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Write {
                path: PathBuf::from("memory"),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "writes disabled"),
            });
        }
        *self.items.lock().await = items.to_vec();
        Ok(())
    }
}
