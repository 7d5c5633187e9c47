//! Durable key-value storage for client preferences

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// File name of the preference document inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Abstract preference store
///
/// Reads never fail: a missing or unreadable value is simply absent.
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Preferences kept in a JSON object file
pub struct FilePreferences {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FilePreferences {
    /// Open the preference file at `path`
    ///
    /// A missing file is treated as empty; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)
                .map_err(|e| StorageError::Backend(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StorageError::Backend(e.to_string())),
        };

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Start with no entries at `path`, ignoring whatever the file holds
    pub fn fresh(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Open `preferences.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> StorageResult<Self> {
        Self::open(dir.as_ref().join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the map atomically: temp file in the same directory, then rename
    fn persist(&self, entries: &BTreeMap<String, String>) -> StorageResult<()> {
        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Backend(e.to_string()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, data).map_err(|e| StorageError::Backend(e.to_string()))?;
        std::fs::rename(&temp_path, &self.path).map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Backend("preference lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }
}

/// In-memory preference store (for testing)
#[derive(Default)]
pub struct MemoryPreferences {
    data: RwLock<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.data.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data
            .write()
            .map_err(|_| StorageError::Backend("preference lock poisoned".to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
