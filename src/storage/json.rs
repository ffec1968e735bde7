//! JSON file-based preference storage.
//!
//! Uses atomic file writes (write-to-temp + rename) so a crash mid-write never
//! leaves a truncated document behind.

use crate::domain::error::{LauncherError, Result};
use crate::storage::backend::{PreferenceStore, DARK_MODE_KEY};
use crate::storage::models::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const FORMAT_VERSION: u32 = 1;

/// Top-level document serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    preferences: BTreeMap<String, PreferenceRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            preferences: BTreeMap::new(),
        }
    }
}

/// JSON file preference backend.
///
/// The whole document is kept in memory and rewritten on every change.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "darkMode": { "value": true, "updated_at": 1700000000 }
///   }
/// }
/// ```
pub struct JsonStorage {
    file_path: PathBuf,
    data: StorageData,
}

impl JsonStorage {
    /// Creates or opens a JSON storage file.
    ///
    /// Parent directories are created automatically. A missing file starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(preference_count = data.preferences.len(), "storage initialized");

        Ok(Self { file_path, data })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| LauncherError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(LauncherError::Storage(format!(
                "unsupported storage version {} (expected <= {FORMAT_VERSION})",
                data.version
            )));
        }

        tracing::debug!(version = data.version, preferences = data.preferences.len(), "loaded storage data");
        Ok(data)
    }

    /// Writes the document to a sibling temp file, then renames it into place.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| LauncherError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl PreferenceStore for JsonStorage {
    fn load_dark_mode(&self) -> Result<Option<bool>> {
        let _span = tracing::debug_span!("json_load_dark_mode").entered();
        Ok(self.data.preferences.get(DARK_MODE_KEY).map(|r| r.value))
    }

    fn save_dark_mode(&mut self, dark_mode: bool) -> Result<()> {
        let _span = tracing::debug_span!("json_save_dark_mode", dark_mode = dark_mode).entered();

        self.data
            .preferences
            .insert(DARK_MODE_KEY.to_string(), PreferenceRecord::new(dark_mode));
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_has_no_preference() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("nested/preferences.json")).unwrap();
        assert_eq!(storage.load_dark_mode().unwrap(), None);
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn saved_preference_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.save_dark_mode(true).unwrap();
        drop(storage);

        let reopened = JsonStorage::new(path.clone()).unwrap();
        assert_eq!(reopened.load_dark_mode().unwrap(), Some(true));
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn document_uses_dark_mode_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut storage = JsonStorage::new(path.clone()).unwrap();
        storage.save_dark_mode(false).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["version"], 1);
        assert_eq!(doc["preferences"]["darkMode"]["value"], false);
        assert!(doc["preferences"]["darkMode"]["updated_at"].is_i64());
    }

    #[test]
    fn corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(JsonStorage::new(path), Err(LauncherError::Storage(_))));
    }

    #[test]
    fn newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"version": 99, "preferences": {}}"#).unwrap();
        assert!(matches!(JsonStorage::new(path), Err(LauncherError::Storage(_))));
    }
}
