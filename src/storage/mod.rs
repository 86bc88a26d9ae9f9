use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{app_config_path, config_env_dirs, ConfigPathError, APP_DIR};

const STORAGE_FILE: &str = "storage.json";

/// Key holding the user's persisted settings patch.
pub const THEME_SETTINGS_KEY: &str = "themeSettings";
/// Key holding the build id whose override patch was last applied.
pub const OVERRIDE_THEME_FLAG_KEY: &str = "overrideThemeFlag";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to write storage file: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize storage entries")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// String key/value persistence in the manner of browser local storage.
///
/// Reads never fail: an absent or unreadable key is `None`.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON object on disk, loaded once and rewritten on every mutation.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn with_path(path: PathBuf) -> Self {
        let entries = load_entries(&path);
        Self { path, entries }
    }

    pub fn with_default_path() -> StorageResult<Self> {
        let (xdg_config_home, home) = config_env_dirs();
        let path = app_config_path(
            APP_DIR,
            STORAGE_FILE,
            xdg_config_home.as_deref(),
            home.as_deref(),
        )
        .map_err(|error| match error {
            ConfigPathError::MissingHomeDirectory => StorageError::MissingHomeDirectory,
        })?;
        Ok(Self::with_path(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let serialized = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, serialized).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}

fn load_entries(path: &Path) -> BTreeMap<String, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
        Err(err) => {
            tracing::warn!(?err, path = %path.display(), "failed to read storage file; starting empty");
            return BTreeMap::new();
        }
    };
    serde_json::from_str(&contents).unwrap_or_else(|err| {
        tracing::warn!(?err, path = %path.display(), "failed to parse storage file; starting empty");
        BTreeMap::new()
    })
}
