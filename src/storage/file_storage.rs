use crate::storage::{SlotStorage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slot storage backed by a directory, one `<key>.json` file per slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into()
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_plain_name = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !is_plain_name {
            return Err(StorageError::InvalidKey { key: key.to_string() });
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StorageError::io(key, error))
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        fs::create_dir_all(&self.directory).map_err(|error| StorageError::io(key, error))?;

        //NOTE: Write to a sibling file first so a failed write never truncates the previous value
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|error| StorageError::io(key, error))?;
        fs::rename(&staging, &path).map_err(|error| StorageError::io(key, error))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(StorageError::io(key, error))
        }
    }
}
