//! This module provides implementations of [`KeyValueStorage`]

use std::collections::HashMap;
use std::error::Error;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::traits::KeyValueStorage;


/// A storage that only lives in memory
#[derive(Clone, Default, Debug, PartialEq)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}



/// A storage that writes every key into its own file, inside a backing folder
#[derive(Clone, Debug, PartialEq)]
pub struct FileStorage {
    backing_folder: PathBuf,
}

impl FileStorage {
    /// Use `folder` as the backing folder. It is created on the first write, if needed.
    pub fn new(folder: &Path) -> Self {
        Self {
            backing_folder: PathBuf::from(folder),
        }
    }

    /// Use the folder set in [`config::DATA_FOLDER`](crate::config::DATA_FOLDER)
    pub fn from_config() -> Result<Self, Box<dyn Error>> {
        let folder = crate::config::DATA_FOLDER.lock()
            .map_err(|_| "Unable to read the data folder setting")?
            .clone();
        Ok(Self::new(&folder))
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    /// The file that holds the value of `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name = format!("{}.json", sanitize_filename::sanitize(key));
        self.backing_folder.join(file_name)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Unable to open file {:?}: {}", path, err).into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        if let Err(err) = std::fs::create_dir_all(&self.backing_folder) {
            return Err(format!("Unable to create folder {:?}: {}", self.backing_folder, err).into());
        }

        // Written next to the target, then renamed over it: the target is never left half-written
        let path = self.path_for(key);
        let mut file = tempfile::NamedTempFile::new_in(&self.backing_folder)
            .map_err(|err| format!("Unable to create a temporary file in {:?}: {}", self.backing_folder, err))?;
        if let Err(err) = file.write_all(value.as_bytes()).and_then(|_| file.as_file().sync_all()) {
            return Err(format!("Unable to save file {:?}: {}", path, err).into());
        }
        if let Err(err) = file.persist(&path) {
            return Err(format!("Unable to save file {:?}: {}", path, err.error).into());
        }
        log::trace!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "first").unwrap();
        storage.set_item("k", "second").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), Some("second".to_string()));
        assert_eq!(storage.get_item("other").unwrap(), None);
    }

    #[test]
    fn file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("nested").join("data");

        let mut storage = FileStorage::new(&folder);
        assert_eq!(storage.get_item("ramadan-activities").unwrap(), None);

        storage.set_item("ramadan-activities", "[]").unwrap();
        assert!(folder.join("ramadan-activities.json").exists());

        let reopened = FileStorage::new(&folder);
        assert_eq!(reopened.get_item("ramadan-activities").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn overwrite_leaves_no_stray_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        storage.set_item("ramadan-activities", r#"[{"long":"value"}]"#).unwrap();
        storage.set_item("ramadan-activities", "[]").unwrap();
        assert_eq!(storage.get_item("ramadan-activities").unwrap(), Some("[]".to_string()));

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("ramadan-activities.json")]);
    }

    #[test]
    fn keys_are_sanitized() {
        let storage = FileStorage::new(Path::new("/data"));
        let path = storage.path_for("../escape/attempt");
        assert_eq!(path.parent(), Some(Path::new("/data")));
    }
}
