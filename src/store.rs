//! This module provides storages for journal data

use std::path::PathBuf;
use std::path::Path;
use std::error::Error;
use std::collections::HashMap;

use crate::traits::KeyValueStore;


/// A store that only lives in memory
#[derive(Default, Debug, Clone, PartialEq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The keys that currently have a value
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}


/// A store that saves every key in its own file, in a local folder
#[derive(Debug, PartialEq)]
pub struct FolderStore {
    backing_folder: PathBuf,
}

impl FolderStore {
    /// Open a store in `folder`, creating the folder if needed
    pub fn from_folder(folder: &Path) -> Result<Self, Box<dyn Error>> {
        if let Err(err) = std::fs::create_dir_all(folder) {
            return Err(format!("Unable to create folder {:?}: {}", folder, err).into());
        }

        Ok(Self {
            backing_folder: PathBuf::from(folder),
        })
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name = sanitize_filename::sanitize(key) + ".json";
        self.backing_folder.join(file_name)
    }
}

impl KeyValueStore for FolderStore {
    fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::debug!("Read {} bytes from {:?}", content.len(), path);
                Ok(Some(content))
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Unable to read file {:?}: {}", path, err).into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let path = self.path_for(key);
        if let Err(err) = std::fs::write(&path, value) {
            return Err(format!("Unable to save file {:?}: {}", path, err).into());
        }
        log::debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));
        assert_eq!(store.keys().count(), 1);
    }

    #[test]
    fn folder_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FolderStore::from_folder(&dir.path().join("journal")).unwrap();
        assert_eq!(store.get("journal_lists").unwrap(), None);

        store.set("journal_lists", "[]").unwrap();
        assert!(store.folder().join("journal_lists.json").exists());

        let reopened = FolderStore::from_folder(store.folder()).unwrap();
        assert_eq!(reopened.get("journal_lists").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn keys_cannot_escape_the_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FolderStore::from_folder(dir.path()).unwrap();
        store.set("../evil/key", "{}").unwrap();
        assert!(dir.path().parent().unwrap().join("evil").exists() == false);
        assert_eq!(store.get("../evil/key").unwrap(), Some("{}".to_string()));
    }
}
