use super::Storage;
use crate::error::{BitacoraError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed slot storage. Every slot key maps to one file directly
/// under the root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BitacoraError::Io)?;
        }
        Ok(())
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(BitacoraError::Io)?;
        Ok(Some(value))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;
        fs::write(self.slot_path(key), value).map_err(BitacoraError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let (_dir, store) = setup();
        assert_eq!(store.get("entries").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let (_dir, mut store) = setup();
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn slots_land_in_separate_files() {
        let (dir, mut store) = setup();
        store.set("entries", "[]").unwrap();
        store.set("theme", "dark").unwrap();
        assert!(dir.path().join("entries").exists());
        assert!(dir.path().join("theme").exists());
    }

    #[test]
    fn set_creates_the_root_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("deep").join("data");
        let mut store = FileStore::new(nested.clone());
        store.set("entries", "[]").unwrap();
        assert!(nested.join("entries").exists());
    }
}
