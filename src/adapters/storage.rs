use crate::domain::ports::SnapshotStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed snapshot store: one file per key under a base
/// directory. A missing file is "no snapshot", not an error.
#[derive(Debug, Clone)]
pub struct LocalStore {
    base_path: String,
}

impl LocalStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl SnapshotStore for LocalStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let full_path = Path::new(&self.base_path).join(key);
        if !full_path.exists() {
            return Ok(None);
        }
        let data = fs::read(full_path)?;
        Ok(Some(data))
    }

    async fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_key_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path().to_str().unwrap().to_string());

        assert!(store.load("cart.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path().to_str().unwrap().to_string());

        store.save("cart.json", b"[1,2,3]").await.unwrap();
        let loaded = store.load("cart.json").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(&b"[1,2,3]"[..]));
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_value() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::new(dir.path().to_str().unwrap().to_string());

        store.save("cart.json", b"old").await.unwrap();
        store.save("cart.json", b"new").await.unwrap();
        assert_eq!(store.load("cart.json").await.unwrap().as_deref(), Some(&b"new"[..]));
    }

    #[tokio::test]
    async fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("does/not/exist");
        let store = LocalStore::new(nested.to_str().unwrap().to_string());

        store.save("cart.json", b"{}").await.unwrap();
        assert!(nested.join("cart.json").exists());
    }
}
