use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Reads files relative to a base directory. Absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.full_path(path);
        tracing::debug!("Reading {}", full_path.display());
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    fn describe(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_relative_and_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("number-descriptions.json");
        std::fs::write(&file, r#"{"1": "Start"}"#).unwrap();

        let storage = LocalStorage::new(temp_dir.path().to_string_lossy().into_owned());
        let data = storage.read_file("number-descriptions.json").await.unwrap();
        assert_eq!(data, br#"{"1": "Start"}"#);

        let other = LocalStorage::new("does-not-exist".to_string());
        let data = other.read_file(file.to_str().unwrap()).await.unwrap();
        assert_eq!(data.len(), 14);

        assert!(other.read_file("missing.json").await.is_err());
        assert!(other.describe("missing.json").ends_with("missing.json"));
    }
}
