use crate::domain::ports::{FileStorage, StoredFile};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Disk-backed storage rooted at a private directory. Keys are relative
/// paths under the root; they never come from client input.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, key: &str) -> Result<PathBuf, AppError> {
        // Keys are generated server-side, but reject traversal anyway.
        if key.contains("..") || Path::new(key).is_absolute() {
            return Err(AppError::Validation("Invalid storage key".into()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl FileStorage for LocalStorage {
    async fn save(
        &self,
        bytes: &[u8],
        prefix: &str,
        extension: &str,
        content_type: Option<&str>,
    ) -> Result<StoredFile, AppError> {
        let filename = format!("{}-{}.{}", Utc::now().timestamp_millis(), Uuid::new_v4(), extension);
        let key = format!("{prefix}/{filename}");
        let path = self.resolve(&key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::InternalWithMsg(format!("storage mkdir failed: {e}")))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::InternalWithMsg(format!("storage write failed: {e}")))?;

        Ok(StoredFile {
            key,
            filename,
            size: bytes.len(),
            content_type: content_type.map(str::to_string),
        })
    }

    async fn url(&self, key: &str) -> Result<String, AppError> {
        let path = self.resolve(key)?;
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Ok(path.to_string_lossy().into_owned()),
            Ok(false) => Err(AppError::NotFound("File not found".into())),
            Err(e) => Err(AppError::InternalWithMsg(format!("storage stat failed: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_resolve() {
        let dir = std::env::temp_dir().join(format!("hr-storage-{}", Uuid::new_v4()));
        let storage = LocalStorage::new(&dir);

        let stored = storage
            .save(b"%PDF-1.4", "applications/cv", "pdf", Some("application/pdf"))
            .await
            .unwrap();
        assert!(stored.key.starts_with("applications/cv/"));
        assert!(stored.key.ends_with(".pdf"));
        assert_eq!(stored.size, 8);

        let url = storage.url(&stored.key).await.unwrap();
        assert!(url.ends_with(".pdf"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn rejects_traversal_key() {
        let storage = LocalStorage::new("/tmp/hr-storage-none");
        assert!(storage.url("../etc/passwd").await.is_err());
    }

    #[tokio::test]
    async fn missing_key_is_not_found() {
        let storage = LocalStorage::new(std::env::temp_dir());
        let err = storage.url("applications/cv/nope.pdf").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
