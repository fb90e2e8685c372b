use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, AppResult};

use super::{object_key, ImageFile, ImageStore, UploadedImage};

/// Images written to a directory on disk, for development without a CDN.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a stored path inside the root; `None` if it would escape it.
    fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        (safe && !path.is_empty()).then(|| self.root.join(relative))
    }
}

#[tonic::async_trait]
impl ImageStore for LocalImageStore {
    async fn upload(&self, file: &ImageFile, folder: &str) -> AppResult<UploadedImage> {
        let key = object_key(folder, file);
        let target = self
            .resolve(&key)
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid folder: {}", folder)))?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, &file.data).await?;

        tracing::info!("Local image stored: {}", target.display());
        Ok(UploadedImage {
            url: self.public_url(&key),
            path: key,
        })
    }

    async fn delete(&self, path: &str) -> bool {
        let Some(target) = self.resolve(path) else {
            tracing::warn!("Refusing to delete outside image dir: {}", path);
            return false;
        };
        match tokio::fs::remove_file(&target).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Local image delete failed: {}: {}", target.display(), e);
                false
            }
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("file://{}", self.root.join(path).display())
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_then_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());
        let file = ImageFile::new("frente.png", "image/png", vec![137, 80, 78, 71]);

        let uploaded = store.upload(&file, "avaliacoes").await.unwrap();
        assert!(uploaded.path.starts_with("avaliacoes/"));
        assert!(uploaded.path.ends_with(".png"));
        assert!(uploaded.url.starts_with("file://"));
        let on_disk = std::fs::read(dir.path().join(&uploaded.path)).unwrap();
        assert_eq!(on_disk, file.data);

        assert!(store.delete(&uploaded.path).await);
        assert!(!store.delete(&uploaded.path).await);
    }

    #[tokio::test]
    async fn test_rejects_paths_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("images"));
        assert!(!store.delete("../secret.txt").await);
        assert!(!store.delete("/etc/passwd").await);

        let file = ImageFile::new("a.jpg", "image/jpeg", vec![1]);
        assert!(store.upload(&file, "../outside").await.is_err());
    }
}
