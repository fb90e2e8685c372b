//! Image storage for evaluation photos

pub mod cloudinary;
pub mod local;
pub mod r2;
pub mod supabase;

pub use cloudinary::CloudinaryStore;
pub use local::LocalImageStore;
pub use r2::R2Store;
pub use supabase::SupabaseImageStore;

use std::sync::Arc;

use chrono::Utc;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Photos attached to one evaluation.
pub const MAX_IMAGES_PER_RECORD: usize = 10;

pub const DEFAULT_FOLDER: &str = "avaliacoes";

/// An image received from the client, not yet stored.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    /// Extension from the file name, falling back to the image subtype.
    pub fn extension(&self) -> String {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .or_else(|| self.content_type.strip_prefix("image/"))
            .unwrap_or("bin")
            .to_ascii_lowercase()
    }
}

/// A stored image: backend path (for deletion) and public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub path: String,
    pub url: String,
}

/// Backend holding the uploaded photos.
#[tonic::async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores an already validated file under `folder`.
    async fn upload(&self, file: &ImageFile, folder: &str) -> AppResult<UploadedImage>;

    /// Removes a stored image. Failures are reported as `false`.
    async fn delete(&self, path: &str) -> bool;

    fn public_url(&self, path: &str) -> String;

    /// Folder used when the caller does not name one.
    fn default_folder(&self) -> &str {
        DEFAULT_FOLDER
    }

    fn backend_name(&self) -> &'static str;
}

/// Rejects non-images and oversized files before any backend is involved.
pub fn validate_image(file: &ImageFile) -> AppResult<()> {
    if !file.content_type.starts_with("image/") {
        return Err(AppError::Upload(format!(
            "{} não é uma imagem ({})",
            file.file_name, file.content_type
        )));
    }
    if file.data.len() > MAX_IMAGE_BYTES {
        return Err(AppError::Upload(format!(
            "{} excede o limite de 5MB ({} bytes)",
            file.file_name,
            file.data.len()
        )));
    }
    Ok(())
}

/// `<folder>/<millis>-<random>.<ext>`
pub fn object_key(folder: &str, file: &ImageFile) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}/{}-{}.{}",
        folder.trim_matches('/'),
        Utc::now().timestamp_millis(),
        &suffix[..11],
        file.extension()
    )
}

/// Validates and uploads one file. An empty folder means the store's default.
pub async fn upload_image(
    store: &dyn ImageStore,
    file: &ImageFile,
    folder: &str,
) -> AppResult<UploadedImage> {
    validate_image(file)?;
    let folder = if folder.trim().is_empty() {
        store.default_folder()
    } else {
        folder
    };
    store.upload(file, folder).await
}

/// Result of a batch upload.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchUpload {
    /// URLs of the stored files, in input order.
    pub urls: Vec<String>,
    /// Files not stored: invalid, failed, or over the per-record limit.
    pub skipped: usize,
}

/// Uploads files until the record holds `max` photos. Invalid or failed
/// files are skipped and still use up their slot.
pub async fn upload_batch(
    store: &dyn ImageStore,
    files: &[ImageFile],
    folder: &str,
    existing: usize,
    max: usize,
) -> BatchUpload {
    let remaining = max.saturating_sub(existing);
    let mut result = BatchUpload::default();

    for file in files.iter().take(remaining) {
        match upload_image(store, file, folder).await {
            Ok(uploaded) => result.urls.push(uploaded.url),
            Err(e) => {
                tracing::warn!("Skipping image {}: {}", file.file_name, e);
                result.skipped += 1;
            }
        }
    }
    result.skipped += files.len().saturating_sub(remaining);

    tracing::info!(
        "Batch upload via {}: stored={}, skipped={}",
        store.backend_name(),
        result.urls.len(),
        result.skipped
    );
    result
}

/// Picks the image backend: Supabase Storage, then R2, then Cloudinary,
/// then a local directory.
pub fn select_image_store(config: &Config) -> AppResult<Arc<dyn ImageStore>> {
    let store: Arc<dyn ImageStore> = if let Some((url, anon_key)) = config.supabase_credentials()
    {
        Arc::new(SupabaseImageStore::new(
            url,
            anon_key,
            config.supabase_storage_bucket.clone(),
        )?)
    } else if let Some(r2) = &config.r2 {
        Arc::new(R2Store::new(r2)?)
    } else if let Some((cloud_name, upload_preset)) = config.cloudinary_settings() {
        Arc::new(CloudinaryStore::new(cloud_name, upload_preset)?)
    } else {
        Arc::new(LocalImageStore::new(config.local_image_dir.clone()))
    };
    tracing::info!("Image store: {}", store.backend_name());
    Ok(store)
}
