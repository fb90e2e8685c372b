use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;

use crate::config::R2Settings;
use crate::error::{AppError, AppResult};

use super::{object_key, ImageFile, ImageStore, UploadedImage};

/// Cloudflare R2 bucket served through its public URL.
pub struct R2Store {
    bucket: Box<Bucket>,
    bucket_name: String,
    public_url: String,
}

impl R2Store {
    pub fn new(settings: &R2Settings) -> AppResult<Self> {
        let region = Region::Custom {
            region: "auto".to_string(),
            endpoint: format!("https://{}.r2.cloudflarestorage.com", settings.account_id),
        };

        let credentials = Credentials::new(
            Some(&settings.access_key),
            Some(&settings.secret_key),
            None, // security token
            None, // session token
            None, // profile
        )
        .map_err(|e| AppError::Storage(format!("R2 credentials error: {}", e)))?;

        let bucket = Bucket::new(&settings.bucket, region, credentials)
            .map_err(|e| AppError::Storage(format!("R2 bucket error: {}", e)))?;

        Ok(Self {
            bucket,
            bucket_name: settings.bucket.clone(),
            public_url: settings.public_url.trim_end_matches('/').to_string(),
        })
    }
}

#[tonic::async_trait]
impl ImageStore for R2Store {
    async fn upload(&self, file: &ImageFile, folder: &str) -> AppResult<UploadedImage> {
        let key = object_key(folder, file);
        self.bucket
            .put_object_with_content_type(&key, &file.data, &file.content_type)
            .await
            .map_err(|e| AppError::Storage(format!("R2 upload failed: {}", e)))?;

        tracing::info!("R2 upload: bucket={}, key={}", self.bucket_name, key);
        Ok(UploadedImage {
            url: self.public_url(&key),
            path: key,
        })
    }

    async fn delete(&self, path: &str) -> bool {
        match self.bucket.delete_object(path).await {
            Ok(_) => {
                tracing::info!("R2 delete: bucket={}, key={}", self.bucket_name, path);
                true
            }
            Err(e) => {
                tracing::warn!("R2 delete failed: key={}, error={}", path, e);
                false
            }
        }
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_url, path)
    }

    fn backend_name(&self) -> &'static str {
        "r2"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_joins_key() {
        let store = R2Store::new(&R2Settings {
            bucket: "fotos".to_string(),
            account_id: "acct".to_string(),
            access_key: "access".to_string(),
            secret_key: "secret".to_string(),
            public_url: "https://pub.example.r2.dev/".to_string(),
        })
        .unwrap();
        assert_eq!(
            store.public_url("avaliacoes/1-abc.jpg"),
            "https://pub.example.r2.dev/avaliacoes/1-abc.jpg"
        );
        assert_eq!(store.backend_name(), "r2");
    }
}
