use reqwest::Method;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::http_client::SupabaseHttp;

use super::{object_key, ImageFile, ImageStore, UploadedImage};

/// Supabase Storage bucket with public read access.
pub struct SupabaseImageStore {
    http: SupabaseHttp,
    bucket: String,
}

impl SupabaseImageStore {
    pub fn new(url: String, anon_key: String, bucket: String) -> AppResult<Self> {
        Ok(Self {
            http: SupabaseHttp::new(url, anon_key)?,
            bucket,
        })
    }
}

#[tonic::async_trait]
impl ImageStore for SupabaseImageStore {
    async fn upload(&self, file: &ImageFile, folder: &str) -> AppResult<UploadedImage> {
        let path = object_key(folder, file);
        let response = self
            .http
            .request(
                Method::POST,
                &self.http.storage_object_url(&self.bucket, &path),
            )
            .header("Content-Type", &file.content_type)
            .header("Cache-Control", "max-age=3600")
            .header("x-upsert", "false")
            .body(file.data.clone())
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("Supabase Storage request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upload(format!(
                "Supabase Storage upload failed: status={}, body={}",
                status, body
            )));
        }

        tracing::info!(
            "Supabase Storage upload: bucket={}, path={}",
            self.bucket,
            path
        );
        Ok(UploadedImage {
            url: self.public_url(&path),
            path,
        })
    }

    async fn delete(&self, path: &str) -> bool {
        let url = format!(
            "{}/storage/v1/object/{}",
            self.http.base_url(),
            self.bucket
        );
        let result = self
            .http
            .request(Method::DELETE, &url)
            .json(&json!({ "prefixes": [path] }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    "Supabase Storage delete: bucket={}, path={}",
                    self.bucket,
                    path
                );
                true
            }
            Ok(response) => {
                tracing::warn!(
                    "Supabase Storage delete failed: path={}, status={}",
                    path,
                    response.status()
                );
                false
            }
            Err(e) => {
                tracing::warn!(
                    "Supabase Storage delete failed: path={}, error={}",
                    path,
                    e
                );
                false
            }
        }
    }

    fn public_url(&self, path: &str) -> String {
        self.http.storage_public_url(&self.bucket, path)
    }

    fn backend_name(&self) -> &'static str {
        "supabase-storage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url() {
        let store = SupabaseImageStore::new(
            "https://abc.supabase.co".into(),
            "anon".into(),
            "images".into(),
        )
        .unwrap();
        assert_eq!(
            store.public_url("avaliacoes/1-abc.jpg"),
            "https://abc.supabase.co/storage/v1/object/public/images/avaliacoes/1-abc.jpg"
        );
    }
}
