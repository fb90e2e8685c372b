use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::error::{AppError, AppResult};

use super::{ImageFile, ImageStore, UploadedImage};

pub const CLOUDINARY_DEFAULT_FOLDER: &str = "the-car-avaliacoes";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    public_id: Option<String>,
    error: Option<CloudinaryError>,
}

#[derive(Debug, Deserialize)]
struct CloudinaryError {
    message: String,
}

/// Unsigned uploads through a Cloudinary upload preset.
pub struct CloudinaryStore {
    client: Client,
    cloud_name: String,
    upload_preset: String,
}

impl CloudinaryStore {
    pub fn new(cloud_name: String, upload_preset: String) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            cloud_name,
            upload_preset,
        })
    }

    fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[tonic::async_trait]
impl ImageStore for CloudinaryStore {
    async fn upload(&self, file: &ImageFile, folder: &str) -> AppResult<UploadedImage> {
        let part = Part::bytes(file.data.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| AppError::Upload(format!("Invalid content type: {}", e)))?;
        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("Cloudinary request failed: {}", e)))?;

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upload(format!("Cloudinary response unreadable: {}", e)))?;

        if let Some(error) = body.error {
            return Err(AppError::Upload(format!("Cloudinary: {}", error.message)));
        }
        match (body.public_id, body.secure_url) {
            (Some(path), Some(url)) => {
                tracing::info!("Cloudinary upload: public_id={}", path);
                Ok(UploadedImage { path, url })
            }
            _ => Err(AppError::Upload(
                "Cloudinary response missing public_id/secure_url".into(),
            )),
        }
    }

    async fn delete(&self, path: &str) -> bool {
        // unsigned presets cannot destroy assets
        tracing::warn!("Cloudinary delete not supported for unsigned uploads: {}", path);
        false
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "https://res.cloudinary.com/{}/image/upload/{}",
            self.cloud_name, path
        )
    }

    fn default_folder(&self) -> &str {
        CLOUDINARY_DEFAULT_FOLDER
    }

    fn backend_name(&self) -> &'static str {
        "cloudinary"
    }
}
