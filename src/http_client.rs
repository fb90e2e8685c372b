use reqwest::{Client, Method, RequestBuilder, Response};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Shared reqwest client for a Supabase project (PostgREST and Storage).
#[derive(Clone)]
pub struct SupabaseHttp {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseHttp {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub fn storage_object_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path)
    }

    pub fn storage_public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        )
    }

    /// Request with the project's API key attached.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }
}

/// Turns a non-2xx response into an error carrying the response body.
pub async fn ensure_success(response: Response, context: &str) -> AppResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AppError::Persistence(format!(
        "{} failed: status={}, body={}",
        context, status, body
    )))
}
