//! Object storage for uploaded photos.

use async_trait::async_trait;

use crate::server::error::storage::StorageError;

/// Public object storage holding photo files.
#[async_trait]
pub trait PhotoStorage: Send + Sync {
    /// Uploads a file and returns its public URL.
    ///
    /// # Arguments
    /// - `path` - Object path inside the bucket, e.g. `routes/1700000000000-ab12cd3.jpg`
    /// - `bytes` - File contents
    /// - `content_type` - MIME type stored with the object
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Deletes the object behind a public URL.
    ///
    /// URLs that do not belong to this storage are ignored.
    async fn delete(&self, public_url: &str) -> Result<(), StorageError>;
}

/// Supabase Storage client authenticated with the service key.
pub struct SupabaseStorage {
    http_client: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(
        http_client: reqwest::Client,
        base_url: String,
        service_key: String,
        bucket: String,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    /// Extracts the object path from one of this bucket's public URLs.
    pub fn object_path<'u>(&self, public_url: &'u str) -> Option<&'u str> {
        let marker = format!("/storage/v1/object/public/{}/", self.bucket);
        let start = public_url.find(&marker)? + marker.len();
        let path = &public_url[start..];
        let path = path.split(['?', '#']).next().unwrap_or(path);

        (!path.is_empty()).then_some(path)
    }

    async fn check(response: reqwest::Response, path: &str) -> Result<(), StorageError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StorageError::Rejected {
            path: path.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl PhotoStorage for SupabaseStorage {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let response = self
            .http_client
            .post(format!(
                "{}/storage/v1/object/{}/{}",
                self.base_url, self.bucket, path
            ))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("cache-control", "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;
        Self::check(response, path).await?;

        Ok(self.public_url(path))
    }

    async fn delete(&self, public_url: &str) -> Result<(), StorageError> {
        let Some(path) = self.object_path(public_url) else {
            tracing::debug!("Skipping deletion of foreign URL {}", public_url);
            return Ok(());
        };

        let response = self
            .http_client
            .delete(format!(
                "{}/storage/v1/object/{}/{}",
                self.base_url, self.bucket, path
            ))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .send()
            .await?;

        Self::check(response, path).await
    }
}
