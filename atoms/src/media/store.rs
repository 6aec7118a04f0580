use async_trait::async_trait;

use crate::error::Result;

/// Blob storage for reported photos.
#[async_trait]
pub trait BaseObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;
}
