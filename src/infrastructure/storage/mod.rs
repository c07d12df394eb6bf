use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub mod s3;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object {0} does not exist")]
    NotFound(String),
    #[error("{0}")]
    Request(String),
    #[error("failed to read object body: {0}")]
    Body(String),
}

/// Read access to the object store holding videos and transcripts.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError>;
}
