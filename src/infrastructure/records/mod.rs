use crate::modules::jobs::model::JobRecord;
use async_trait::async_trait;
use thiserror::Error;

pub mod dynamodb;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("failed to encode record: {0}")]
    Encode(String),
    #[error("{0}")]
    Request(String),
}

/// Write-only view of the job table. A put with an existing
/// `(userId, contentId)` replaces the previous item.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn put(&self, record: &JobRecord) -> Result<(), RecordStoreError>;
}
