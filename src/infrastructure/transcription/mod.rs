use async_trait::async_trait;
use thiserror::Error;

pub mod transcribe;

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("{0}")]
    Request(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionJobRequest {
    pub job_name: String,
    /// `s3://bucket/key` of the source media.
    pub media_uri: String,
    pub language_code: String,
    pub output_bucket: String,
    pub output_key: String,
}

/// Batch speech-to-text service. Jobs run asynchronously and write their
/// result to `output_bucket/output_key`; nothing here waits for them.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Starts a job and returns its name as acknowledged by the service.
    async fn start_job(&self, request: TranscriptionJobRequest) -> Result<String, TranscriptionError>;
}
