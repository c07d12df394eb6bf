use super::dto::StorageEvent;
use crate::infrastructure::records::RecordStoreError;
use crate::infrastructure::transcription::{TranscriptionError, TranscriptionJobRequest};
use crate::modules::jobs::model::{JobRecord, job_name};
use crate::state::AppState;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::info;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Notification for bucket {0:?} is not for the configured media bucket")]
    ForeignBucket(String),
    #[error("Object key {0:?} does not match videos/{{userId}}/{{filename}}")]
    InvalidKey(String),
    #[error("Transcription service error: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("AWS API error: {0}")]
    Records(#[from] RecordStoreError),
    #[error("Failed to format job timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// An uploaded video key, `videos/{userId}/{filename}`.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoKey {
    pub user_id: String,
    pub filename: String,
}

impl VideoKey {
    pub fn parse(key: &str) -> Result<Self, IngestError> {
        let mut parts = key.splitn(3, '/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("videos"), Some(user_id), Some(filename)) if !user_id.is_empty() && !filename.is_empty() => {
                Ok(Self {
                    user_id: user_id.to_string(),
                    filename: filename.to_string(),
                })
            }
            _ => Err(IngestError::InvalidKey(key.to_string())),
        }
    }

    pub fn transcript_key(&self, job_name: &str) -> String {
        format!("transcripts/{}/{}.json", self.user_id, job_name)
    }
}

pub struct IngestService;

impl IngestService {
    /// Starts one transcription per created object. The first failure aborts
    /// the rest of the batch; jobs already started stay started.
    pub async fn handle_event(state: AppState, event: StorageEvent) -> Result<Vec<JobRecord>, IngestError> {
        let mut started = Vec::new();

        for record in event.records.iter().filter(|r| r.is_object_created()) {
            let job = Self::start_transcription(&state, &record.s3.bucket.name, &record.s3.object.key).await?;
            started.push(job);
        }

        Ok(started)
    }

    async fn start_transcription(state: &AppState, bucket: &str, key: &str) -> Result<JobRecord, IngestError> {
        let bucket_name = state.config.bucket_name.as_str();
        if bucket != bucket_name {
            return Err(IngestError::ForeignBucket(bucket.to_string()));
        }
        let video = VideoKey::parse(key)?;

        let now = OffsetDateTime::now_utc();
        let job_name = job_name(now)?;

        let request = TranscriptionJobRequest {
            job_name: job_name.clone(),
            media_uri: format!("s3://{}/{}", bucket_name, key),
            language_code: state.config.transcribe_language.clone(),
            output_bucket: bucket_name.to_string(),
            output_key: video.transcript_key(&job_name),
        };
        let accepted = state.transcription.start_job(request).await?;

        let record = JobRecord::transcription(&video.user_id, &job_name, key, now);
        state.records.put(&record).await?;

        info!("Started transcription {} for {} (user {})", accepted, video.filename, video.user_id);
        Ok(record)
    }
}
