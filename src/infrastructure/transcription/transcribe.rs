use super::{TranscriptionError, TranscriptionJobRequest, TranscriptionService};
use async_trait::async_trait;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::error::DisplayErrorContext;
use aws_sdk_transcribe::types::{LanguageCode, Media};
use tracing::{debug, info};

#[derive(Clone)]
pub struct TranscribeService {
    client: Client,
}

impl TranscribeService {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        let client = Client::new(config);

        info!("✅ Transcribe client ready");

        Self { client }
    }
}

#[async_trait]
impl TranscriptionService for TranscribeService {
    async fn start_job(&self, request: TranscriptionJobRequest) -> Result<String, TranscriptionError> {
        let media = Media::builder().media_file_uri(&request.media_uri).build();

        let output = self
            .client
            .start_transcription_job()
            .transcription_job_name(&request.job_name)
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .media(media)
            .output_bucket_name(&request.output_bucket)
            .output_key(&request.output_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::Request(DisplayErrorContext(&e).to_string()))?;

        let job_name = output
            .transcription_job()
            .and_then(|job| job.transcription_job_name())
            .unwrap_or(request.job_name.as_str())
            .to_string();

        debug!("Transcription job {} accepted for {}", job_name, request.media_uri);
        Ok(job_name)
    }
}
