use super::dto::{AnalyzeRequest, AnalyzeResponse};
use super::{prompts, schema};
use crate::infrastructure::generation::{GenerationError, GenerationRequest};
use crate::infrastructure::records::RecordStoreError;
use crate::infrastructure::storage::StorageError;
use crate::modules::jobs::model::{AnalysisType, JobRecord};
use crate::state::AppState;
use axum::http::StatusCode;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::{error, info, warn};

/// Maximum variability; the output is creative copy, not a deterministic answer.
pub const TEMPERATURE: f32 = 1.0;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid analysis type. Must be either \"seo\" or \"blog\"")]
    InvalidType,
    #[error("Transcript is not valid UTF-8: {0}")]
    TranscriptEncoding(#[from] std::string::FromUtf8Error),
    #[error("AWS API error: {0}")]
    Storage(#[from] StorageError),
    #[error("Generation service error: {0}")]
    Generation(#[from] GenerationError),
    #[error("AWS API error: {0}")]
    Records(#[from] RecordStoreError),
    #[error("Failed to format content id: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl AnalysisError {
    pub fn status(&self) -> StatusCode {
        match self {
            AnalysisError::InvalidType => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct AnalysisService;

impl AnalysisService {
    pub fn resolve_type(requested: Option<&str>) -> Result<AnalysisType, AnalysisError> {
        match requested {
            None => Ok(AnalysisType::default()),
            Some(name) => AnalysisType::from_name(name).ok_or(AnalysisError::InvalidType),
        }
    }

    pub fn build_request(model_id: &str, analysis_type: AnalysisType, transcript: &str) -> GenerationRequest {
        GenerationRequest {
            model_id: model_id.to_string(),
            system: prompts::SYSTEM_PROMPT.to_string(),
            prompt: prompts::user_prompt(analysis_type, transcript),
            temperature: TEMPERATURE,
        }
    }

    pub async fn analyze(state: AppState, user_id: &str, req: AnalyzeRequest) -> Result<AnalyzeResponse, AnalysisError> {
        Self::analyze_at(state, user_id, req, OffsetDateTime::now_utc()).await
    }

    /// Same as [`AnalysisService::analyze`], with the record stamped at `now`.
    pub async fn analyze_at(
        state: AppState,
        user_id: &str,
        req: AnalyzeRequest,
        now: OffsetDateTime,
    ) -> Result<AnalyzeResponse, AnalysisError> {
        // Reject before touching any external service
        let analysis_type = Self::resolve_type(req.analysis_type.as_deref())?;

        let object = state
            .storage
            .get(&state.config.bucket_name, &req.transcript_key)
            .await?;
        let transcript = String::from_utf8(object.to_vec())?;

        let request = Self::build_request(&state.config.model_id, analysis_type, &transcript);
        let analysis = state.generation.generate(request).await.map_err(|e| {
            error!("Generation failed for {}: {}", req.transcript_key, e);
            e
        })?;

        if let Err(e) = schema::check(analysis_type, &analysis) {
            warn!("{} output for {} does not match the requested shape: {}", analysis_type, req.transcript_key, e);
        }

        let record = JobRecord::analysis(
            user_id,
            analysis_type,
            analysis.clone(),
            &req.transcript_key,
            now,
        )?;
        state.records.put(&record).await?;

        info!("Stored {} analysis {} for user {}", analysis_type, record.content_id, user_id);

        Ok(AnalyzeResponse {
            content_id: record.content_id,
            analysis,
        })
    }
}
