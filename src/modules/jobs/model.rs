use serde::{Deserialize, Serialize};
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use utoipa::ToSchema;

/// Status of a transcription job as far as this service can see it.
///
/// Completion is reported by the transcription service itself, so the only
/// state ever written here is `PROCESSING`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Processing,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Processing => "PROCESSING",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    #[default]
    Seo,
    Blog,
}

impl AnalysisType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisType::Seo => "seo",
            AnalysisType::Blog => "blog",
        }
    }

    /// Case-insensitive lookup, `None` for anything but `seo` or `blog`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "seo" => Some(AnalysisType::Seo),
            "blog" => Some(AnalysisType::Blog),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobKind {
    Transcription {
        status: JobStatus,
        video_key: String,
    },
    Analysis {
        analysis_type: AnalysisType,
        analysis: String,
        transcript_key: String,
    },
}

/// One row of the job table, keyed by `(user_id, content_id)`.
///
/// Records are written once and never read back or mutated by this service.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub user_id: String,
    pub content_id: String,
    pub created_at: OffsetDateTime,
    pub kind: JobKind,
}

impl JobRecord {
    pub fn transcription(user_id: &str, job_name: &str, video_key: &str, now: OffsetDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            content_id: format!("transcript-{}", job_name),
            created_at: now,
            kind: JobKind::Transcription {
                status: JobStatus::Processing,
                video_key: video_key.to_string(),
            },
        }
    }

    pub fn analysis(
        user_id: &str,
        analysis_type: AnalysisType,
        analysis: String,
        transcript_key: &str,
        now: OffsetDateTime,
    ) -> Result<Self, time::error::Format> {
        Ok(Self {
            user_id: user_id.to_string(),
            content_id: analysis_content_id(analysis_type, now)?,
            created_at: now,
            kind: JobKind::Analysis {
                analysis_type,
                analysis,
                transcript_key: transcript_key.to_string(),
            },
        })
    }

    /// Flattens the record into the string attributes persisted in the store.
    pub fn attributes(&self) -> Result<Vec<(&'static str, String)>, time::error::Format> {
        let mut attrs = vec![
            ("userId", self.user_id.clone()),
            ("contentId", self.content_id.clone()),
            ("createdAt", self.created_at.format(&Rfc3339)?),
        ];

        match &self.kind {
            JobKind::Transcription { status, video_key } => {
                attrs.push(("status", status.to_string()));
                attrs.push(("videoKey", video_key.clone()));
            }
            JobKind::Analysis {
                analysis_type,
                analysis,
                transcript_key,
            } => {
                attrs.push(("analysisType", analysis_type.to_string()));
                attrs.push(("analysis", analysis.clone()));
                attrs.push(("transcriptKey", transcript_key.clone()));
            }
        }

        Ok(attrs)
    }
}

/// `YYYYMMDDHHMMSS` in UTC. Second resolution, so two calls in the same
/// second yield the same stamp.
pub fn timestamp(now: OffsetDateTime) -> Result<String, time::error::Format> {
    now.to_offset(UtcOffset::UTC)
        .format(format_description!("[year][month][day][hour][minute][second]"))
}

pub fn job_name(now: OffsetDateTime) -> Result<String, time::error::Format> {
    Ok(format!("job-{}", timestamp(now)?))
}

pub fn analysis_content_id(analysis_type: AnalysisType, now: OffsetDateTime) -> Result<String, time::error::Format> {
    Ok(format!("{}-{}", analysis_type, timestamp(now)?))
}
