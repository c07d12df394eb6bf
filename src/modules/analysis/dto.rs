use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Key of the transcript object in the media bucket.
    pub transcript_key: String,
    /// `seo` (default) or `blog`, case-insensitive.
    #[serde(default)]
    pub analysis_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub content_id: String,
    pub analysis: String,
}
