use async_trait::async_trait;
use thiserror::Error;

pub mod bedrock;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Request(String),
    #[error("response contained no text")]
    EmptyResponse,
}

/// A single-turn request: one system instruction, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model_id: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Returns the first text block of the model's reply.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;
}
