use super::{GenerationError, GenerationRequest, GenerationService};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::{debug, info};

#[derive(Clone)]
pub struct BedrockService {
    client: Client,
}

impl BedrockService {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        let client = Client::new(config);

        info!("✅ Bedrock runtime client ready");

        Self { client }
    }
}

#[async_trait]
impl GenerationService for BedrockService {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(request.prompt))
            .build()
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&request.model_id)
            .messages(message)
            .system(SystemContentBlock::Text(request.system))
            .inference_config(
                InferenceConfiguration::builder()
                    .temperature(request.temperature)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| GenerationError::Request(DisplayErrorContext(&e).to_string()))?;

        let text = response
            .output()
            .and_then(|output| output.as_message().ok())
            .and_then(|message| message.content().first())
            .and_then(|block| block.as_text().ok())
            .ok_or(GenerationError::EmptyResponse)?;

        debug!("{} returned {} characters", request.model_id, text.len());
        Ok(text.clone())
    }
}
