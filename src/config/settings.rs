use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-5-sonnet-20240620-v1:0";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub aws_region: String,
    pub table_name: String,
    pub bucket_name: String,
    pub client_id: String,
    pub user_pool_id: String,
    pub model_id: String,
    pub transcribe_language: String,
    pub allowed_origin: String,
    /// Bearer secret shared with the storage notification bridge.
    pub events_token: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            aws_region: env::get_or(EnvKey::AwsRegion, "us-east-1"),
            table_name: env::get(EnvKey::TableName)?,
            bucket_name: env::get(EnvKey::BucketName)?,
            client_id: env::get(EnvKey::ClientId)?,
            user_pool_id: env::get(EnvKey::UserPoolId)?,
            model_id: env::get_or(EnvKey::ModelId, DEFAULT_MODEL_ID),
            transcribe_language: env::get_or(EnvKey::TranscribeLanguage, "en-US"),
            allowed_origin: env::get_or(EnvKey::AllowedOrigin, "http://localhost:3000"),
            events_token: env::get(EnvKey::EventsToken)?,
        })
    }

    /// Issuer URL of ID tokens minted by the configured user pool.
    pub fn token_issuer(&self) -> String {
        format!(
            "https://cognito-idp.{}.amazonaws.com/{}",
            self.aws_region, self.user_pool_id
        )
    }

    pub fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.token_issuer())
    }
}
