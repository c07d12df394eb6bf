use anyhow::Context;
use aws_config::{BehaviorVersion, Region};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::settings::AppConfig;
use crate::infrastructure::generation::bedrock::BedrockService;
use crate::infrastructure::identity::cognito::CognitoDirectory;
use crate::infrastructure::identity::token::TokenVerifier;
use crate::infrastructure::records::dynamodb::DynamoRecordStore;
use crate::infrastructure::storage::s3::StorageService;
use crate::infrastructure::transcription::transcribe::TranscribeService;
use crate::state::AppState;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod middleware;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("missing required environment variable")?;

    let aws = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await;

    let verifier = TokenVerifier::fetch(&config.jwks_url(), &config.token_issuer(), &config.client_id).await?;

    let state = AppState::new(
        config.clone(),
        Arc::new(StorageService::new(&aws)),
        Arc::new(TranscribeService::new(&aws)),
        Arc::new(BedrockService::new(&aws)),
        Arc::new(CognitoDirectory::new(&aws, &config.client_id)),
        Arc::new(DynamoRecordStore::new(&aws, &config.table_name)),
        verifier,
    );

    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
