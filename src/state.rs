use crate::config::settings::AppConfig;
use crate::infrastructure::generation::GenerationService;
use crate::infrastructure::identity::IdentityDirectory;
use crate::infrastructure::identity::token::TokenVerifier;
use crate::infrastructure::records::RecordStore;
use crate::infrastructure::storage::BlobStore;
use crate::infrastructure::transcription::TranscriptionService;
use std::sync::Arc;

/// Process-wide service handles, built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub storage: Arc<dyn BlobStore>,
    pub transcription: Arc<dyn TranscriptionService>,
    pub generation: Arc<dyn GenerationService>,
    pub directory: Arc<dyn IdentityDirectory>,
    pub records: Arc<dyn RecordStore>,
    pub verifier: TokenVerifier,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        storage: Arc<dyn BlobStore>,
        transcription: Arc<dyn TranscriptionService>,
        generation: Arc<dyn GenerationService>,
        directory: Arc<dyn IdentityDirectory>,
        records: Arc<dyn RecordStore>,
        verifier: TokenVerifier,
    ) -> Self {
        Self {
            config,
            storage,
            transcription,
            generation,
            directory,
            records,
            verifier,
        }
    }
}
