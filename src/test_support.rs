//! In-memory stand-ins for the external services, recording every call.

use crate::config::settings::{AppConfig, DEFAULT_MODEL_ID};
use crate::infrastructure::generation::{GenerationError, GenerationRequest, GenerationService};
use crate::infrastructure::identity::token::TokenVerifier;
use crate::infrastructure::identity::{DirectoryError, IdentityDirectory};
use crate::infrastructure::records::{RecordStore, RecordStoreError};
use crate::infrastructure::storage::{BlobStore, StorageError};
use crate::infrastructure::transcription::{TranscriptionError, TranscriptionJobRequest, TranscriptionService};
use crate::modules::jobs::model::JobRecord;
use crate::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum::response::Response;
use bytes::Bytes;
use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &[u8] = b"test-signing-secret";
pub const TEST_ISSUER: &str = "https://cognito-idp.eu-west-1.amazonaws.com/eu-west-1_pool";
pub const TEST_AUDIENCE: &str = "client-123";
pub const TEST_EVENTS_TOKEN: &str = "bridge-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 3000,
        aws_region: "eu-west-1".to_string(),
        table_name: "jobs".to_string(),
        bucket_name: "media".to_string(),
        client_id: TEST_AUDIENCE.to_string(),
        user_pool_id: "eu-west-1_pool".to_string(),
        model_id: DEFAULT_MODEL_ID.to_string(),
        transcribe_language: "en-US".to_string(),
        allowed_origin: "http://localhost:3000".to_string(),
        events_token: TEST_EVENTS_TOKEN.to_string(),
    }
}

/// ID token for `sub`, signed with the shared test secret.
pub fn mint_token(sub: &str) -> String {
    encode(
        &Header::default(),
        &json!({
            "sub": sub,
            "email": format!("{}@example.com", sub),
            "token_use": "id",
            "iss": TEST_ISSUER,
            "aud": TEST_AUDIENCE,
            "iat": get_current_timestamp(),
            "exp": get_current_timestamp() + 600,
        }),
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[derive(Default)]
pub struct FakeBlobStore {
    objects: Mutex<HashMap<(String, String), Bytes>>,
    reads: Mutex<Vec<(String, String)>>,
}

impl FakeBlobStore {
    pub fn insert(&self, bucket: &str, key: &str, data: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), Bytes::copy_from_slice(data));
    }

    pub fn reads(&self) -> Vec<(String, String)> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for FakeBlobStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let location = (bucket.to_string(), key.to_string());
        self.reads.lock().unwrap().push(location.clone());
        self.objects
            .lock()
            .unwrap()
            .get(&location)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }
}

#[derive(Default)]
pub struct FakeTranscription {
    jobs: Mutex<Vec<TranscriptionJobRequest>>,
    failure: Mutex<Option<String>>,
}

impl FakeTranscription {
    pub fn jobs(&self) -> Vec<TranscriptionJobRequest> {
        self.jobs.lock().unwrap().clone()
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl TranscriptionService for FakeTranscription {
    async fn start_job(&self, request: TranscriptionJobRequest) -> Result<String, TranscriptionError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(TranscriptionError::Request(message));
        }
        let name = request.job_name.clone();
        self.jobs.lock().unwrap().push(request);
        Ok(name)
    }
}

#[derive(Default)]
pub struct FakeGeneration {
    reply: Mutex<Option<String>>,
    failure: Mutex<Option<String>>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl FakeGeneration {
    pub fn reply_with(&self, text: &str) {
        *self.reply.lock().unwrap() = Some(text.to_string());
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for FakeGeneration {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(request);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(GenerationError::Request(message));
        }
        Ok(self
            .reply
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "{}".to_string()))
    }
}

#[derive(Default)]
pub struct FakeDirectory {
    // email -> (password, subject id)
    users: Mutex<HashMap<String, (String, String)>>,
    registrations: Mutex<Vec<String>>,
    offline: Mutex<bool>,
}

impl FakeDirectory {
    pub fn add_user(&self, email: &str, password: &str, sub: &str) {
        self.users
            .lock()
            .unwrap()
            .insert(email.to_string(), (password.to_string(), sub.to_string()));
    }

    pub fn registrations(&self) -> Vec<String> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    fn check_online(&self) -> Result<(), DirectoryError> {
        if *self.offline.lock().unwrap() {
            return Err(DirectoryError::Unavailable("dispatch failure: connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityDirectory for FakeDirectory {
    async fn register(&self, email: &str, password: &str) -> Result<String, DirectoryError> {
        self.registrations.lock().unwrap().push(email.to_string());
        self.check_online()?;

        let mut users = self.users.lock().unwrap();
        if users.contains_key(email) {
            return Err(DirectoryError::Rejected(
                "UsernameExistsException: An account with the given email already exists.".to_string(),
            ));
        }
        let sub = format!("sub-{}", users.len() + 1);
        users.insert(email.to_string(), (password.to_string(), sub.clone()));
        Ok(sub)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<String, DirectoryError> {
        self.check_online()?;

        match self.users.lock().unwrap().get(email) {
            Some((expected, sub)) if expected == password => Ok(mint_token(sub)),
            _ => Err(DirectoryError::Rejected(
                "NotAuthorizedException: Incorrect username or password.".to_string(),
            )),
        }
    }
}

#[derive(Default)]
pub struct FakeRecordStore {
    records: Mutex<Vec<JobRecord>>,
    failure: Mutex<Option<String>>,
}

impl FakeRecordStore {
    pub fn stored(&self) -> Vec<JobRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait]
impl RecordStore for FakeRecordStore {
    async fn put(&self, record: &JobRecord) -> Result<(), RecordStoreError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(RecordStoreError::Request(message));
        }
        let mut records = self.records.lock().unwrap();
        // Same key replaces the previous item
        records.retain(|r| !(r.user_id == record.user_id && r.content_id == record.content_id));
        records.push(record.clone());
        Ok(())
    }
}

pub struct TestHarness {
    pub storage: Arc<FakeBlobStore>,
    pub transcription: Arc<FakeTranscription>,
    pub generation: Arc<FakeGeneration>,
    pub directory: Arc<FakeDirectory>,
    pub records: Arc<FakeRecordStore>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            storage: Arc::default(),
            transcription: Arc::default(),
            generation: Arc::default(),
            directory: Arc::default(),
            records: Arc::default(),
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(
            test_config(),
            self.storage.clone(),
            self.transcription.clone(),
            self.generation.clone(),
            self.directory.clone(),
            self.records.clone(),
            TokenVerifier::from_secret(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE),
        )
    }

    pub fn router(&self) -> Router {
        crate::app::create_app(self.state())
    }
}
