use super::{BlobStore, StorageError};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use bytes::Bytes;
use tracing::{debug, info};

#[derive(Clone)]
pub struct StorageService {
    client: Client,
}

impl StorageService {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        let client = Client::new(config);

        info!("✅ S3 client ready");

        Self { client }
    }
}

#[async_trait]
impl BlobStore for StorageService {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let object = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    StorageError::NotFound(key.to_string())
                } else {
                    StorageError::Request(DisplayErrorContext(&err).to_string())
                }
            })?;

        let data = object
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Body(e.to_string()))?
            .into_bytes();

        debug!("Fetched s3://{}/{} ({} bytes)", bucket, key, data.len());
        Ok(data)
    }
}
