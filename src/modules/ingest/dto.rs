use serde::Deserialize;
use utoipa::ToSchema;

/// Object-store notification batch, as delivered by S3 event notifications.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StorageEvent {
    #[serde(rename = "Records")]
    pub records: Vec<StorageEventRecord>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageEventRecord {
    /// e.g. `ObjectCreated:Put`, `ObjectRemoved:Delete`
    pub event_name: String,
    pub s3: S3Entity,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct S3Object {
    pub key: String,
}

impl StorageEventRecord {
    pub fn is_object_created(&self) -> bool {
        self.event_name.starts_with("ObjectCreated:")
    }
}
