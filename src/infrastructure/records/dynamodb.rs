use super::{RecordStore, RecordStoreError};
use crate::modules::jobs::model::JobRecord;
use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use tracing::{debug, info};

#[derive(Clone)]
pub struct DynamoRecordStore {
    client: Client,
    table: String,
}

impl DynamoRecordStore {
    pub fn new(config: &aws_config::SdkConfig, table: &str) -> Self {
        let client = Client::new(config);

        info!("✅ DynamoDB client ready (table {})", table);

        Self {
            client,
            table: table.to_string(),
        }
    }
}

fn to_item(record: &JobRecord) -> Result<HashMap<String, AttributeValue>, RecordStoreError> {
    let attributes = record
        .attributes()
        .map_err(|e| RecordStoreError::Encode(e.to_string()))?;

    Ok(attributes
        .into_iter()
        .map(|(name, value)| (name.to_string(), AttributeValue::S(value)))
        .collect())
}

#[async_trait]
impl RecordStore for DynamoRecordStore {
    async fn put(&self, record: &JobRecord) -> Result<(), RecordStoreError> {
        let item = to_item(record)?;

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| RecordStoreError::Request(DisplayErrorContext(&e).to_string()))?;

        debug!("Stored {}/{} in {}", record.user_id, record.content_id, self.table);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::model::AnalysisType;
    use time::macros::datetime;

    #[test]
    fn item_uses_string_attributes_keyed_by_user_and_content() {
        let now = datetime!(2024-06-01 12:00:00 UTC);
        let record = JobRecord::analysis("u1", AnalysisType::Blog, "text".to_string(), "t1", now).unwrap();

        let item = to_item(&record).unwrap();

        assert_eq!(item.get("userId"), Some(&AttributeValue::S("u1".to_string())));
        assert_eq!(
            item.get("contentId"),
            Some(&AttributeValue::S("blog-20240601120000".to_string()))
        );
        assert_eq!(
            item.get("createdAt"),
            Some(&AttributeValue::S("2024-06-01T12:00:00Z".to_string()))
        );
        assert_eq!(item.len(), 6);
    }
}
