use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    AwsRegion,
    TableName,
    BucketName,
    ClientId,
    UserPoolId,
    ModelId,
    TranscribeLanguage,
    AllowedOrigin,
    EventsToken,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::AwsRegion => "AWS_REGION",
            EnvKey::TableName => "TABLE_NAME",
            EnvKey::BucketName => "BUCKET_NAME",
            EnvKey::ClientId => "CLIENT_ID",
            EnvKey::UserPoolId => "USER_POOL_ID",
            EnvKey::ModelId => "MODEL_ID",
            EnvKey::TranscribeLanguage => "TRANSCRIBE_LANGUAGE",
            EnvKey::AllowedOrigin => "ALLOWED_ORIGIN",
            EnvKey::EventsToken => "EVENTS_TOKEN",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
