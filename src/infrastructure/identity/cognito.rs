use super::{DirectoryError, IdentityDirectory};
use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType};
use std::fmt::Debug;
use tracing::info;

#[derive(Clone)]
pub struct CognitoDirectory {
    client: Client,
    client_id: String,
}

impl CognitoDirectory {
    pub fn new(config: &aws_config::SdkConfig, client_id: &str) -> Self {
        let client = Client::new(config);

        info!("✅ Cognito client ready");

        Self {
            client,
            client_id: client_id.to_string(),
        }
    }
}

// Service errors are answers from the directory; everything else (dispatch,
// timeout, response parsing) means we never got one.
fn classify<E, R>(err: SdkError<E, R>) -> DirectoryError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: Debug,
{
    match &err {
        SdkError::ServiceError(service) => {
            let inner = service.err();
            DirectoryError::Rejected(format!(
                "{}: {}",
                inner.code().unwrap_or("UnknownError"),
                inner.message().unwrap_or("no message")
            ))
        }
        _ => DirectoryError::Unavailable(DisplayErrorContext(&err).to_string()),
    }
}

#[async_trait]
impl IdentityDirectory for CognitoDirectory {
    async fn register(&self, email: &str, password: &str) -> Result<String, DirectoryError> {
        let email_attribute = AttributeType::builder()
            .name("email")
            .value(email)
            .build()
            .map_err(|e| DirectoryError::Unavailable(e.to_string()))?;

        let output = self
            .client
            .sign_up()
            .client_id(&self.client_id)
            .username(email)
            .password(password)
            .user_attributes(email_attribute)
            .send()
            .await
            .map_err(classify)?;

        Ok(output.user_sub().to_string())
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<String, DirectoryError> {
        let output = self
            .client
            .initiate_auth()
            .client_id(&self.client_id)
            .auth_flow(AuthFlowType::UserPasswordAuth)
            .auth_parameters("USERNAME", email)
            .auth_parameters("PASSWORD", password)
            .send()
            .await
            .map_err(classify)?;

        output
            .authentication_result()
            .and_then(|result| result.id_token())
            .map(str::to_string)
            .ok_or_else(|| {
                DirectoryError::Rejected(format!(
                    "Sign-in requires challenge {}",
                    output
                        .challenge_name()
                        .map(|challenge| challenge.as_str())
                        .unwrap_or("UNKNOWN")
                ))
            })
    }
}
