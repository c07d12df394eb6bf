use async_trait::async_trait;
use thiserror::Error;

pub mod cognito;
pub mod token;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory answered and refused the call (bad password, user
    /// exists, unconfirmed account, challenge required, ...).
    #[error("{0}")]
    Rejected(String),
    /// The call never produced an answer from the directory.
    #[error("{0}")]
    Unavailable(String),
}

/// Managed user directory with username/password accounts keyed by email.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Registers a user and returns the subject id assigned by the directory.
    async fn register(&self, email: &str, password: &str) -> Result<String, DirectoryError>;

    /// Password sign-in, returning the ID token.
    async fn authenticate(&self, email: &str, password: &str) -> Result<String, DirectoryError>;
}
