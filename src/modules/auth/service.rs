use super::dto::{AuthAction, AuthRequest, Credentials, SigninResponse, SignupResponse};
use crate::infrastructure::identity::DirectoryError;
use crate::state::AppState;
use axum::http::StatusCode;
use thiserror::Error;
use tracing::info;
use validator::Validate;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid action. Must be either \"signup\" or \"signin\"")]
    InvalidAction,
    #[error("{0}")]
    InvalidCredentials(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Directory(DirectoryError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug)]
pub enum AuthOutcome {
    Registered(SignupResponse),
    SignedIn(SigninResponse),
}

pub struct AuthService;

impl AuthService {
    pub async fn handle(state: AppState, req: AuthRequest) -> Result<AuthOutcome, AuthError> {
        let action = req
            .action
            .as_deref()
            .and_then(AuthAction::from_name)
            .ok_or(AuthError::InvalidAction)?;

        let credentials = Credentials {
            email: req.email.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
        };
        credentials.validate()?;

        match action {
            AuthAction::Signup => Self::signup(state, credentials).await.map(AuthOutcome::Registered),
            AuthAction::Signin => Self::signin(state, credentials).await.map(AuthOutcome::SignedIn),
        }
    }

    async fn signup(state: AppState, credentials: Credentials) -> Result<SignupResponse, AuthError> {
        let user_sub = state
            .directory
            .register(&credentials.email, &credentials.password)
            .await?;

        info!("Registered user {}", user_sub);

        Ok(SignupResponse {
            message: "User registered successfully".to_string(),
            user_sub,
        })
    }

    async fn signin(state: AppState, credentials: Credentials) -> Result<SigninResponse, AuthError> {
        let token = state
            .directory
            .authenticate(&credentials.email, &credentials.password)
            .await?;

        Ok(SigninResponse { token })
    }
}
