use serde::{Deserialize, Serialize};
use validator::Validate;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthRequest {
    /// `signup` or `signin`
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Signup,
    Signin,
}

impl AuthAction {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "signup" => Some(AuthAction::Signup),
            "signin" => Some(AuthAction::Signin),
            _ => None,
        }
    }
}

#[derive(Debug, Validate)]
pub struct Credentials {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: String,
    pub user_sub: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SigninResponse {
    /// ID token to send as `Authorization: Bearer <token>`.
    pub token: String,
}
