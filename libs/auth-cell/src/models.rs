// libs/auth-cell/src/models.rs
use serde::{Deserialize, Serialize};

use shared_models::auth::{User, UserProfile};
use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub profile: UserProfile,
}

/// Wire shape of the login/signup responses: the access token plus the
/// user record's own fields at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(flatten)]
    pub user: User,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied. This portal is for doctors only.")]
    NotADoctor,

    #[error("Console API error: {0}")]
    Api(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let msg = err.to_string();
        match err {
            AuthError::InvalidCredentials | AuthError::NotADoctor => AppError::Auth(msg),
            AuthError::Api(_) => AppError::ExternalService(msg),
        }
    }
}
