// libs/auth-cell/src/services/session.rs
use reqwest::Method;
use serde_json::json;
use tracing::{debug, warn};

use shared_api::ConsoleApiClient;
use shared_config::AppConfig;
use shared_models::auth::{Session, User};

use crate::models::{AuthError, AuthResponse, LoginRequest, SignupRequest};

/// Authentication against the remote console API. Credentials are checked
/// remotely; this cell only enforces the doctor-portal gate and hands the
/// caller an explicit `Session` to thread through subsequent calls.
pub struct AuthService {
    api: ConsoleApiClient,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ConsoleApiClient::new(config),
        }
    }

    /// Exchange credentials for a session. Valid credentials on a
    /// non-doctor account are still rejected; this portal is doctors only.
    pub async fn login(&self, request: LoginRequest) -> Result<Session, AuthError> {
        debug!("Logging in {}", request.email);

        let response: AuthResponse = self
            .api
            .request(Method::POST, "/users/login", None, Some(json!(request)))
            .await
            .map_err(map_auth_error)?;

        if !response.user.is_doctor() {
            warn!("Login rejected for non-doctor account {}", request.email);
            return Err(AuthError::NotADoctor);
        }

        Ok(Session {
            access_token: response.access_token,
            user: response.user,
        })
    }

    /// Register a doctor account. The doctor flags are forced on the
    /// outgoing profile regardless of what the caller filled in, and the
    /// created account is re-checked on the way back.
    pub async fn signup(&self, mut request: SignupRequest) -> Result<Session, AuthError> {
        request.profile.is_doctor = true;
        request.profile.is_patient = false;

        debug!("Signing up {}", request.email);

        let response: AuthResponse = self
            .api
            .request(Method::POST, "/users/signup", None, Some(json!(request)))
            .await
            .map_err(map_auth_error)?;

        if !response.user.is_doctor() {
            return Err(AuthError::NotADoctor);
        }

        Ok(Session {
            access_token: response.access_token,
            user: response.user,
        })
    }

    /// Ask the remote API whether the session's token is still good, and
    /// re-apply the doctor gate to the session's own user.
    pub async fn verify(&self, session: &Session) -> Result<User, AuthError> {
        let _: serde_json::Value = self
            .api
            .request(Method::POST, "/auth/verify", Some(session.token()), None)
            .await
            .map_err(map_auth_error)?;

        if !session.user.is_doctor() {
            return Err(AuthError::NotADoctor);
        }

        Ok(session.user.clone())
    }

    /// The session's user, when it passes the doctor gate. Pure accessor;
    /// no remote call.
    pub fn current_doctor<'a>(&self, session: &'a Session) -> Option<&'a User> {
        session.user.is_doctor().then_some(&session.user)
    }
}

fn map_auth_error(e: anyhow::Error) -> AuthError {
    let msg = e.to_string();
    if msg.starts_with("Authentication error") {
        AuthError::InvalidCredentials
    } else {
        AuthError::Api(msg)
    }
}
