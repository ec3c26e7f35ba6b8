use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account record as returned by the remote console API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile: Option<UserProfile>,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_doctor(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.is_doctor)
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub is_doctor: bool,
    #[serde(default)]
    pub is_patient: bool,
    pub specialty: Option<String>,
    pub bio: Option<String>,
}

/// Authenticated identity, passed explicitly to any service that needs it.
/// There is deliberately no ambient storage of credentials; whoever owns
/// the session hands it to each call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.access_token
    }
}
