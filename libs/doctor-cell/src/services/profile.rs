// libs/doctor-cell/src/services/profile.rs
use reqwest::Method;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_api::ConsoleApiClient;
use shared_config::AppConfig;

use crate::models::{
    CreateProfileRequest, DoctorProfile, ProfileError, UpdateProfileRequest, WorkingHours,
};

pub struct ProfileService {
    api: ConsoleApiClient,
}

impl ProfileService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ConsoleApiClient::new(config),
        }
    }

    pub async fn get_profile(
        &self,
        profile_id: Uuid,
        auth_token: &str,
    ) -> Result<DoctorProfile, ProfileError> {
        let path = format!("/profile/{}", profile_id);
        self.api
            .request(Method::GET, &path, Some(auth_token), None)
            .await
            .map_err(map_lookup_error)
    }

    pub async fn create_profile(
        &self,
        request: CreateProfileRequest,
        auth_token: &str,
    ) -> Result<DoctorProfile, ProfileError> {
        if let Some(ref hours) = request.working_hours {
            hours.validate()?;
        }

        debug!("Creating profile for user {}", request.user_id);
        self.api
            .request(Method::POST, "/profile", Some(auth_token), Some(json!(request)))
            .await
            .map_err(|e| ProfileError::Api(e.to_string()))
    }

    /// Update a profile. Working hours, when present, are validated
    /// locally before anything is sent.
    pub async fn update_profile(
        &self,
        profile_id: Uuid,
        request: UpdateProfileRequest,
        auth_token: &str,
    ) -> Result<DoctorProfile, ProfileError> {
        if let Some(ref hours) = request.working_hours {
            hours.validate()?;
        }

        debug!("Updating profile {}", profile_id);
        let path = format!("/profile/{}", profile_id);
        self.api
            .request(Method::PATCH, &path, Some(auth_token), Some(json!(request)))
            .await
            .map_err(map_lookup_error)
    }

    pub async fn delete_profile(
        &self,
        profile_id: Uuid,
        auth_token: &str,
    ) -> Result<(), ProfileError> {
        let path = format!("/profile/{}", profile_id);
        let _: serde_json::Value = self
            .api
            .request(Method::DELETE, &path, Some(auth_token), None)
            .await
            .map_err(map_lookup_error)?;
        Ok(())
    }

    /// Convenience wrapper for the working-hours form.
    pub async fn update_working_hours(
        &self,
        profile_id: Uuid,
        hours: WorkingHours,
        auth_token: &str,
    ) -> Result<DoctorProfile, ProfileError> {
        let request = UpdateProfileRequest {
            working_hours: Some(hours),
            ..Default::default()
        };
        self.update_profile(profile_id, request, auth_token).await
    }
}

fn map_lookup_error(e: anyhow::Error) -> ProfileError {
    let msg = e.to_string();
    if msg.starts_with("Resource not found") {
        ProfileError::NotFound
    } else {
        ProfileError::Api(msg)
    }
}
