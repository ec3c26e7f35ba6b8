// libs/doctor-cell/src/models.rs
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scheduling_rules::{WORK_DAY_END_HOUR, WORK_DAY_START_HOUR};
use shared_models::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub working_hours: WorkingHours,
}

impl DoctorProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The doctor's daily consultation window. Appointments are validated
/// against the clinic-wide business hours; this window only narrows what
/// the doctor offers within them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            open_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        }
    }
}

impl WorkingHours {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.open_time >= self.close_time {
            return Err(ProfileError::InvalidWorkingHours(
                "Open time must be before close time".to_string(),
            ));
        }

        let earliest = NaiveTime::from_hms_opt(WORK_DAY_START_HOUR, 0, 0).unwrap();
        let latest = NaiveTime::from_hms_opt(WORK_DAY_END_HOUR, 0, 0).unwrap();
        if self.open_time < earliest || self.close_time > latest {
            return Err(ProfileError::InvalidWorkingHours(
                "Working hours must fall between 8 AM and 6 PM".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
}

/// Partial update; only the provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Invalid working hours: {0}")]
    InvalidWorkingHours(String),

    #[error("Console API error: {0}")]
    Api(String),
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        let msg = err.to_string();
        match err {
            ProfileError::NotFound => AppError::NotFound(msg),
            ProfileError::InvalidWorkingHours(_) => AppError::ValidationError(msg),
            ProfileError::Api(_) => AppError::ExternalService(msg),
        }
    }
}
