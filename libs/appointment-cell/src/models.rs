// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scheduling_rules::{
    classify_status, duration_minutes, format_duration, is_past, AppointmentStatus, BookedSlot,
    ValidationError,
};
use shared_models::error::AppError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Appointment record as stored by the remote console API. This cell never
/// mutates one directly; it only reads them and sends change requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub appointment_start_date: DateTime<Utc>,
    pub appointment_end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Temporal status relative to the caller's captured `now`. Recomputed
    /// on every call; callers batching several reads should pass the same
    /// `now` throughout.
    pub fn status(&self, now: DateTime<Utc>) -> AppointmentStatus {
        classify_status(self.appointment_start_date, self.appointment_end_date, now)
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        is_past(self.appointment_start_date, now)
    }

    pub fn duration_minutes(&self) -> i64 {
        duration_minutes(self.appointment_start_date, self.appointment_end_date)
    }

    /// Display label such as "30 min" or "1h 15min".
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_minutes())
    }
}

impl BookedSlot for Appointment {
    fn slot_id(&self) -> Uuid {
        self.id
    }
    fn slot_doctor_id(&self) -> Uuid {
        self.doctor_id
    }
    fn slot_start(&self) -> DateTime<Utc> {
        self.appointment_start_date
    }
    fn slot_end(&self) -> DateTime<Utc> {
        self.appointment_end_date
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub doctor_id: Uuid,
    pub patient_id: Uuid,
    pub appointment_start_date: DateTime<Utc>,
    pub appointment_end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial update; only the provided fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UpdateAppointmentRequest {
    pub fn changes_schedule(&self) -> bool {
        self.appointment_start_date.is_some() || self.appointment_end_date.is_some()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSearchQuery {
    pub search_key: Option<String>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Paged listing envelope returned by the remote API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentPage {
    #[serde(default)]
    pub data: Vec<Appointment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Invalid appointment time: {0}")]
    InvalidTime(#[from] ValidationError),

    #[error("Appointment conflicts with {} existing booking(s)", conflicts.len())]
    ConflictDetected { conflicts: Vec<Appointment> },

    #[error("Console API error: {0}")]
    Api(String),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        let msg = err.to_string();
        match err {
            AppointmentError::NotFound => AppError::NotFound(msg),
            AppointmentError::InvalidTime(_) => AppError::ValidationError(msg),
            AppointmentError::ConflictDetected { .. } => AppError::Conflict(msg),
            AppointmentError::Api(_) => AppError::ExternalService(msg),
        }
    }
}
