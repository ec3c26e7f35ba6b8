// libs/appointment-cell/src/services/appointments.rs
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use scheduling_rules::{find_conflicts, next_7_days_range, today_range, validate_interval};
use shared_api::ConsoleApiClient;
use shared_config::AppConfig;

use crate::models::{
    Appointment, AppointmentError, AppointmentPage, AppointmentSearchQuery,
    CreateAppointmentRequest, UpdateAppointmentRequest,
};

pub struct AppointmentService {
    api: ConsoleApiClient,
    page_size: i32,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api: ConsoleApiClient::new(config),
            page_size: config.console_api_page_size,
        }
    }

    /// Create a new appointment. The interval is validated locally first;
    /// an invalid one never reaches the network.
    pub async fn create_appointment(
        &self,
        request: CreateAppointmentRequest,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        validate_interval(request.appointment_start_date, request.appointment_end_date)?;

        debug!(
            "Creating appointment for doctor {} from {} to {}",
            request.doctor_id, request.appointment_start_date, request.appointment_end_date
        );

        let created: Appointment = self
            .api
            .request(
                Method::POST,
                "/appointments/create",
                Some(auth_token),
                Some(json!(request)),
            )
            .await
            .map_err(|e| AppointmentError::Api(e.to_string()))?;

        Ok(created)
    }

    pub async fn get_appointment(
        &self,
        id: Uuid,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        let path = format!("/appointments/{}", id);
        self.api
            .request(Method::GET, &path, Some(auth_token), None)
            .await
            .map_err(map_lookup_error)
    }

    /// List appointments with the query parameters the remote API supports.
    pub async fn search_appointments(
        &self,
        query: &AppointmentSearchQuery,
        auth_token: &str,
    ) -> Result<AppointmentPage, AppointmentError> {
        let path = format!("/appointments{}", build_query_string(query));
        self.api
            .request(Method::GET, &path, Some(auth_token), None)
            .await
            .map_err(|e| AppointmentError::Api(e.to_string()))
    }

    /// Appointments starting today, in start order. The remote API has no
    /// date-range filter, so one page is fetched and windowed client-side.
    pub async fn today_appointments(
        &self,
        now: DateTime<Utc>,
        auth_token: &str,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let range = today_range(now);
        let page = self.sorted_page(auth_token).await?;
        Ok(page
            .data
            .into_iter()
            .filter(|apt| range.contains(apt.appointment_start_date))
            .collect())
    }

    /// Appointments starting within the next seven days, in start order.
    pub async fn upcoming_appointments(
        &self,
        now: DateTime<Utc>,
        auth_token: &str,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let range = next_7_days_range(now);
        let page = self.sorted_page(auth_token).await?;
        Ok(page
            .data
            .into_iter()
            .filter(|apt| range.contains(apt.appointment_start_date))
            .collect())
    }

    /// Update an appointment. When the schedule is being changed the full
    /// resulting interval is validated before anything is sent, merging in
    /// the stored timestamps for whichever side the update leaves out.
    pub async fn update_appointment(
        &self,
        id: Uuid,
        update: UpdateAppointmentRequest,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        if update.changes_schedule() {
            let current = self.get_appointment(id, auth_token).await?;
            let start = update
                .appointment_start_date
                .unwrap_or(current.appointment_start_date);
            let end = update
                .appointment_end_date
                .unwrap_or(current.appointment_end_date);
            validate_interval(start, end)?;
        }

        let path = format!("/appointments/{}", id);
        self.api
            .request(Method::PATCH, &path, Some(auth_token), Some(json!(update)))
            .await
            .map_err(map_lookup_error)
    }

    pub async fn delete_appointment(
        &self,
        id: Uuid,
        auth_token: &str,
    ) -> Result<(), AppointmentError> {
        let path = format!("/appointments/{}", id);
        let _: serde_json::Value = self
            .api
            .request(Method::DELETE, &path, Some(auth_token), None)
            .await
            .map_err(map_lookup_error)?;
        Ok(())
    }

    /// Attach or replace the free-text notes on an appointment.
    pub async fn add_notes(
        &self,
        id: Uuid,
        notes: &str,
        auth_token: &str,
    ) -> Result<Appointment, AppointmentError> {
        let path = format!("/appointments/{}", id);
        self.api
            .request(
                Method::PATCH,
                &path,
                Some(auth_token),
                Some(json!({ "notes": notes })),
            )
            .await
            .map_err(map_lookup_error)
    }

    /// Scan a doctor's bookings for overlaps with a candidate interval.
    /// `exclude_id` removes the appointment being rescheduled from its own
    /// check.
    ///
    /// Fetches one page of appointments (the backend scopes the listing to
    /// the authenticated doctor) and scans client-side. Whether the fixed
    /// page size is a deliberate simplification or a latent scalability
    /// limit is inherited from the remote API's contract; widening it would
    /// need a server-side date-range query.
    pub async fn check_conflicts(
        &self,
        doctor_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_id: Option<Uuid>,
        auth_token: &str,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!(
            "Checking conflicts for doctor {} from {} to {}",
            doctor_id, start, end
        );

        let path = format!("/appointments?pageSize={}", self.page_size);
        let page: AppointmentPage = self
            .api
            .request(Method::GET, &path, Some(auth_token), None)
            .await
            .map_err(|e| AppointmentError::Api(e.to_string()))?;

        let conflicts: Vec<Appointment> =
            find_conflicts(start, end, doctor_id, &page.data, exclude_id)
                .into_iter()
                .cloned()
                .collect();

        if !conflicts.is_empty() {
            warn!(
                "Conflict detected for doctor {} - {} overlapping appointment(s)",
                doctor_id,
                conflicts.len()
            );
        }

        Ok(conflicts)
    }

    /// Conflict check that fails the booking path outright when overlaps
    /// exist, carrying the offending appointments.
    pub async fn ensure_no_conflicts(
        &self,
        doctor_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude_id: Option<Uuid>,
        auth_token: &str,
    ) -> Result<(), AppointmentError> {
        let conflicts = self
            .check_conflicts(doctor_id, start, end, exclude_id, auth_token)
            .await?;
        if conflicts.is_empty() {
            Ok(())
        } else {
            Err(AppointmentError::ConflictDetected { conflicts })
        }
    }

    async fn sorted_page(&self, auth_token: &str) -> Result<AppointmentPage, AppointmentError> {
        let query = AppointmentSearchQuery {
            sort_by: Some("appointmentStartDate".to_string()),
            sort_order: Some("asc".to_string()),
            page_size: Some(self.page_size),
            ..Default::default()
        };
        self.search_appointments(&query, auth_token).await
    }
}

fn map_lookup_error(e: anyhow::Error) -> AppointmentError {
    let msg = e.to_string();
    if msg.starts_with("Resource not found") {
        AppointmentError::NotFound
    } else {
        AppointmentError::Api(msg)
    }
}

fn build_query_string(query: &AppointmentSearchQuery) -> String {
    let mut params = Vec::new();

    if let Some(ref search_key) = query.search_key {
        params.push(format!("searchKey={}", urlencoding::encode(search_key)));
    }
    if let Some(page) = query.page {
        params.push(format!("page={}", page));
    }
    if let Some(page_size) = query.page_size {
        params.push(format!("pageSize={}", page_size));
    }
    if let Some(ref sort_by) = query.sort_by {
        params.push(format!("sortBy={}", sort_by));
    }
    if let Some(ref sort_order) = query.sort_order {
        params.push(format!("sortOrder={}", sort_order));
    }

    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}
