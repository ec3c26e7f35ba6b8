use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Temporal classification of an appointment relative to a supplied `now`.
/// Derived on every read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "upcoming"),
            AppointmentStatus::Ongoing => write!(f, "ongoing"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Why a proposed interval was rejected. Messages are rendered verbatim by
/// form layers, so their wording is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Start time must be between 8 AM and 6 PM")]
    OutOfHoursStart,

    #[error("End time must be between 8 AM and 6 PM")]
    OutOfHoursEnd,

    #[error("Appointment must be at least 15 minutes")]
    TooShort,

    #[error("End time must be after start time")]
    EndBeforeStart,
}

/// Half-open `[start, end)` timestamp pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// True when `instant` falls inside the range. Start inclusive, end
    /// exclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Anything the conflict scan can treat as an existing booking. Keeps the
/// scan decoupled from any one appointment model.
pub trait BookedSlot {
    fn slot_id(&self) -> Uuid;
    fn slot_doctor_id(&self) -> Uuid;
    fn slot_start(&self) -> DateTime<Utc>;
    fn slot_end(&self) -> DateTime<Utc>;
}
