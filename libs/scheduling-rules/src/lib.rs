//! Canonical scheduling rules for the doctor console.
//!
//! Every call site that validates an appointment interval, classifies its
//! temporal status or scans for booking conflicts goes through this crate,
//! so the rules exist exactly once. All functions are pure: `now` is an
//! argument, nothing is cached, and nothing here performs I/O.

pub mod models;
pub mod ranges;
pub mod rules;

pub use models::{AppointmentStatus, BookedSlot, DateRange, ValidationError};
pub use ranges::{next_7_days_range, this_week_range, today_range};
pub use rules::{
    classify_status, duration_minutes, find_conflicts, format_duration, is_past,
    validate_interval, MIN_APPOINTMENT_MINUTES, WORK_DAY_END_HOUR, WORK_DAY_START_HOUR,
};
