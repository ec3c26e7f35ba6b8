use chrono::{DateTime, Timelike, Utc};
use uuid::Uuid;

use crate::models::{AppointmentStatus, BookedSlot, ValidationError};

/// Appointments may start at or after this hour.
pub const WORK_DAY_START_HOUR: u32 = 8;
/// Appointments must end by this hour. An end of exactly 18:00 is allowed.
pub const WORK_DAY_END_HOUR: u32 = 18;
/// Minimum bookable duration.
pub const MIN_APPOINTMENT_MINUTES: i64 = 15;

/// Validate a proposed appointment interval against business hours and the
/// minimum duration.
///
/// Checks run in a fixed order and the first failure wins: start hour,
/// end hour, minimum duration, end after start. Callers key on the error
/// messages, so the order is part of the contract. Note that an inverted
/// interval reports `TooShort` (its span is negative) before the final
/// check can fire.
pub fn validate_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), ValidationError> {
    let start_hour = start.hour();
    if start_hour < WORK_DAY_START_HOUR || start_hour >= WORK_DAY_END_HOUR {
        return Err(ValidationError::OutOfHoursStart);
    }

    let end_hour = end.hour();
    if end_hour < WORK_DAY_START_HOUR
        || end_hour > WORK_DAY_END_HOUR
        || (end_hour == WORK_DAY_END_HOUR && end.minute() > 0)
    {
        return Err(ValidationError::OutOfHoursEnd);
    }

    if duration_minutes(start, end) < MIN_APPOINTMENT_MINUTES {
        return Err(ValidationError::TooShort);
    }

    if end <= start {
        return Err(ValidationError::EndBeforeStart);
    }

    Ok(())
}

/// True when `instant` is strictly before `now`.
pub fn is_past(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    instant < now
}

/// Classify an appointment relative to `now`. Total over the timeline:
/// both boundary instants count as ongoing.
pub fn classify_status(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AppointmentStatus {
    if now < start {
        AppointmentStatus::Upcoming
    } else if now <= end {
        AppointmentStatus::Ongoing
    } else {
        AppointmentStatus::Completed
    }
}

/// Interval length in whole minutes, rounded to the nearest minute
/// (half away from zero).
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    ((end - start).num_milliseconds() as f64 / 60_000.0).round() as i64
}

/// Render a minute count for display, e.g. "45 min", "1h", "1h 30min".
pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}min", hours, mins)
    } else {
        format!("{}h", hours)
    }
}

/// Scan `existing` bookings for overlaps with the candidate interval.
///
/// Only slots for `doctor_id` are considered, and `exclude_id` removes the
/// appointment being edited from its own check. Intervals are half-open:
/// a booking that ends exactly when the candidate starts is not a
/// conflict. Returns every overlapping slot, not just the first.
///
/// Linear scan; fine at per-doctor volumes. An interval tree keyed per
/// doctor would drop in here without changing the signature if that stops
/// holding.
pub fn find_conflicts<'a, T: BookedSlot>(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    doctor_id: Uuid,
    existing: &'a [T],
    exclude_id: Option<Uuid>,
) -> Vec<&'a T> {
    existing
        .iter()
        .filter(|slot| {
            if exclude_id.is_some_and(|id| slot.slot_id() == id) {
                return false;
            }
            if slot.slot_doctor_id() != doctor_id {
                return false;
            }
            start < slot.slot_end() && end > slot.slot_start()
        })
        .collect()
}
