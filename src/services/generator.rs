use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{Slot, SlotCreate};
use crate::services::api::AppointmentApi;
use crate::services::booking::slots_on;
use crate::services::notifications::Notifier;

pub const SLOT_MINUTES: i64 = 30;

/// Accepts `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(s: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| AppError::Validation(format!("invalid time: {s}")))
}

/// Number of half-hour slots starting in `[start, end)`: ceil((end - start) / 30min).
/// Zero when `end` is not after `start`.
pub fn slot_count(start: NaiveTime, end: NaiveTime) -> usize {
    if end <= start {
        return 0;
    }
    let minutes = (end - start).num_minutes();
    ((minutes + SLOT_MINUTES - 1) / SLOT_MINUTES) as usize
}

pub fn preview_times(start: NaiveTime, end: NaiveTime) -> Vec<NaiveTime> {
    (0..slot_count(start, end))
        .map(|i| start + Duration::minutes(SLOT_MINUTES * i as i64))
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub count: usize,
    pub times: Vec<String>,
    /// False when nothing would be generated; the submit control stays off.
    pub can_submit: bool,
}

impl Preview {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        let times: Vec<String> = preview_times(start, end)
            .iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect();
        Self {
            count: times.len(),
            can_submit: !times.is_empty(),
            times,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl GenerateRequest {
    pub fn payload(&self) -> SlotCreate {
        SlotCreate {
            date: self.date.format("%Y-%m-%d").to_string(),
            start_time: self.start.format("%H:%M:00").to_string(),
            end_time: self.end.format("%H:%M:00").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    /// The backend's summary, e.g. how many slots already existed.
    pub message: String,
    /// The day after generation; `None` when that reload failed.
    pub slots: Option<Vec<Slot>>,
}

pub async fn load_generator_slots(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    date: NaiveDate,
) -> Result<Vec<Slot>, AppError> {
    let all = notifier.report(api.list_slots().await)?;
    Ok(slots_on(all, date))
}

/// Asks the backend to create the grid for one day, then reloads that day.
/// An empty range is refused without calling the API. A failed reload does
/// not turn the applied creation into an error.
pub async fn generate_slots(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    request: GenerateRequest,
) -> Result<Generated, AppError> {
    let count = slot_count(request.start, request.end);
    if count == 0 {
        return Err(AppError::Validation(
            "end time must be after start time".to_string(),
        ));
    }

    let payload = request.payload();
    let message = notifier.report(api.create_slots(&payload).await)?;
    tracing::info!(date = %payload.date, expected = count, "slot generation requested");
    notifier.success(message.clone());

    let slots = load_generator_slots(api, notifier, request.date).await.ok();
    Ok(Generated { message, slots })
}
