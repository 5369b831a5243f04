use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable half-hour window (`AvailableAppointment` upstream).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub id: i64,
    /// ISO-8601 timestamp as sent by the backend, e.g. `2025-06-16T09:30:00`.
    #[serde(default)]
    pub date: String,
    pub availability: bool,
}

impl Slot {
    /// The `YYYY-MM-DD` part of the timestamp, used as the grouping key.
    pub fn day_key(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }

    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.day_key(), "%Y-%m-%d").ok()
    }

    /// `HH:MM` of the slot start, empty when the timestamp has no time part.
    pub fn time_label(&self) -> &str {
        self.date.get(11..16).unwrap_or("")
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date.starts_with(&day.format("%Y-%m-%d").to_string())
    }

    /// Slots with an unparseable date are never treated as past.
    pub fn is_before(&self, today: NaiveDate) -> bool {
        self.day().is_some_and(|d| d < today)
    }
}

/// Body of the bulk slot-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCreate {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}
