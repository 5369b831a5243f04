use serde::{Deserialize, Serialize};

pub const DEFAULT_COMMENT: &str = "Turno solicitado";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    /// Pending admin review.
    Espera,
    Aceptado,
    Rechazado,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Espera => "ESPERA",
            AppointmentStatus::Aceptado => "ACEPTADO",
            AppointmentStatus::Rechazado => "RECHAZADO",
        }
    }
}

/// Reference to a slot. The backend sometimes nests the full slot object
/// here; only the id is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl SlotRef {
    pub fn id(id: i64) -> Self {
        Self { id, date: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub user_id: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: AppointmentStatus,
    #[serde(default)]
    pub available_appointment: Option<SlotRef>,
    #[serde(default)]
    pub appointment_date: Option<String>,
}

impl Appointment {
    /// Id of the slot this appointment occupies, falling back to the
    /// appointment's own id when the backend omits the reference.
    pub fn slot_key(&self) -> i64 {
        self.available_appointment
            .as_ref()
            .map(|s| s.id)
            .unwrap_or(self.id)
    }

    /// Best known start timestamp: `appointmentDate`, else the nested slot date.
    pub fn date(&self) -> Option<&str> {
        self.appointment_date
            .as_deref()
            .or_else(|| self.available_appointment.as_ref()?.date.as_deref())
    }
}

/// Body of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCreate {
    pub user_id: String,
    pub comment: String,
    pub status: AppointmentStatus,
    pub available_appointment: SlotRef,
}

impl AppointmentCreate {
    /// A new request always starts in ESPERA; empty notes get the stock comment.
    pub fn request(user_id: &str, slot_id: i64, notes: &str) -> Self {
        let comment = if notes.is_empty() {
            DEFAULT_COMMENT.to_string()
        } else {
            notes.to_string()
        };
        Self {
            user_id: user_id.to_string(),
            comment,
            status: AppointmentStatus::Espera,
            available_appointment: SlotRef::id(slot_id),
        }
    }
}
