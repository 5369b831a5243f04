use serde::{Deserialize, Serialize};

use super::{Appointment, AppointmentStatus, Slot};

/// Display status of a slot in the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SlotStatus {
    Disponible,
    Espera,
    Aceptado,
    Rechazado,
}

impl SlotStatus {
    /// An open slot is DISPONIBLE whatever else is known about it; a taken
    /// slot without a pending or accepted appointment reads as RECHAZADO.
    pub fn derive(slot: &Slot, appointment: Option<&Appointment>) -> Self {
        if slot.availability {
            return SlotStatus::Disponible;
        }
        match appointment.map(|a| a.status) {
            Some(AppointmentStatus::Espera) => SlotStatus::Espera,
            Some(AppointmentStatus::Aceptado) => SlotStatus::Aceptado,
            _ => SlotStatus::Rechazado,
        }
    }

    pub fn actions(&self) -> &'static [AdminAction] {
        match self {
            SlotStatus::Disponible => &[AdminAction::DeleteSlot],
            SlotStatus::Espera => &[AdminAction::Accept, AdminAction::Reject],
            SlotStatus::Aceptado => &[AdminAction::Reject],
            SlotStatus::Rechazado => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    DeleteSlot,
    Accept,
    /// Rejects a pending request or cancels an accepted one.
    Reject,
}

/// Filter of the admin slot screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusFilter {
    #[default]
    Todos,
    Disponible,
    Espera,
    Aceptado,
    Rechazado,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Todos => "TODOS",
            StatusFilter::Disponible => "DISPONIBLE",
            StatusFilter::Espera => "ESPERA",
            StatusFilter::Aceptado => "ACEPTADO",
            StatusFilter::Rechazado => "RECHAZADO",
        }
    }

    /// The appointment status a filter targets, if it targets one.
    pub fn appointment_status(&self) -> Option<AppointmentStatus> {
        match self {
            StatusFilter::Espera => Some(AppointmentStatus::Espera),
            StatusFilter::Aceptado => Some(AppointmentStatus::Aceptado),
            StatusFilter::Rechazado => Some(AppointmentStatus::Rechazado),
            StatusFilter::Todos | StatusFilter::Disponible => None,
        }
    }

    pub fn keeps(&self, slot: &Slot, appointment: Option<&Appointment>) -> bool {
        match self {
            StatusFilter::Todos => true,
            StatusFilter::Disponible => slot.availability,
            _ => appointment.map(|a| a.status) == self.appointment_status(),
        }
    }
}
