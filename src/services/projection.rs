use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{
    AdminAction, Appointment, AppointmentStatus, Slot, SlotStatus, StatusFilter,
};
use crate::services::api::AppointmentApi;

/// What one admin fetch returned, before the visibility filter and grouping.
#[derive(Debug, Clone, Default)]
pub struct AdminView {
    pub filter: StatusFilter,
    pub slots: Vec<Slot>,
    pub appts_by_slot: HashMap<i64, Appointment>,
}

impl AdminView {
    /// Every slot, with the pending and accepted appointments keyed by the
    /// slot they reference. Appointments without a slot reference are dropped.
    pub fn from_all(slots: Vec<Slot>, appointments: impl IntoIterator<Item = Appointment>) -> Self {
        let appts_by_slot = appointments
            .into_iter()
            .filter_map(|a| {
                let slot_id = a.available_appointment.as_ref()?.id;
                Some((slot_id, a))
            })
            .collect();
        Self {
            filter: StatusFilter::Todos,
            slots,
            appts_by_slot,
        }
    }

    pub fn from_available(slots: Vec<Slot>) -> Self {
        Self {
            filter: StatusFilter::Disponible,
            slots,
            appts_by_slot: HashMap::new(),
        }
    }

    /// The by-status endpoint returns appointments only, so each one becomes
    /// a taken pseudo-slot keyed like `Appointment::slot_key`. Appointments
    /// that share a key are merged into one row, last one wins, so each slot
    /// id appears once in the grouped view and matches its `appts_by_slot`
    /// entry.
    pub fn from_status(status: AppointmentStatus, appointments: Vec<Appointment>) -> Self {
        let mut slots: Vec<Slot> = Vec::with_capacity(appointments.len());
        let mut appts_by_slot = HashMap::with_capacity(appointments.len());

        for appt in appointments {
            let key = appt.slot_key();
            let pseudo = Slot {
                id: key,
                date: appt.date().unwrap_or_default().to_string(),
                availability: false,
            };
            match slots.iter_mut().find(|s| s.id == key) {
                Some(existing) => *existing = pseudo,
                None => slots.push(pseudo),
            }
            appts_by_slot.insert(key, appt);
        }

        Self {
            filter: status_filter(status),
            slots,
            appts_by_slot,
        }
    }

    /// Slots from `today` on that pass the filter, in fetch order.
    pub fn visible(&self, today: NaiveDate) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(move |s| {
            !s.is_before(today) && self.filter.keeps(s, self.appts_by_slot.get(&s.id))
        })
    }

    pub fn snapshot(&self, today: NaiveDate) -> AdminSnapshot {
        let mut slots_by_date: BTreeMap<String, Vec<SlotEntry>> = BTreeMap::new();
        let mut appts_by_slot = BTreeMap::new();

        for slot in self.visible(today) {
            let appointment = self.appts_by_slot.get(&slot.id);
            if let Some(appt) = appointment {
                appts_by_slot.insert(slot.id, appt.clone());
            }
            slots_by_date
                .entry(slot.day_key().to_string())
                .or_default()
                .push(SlotEntry::new(slot, appointment));
        }

        AdminSnapshot {
            filter: self.filter,
            slots_by_date,
            appts_by_slot,
        }
    }
}

fn status_filter(status: AppointmentStatus) -> StatusFilter {
    match status {
        AppointmentStatus::Espera => StatusFilter::Espera,
        AppointmentStatus::Aceptado => StatusFilter::Aceptado,
        AppointmentStatus::Rechazado => StatusFilter::Rechazado,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotEntry {
    #[serde(flatten)]
    pub slot: Slot,
    pub time: String,
    pub status: SlotStatus,
    pub appointment: Option<Appointment>,
    pub actions: Vec<AdminAction>,
}

impl SlotEntry {
    fn new(slot: &Slot, appointment: Option<&Appointment>) -> Self {
        let status = SlotStatus::derive(slot, appointment);
        Self {
            slot: slot.clone(),
            time: slot.time_label().to_string(),
            status,
            appointment: appointment.cloned(),
            actions: status.actions().to_vec(),
        }
    }
}

/// Display-ready admin view: visible slots grouped by `YYYY-MM-DD`, and the
/// appointments of exactly those slots.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSnapshot {
    pub filter: StatusFilter,
    pub slots_by_date: BTreeMap<String, Vec<SlotEntry>>,
    pub appts_by_slot: BTreeMap<i64, Appointment>,
}

impl AdminSnapshot {
    pub fn slot_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.slots_by_date.values().flatten().map(|e| e.slot.id)
    }
}

pub async fn load_admin(
    api: &dyn AppointmentApi,
    filter: StatusFilter,
) -> Result<AdminView, AppError> {
    let view = match (filter, filter.appointment_status()) {
        (_, Some(status)) => AdminView::from_status(status, api.appointments_by_status(status).await?),
        (StatusFilter::Disponible, None) => AdminView::from_available(api.list_available_slots().await?),
        (_, None) => {
            let (all, pending, accepted) = tokio::try_join!(
                api.list_slots(),
                api.appointments_by_status(AppointmentStatus::Espera),
                api.appointments_by_status(AppointmentStatus::Aceptado),
            )?;
            AdminView::from_all(all, pending.into_iter().chain(accepted))
        }
    };

    tracing::debug!(
        filter = filter.as_str(),
        slots = view.slots.len(),
        appointments = view.appts_by_slot.len(),
        "admin view loaded"
    );
    Ok(view)
}
