use std::collections::{BTreeMap, HashSet};
use std::sync::{Mutex, PoisonError};

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{Appointment, AppointmentCreate, Slot, UserInfo};
use crate::services::api::AppointmentApi;
use crate::services::notifications::Notifier;

pub const MISSING_USER_WARNING: &str = "You must be signed in to request an appointment.";
pub const IN_FLIGHT_WARNING: &str = "A request for this user is already being sent.";

/// Users with a booking request on the wire. Stands in for the disabled
/// submit button: one request per user at a time.
#[derive(Default)]
pub struct InFlight {
    users: Mutex<HashSet<String>>,
}

impl InFlight {
    pub fn begin(&self, user_id: &str) -> Option<InFlightTicket<'_>> {
        let mut users = self.users.lock().unwrap_or_else(PoisonError::into_inner);
        if !users.insert(user_id.to_string()) {
            return None;
        }
        Some(InFlightTicket {
            owner: self,
            user_id: user_id.to_string(),
        })
    }

    pub fn is_busy(&self, user_id: &str) -> bool {
        self.users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(user_id)
    }
}

/// Releases the user's slot in `InFlight` when dropped.
pub struct InFlightTicket<'a> {
    owner: &'a InFlight,
    user_id: String,
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        self.owner
            .users
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.user_id);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BookingOutcome {
    Submitted { appointment: Appointment },
    /// Nothing was sent: no signed-in user.
    MissingUser { message: String },
    /// Nothing was sent: the same user already has a request in flight.
    InFlight { message: String },
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAppointments {
    pub appointments: Vec<Appointment>,
    pub slot_map: BTreeMap<i64, Slot>,
}

/// A cancellation the backend applied. `list` is `None` when the reload
/// after it failed.
#[derive(Debug, Clone, Serialize)]
pub struct Cancelled {
    pub message: String,
    pub list: Option<UserAppointments>,
}

pub fn slots_on(slots: Vec<Slot>, day: NaiveDate) -> Vec<Slot> {
    slots.into_iter().filter(|s| s.is_on(day)).collect()
}

/// All slots of `day`, taken ones included; the form greys those out.
pub async fn load_booking_slots(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    day: NaiveDate,
) -> Result<Vec<Slot>, AppError> {
    let all = notifier.report(api.list_slots().await)?;
    Ok(slots_on(all, day))
}

pub async fn submit_booking(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    in_flight: &InFlight,
    user: Option<&UserInfo>,
    slot_id: i64,
    notes: &str,
) -> Result<BookingOutcome, AppError> {
    let Some(user) = user.filter(|u| !u.id.is_empty()) else {
        tracing::warn!(slot_id, "booking attempted without a signed-in user");
        notifier.warn(MISSING_USER_WARNING);
        return Ok(BookingOutcome::MissingUser {
            message: MISSING_USER_WARNING.to_string(),
        });
    };

    let Some(_ticket) = in_flight.begin(&user.id) else {
        tracing::debug!(user_id = %user.id, slot_id, "duplicate booking submit ignored");
        return Ok(BookingOutcome::InFlight {
            message: IN_FLIGHT_WARNING.to_string(),
        });
    };

    let body = AppointmentCreate::request(&user.id, slot_id, notes);
    let appointment = notifier.report(api.create_appointment(&body).await)?;

    tracing::info!(user_id = %user.id, slot_id, appointment_id = appointment.id, "appointment requested");
    notifier.success("Appointment requested.");
    Ok(BookingOutcome::Submitted { appointment })
}

/// The user's appointments, plus every slot by id so each appointment can
/// show its date.
pub async fn load_user(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    user: &UserInfo,
) -> Result<UserAppointments, AppError> {
    let (appointments, slots) = notifier.report(tokio::try_join!(
        api.appointments_by_user(&user.id),
        api.list_slots(),
    ))?;

    Ok(UserAppointments {
        appointments,
        slot_map: slots.into_iter().map(|s| (s.id, s)).collect(),
    })
}

/// Deletes the appointment, which frees its slot upstream, then reloads the
/// user's list once.
pub async fn cancel_appointment(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    user: &UserInfo,
    id: i64,
) -> Result<Cancelled, AppError> {
    let message = notifier.report(api.delete_appointment(id).await)?;
    tracing::info!(user_id = %user.id, appointment_id = id, "appointment cancelled");
    notifier.success(message.clone());

    let list = load_user(api, notifier, user).await.ok();
    Ok(Cancelled { message, list })
}
