use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{AppointmentStatus, StatusFilter};
use crate::services::api::AppointmentApi;
use crate::services::notifications::Notifier;
use crate::services::projection::{load_admin, AdminSnapshot};

// Every mutation here is followed by exactly one reload of the admin view.
// Transition legality is left to the backend.

/// A mutation the backend applied. `snapshot` is `None` when the reload
/// after it failed; that failure was already reported as a notice.
#[derive(Debug, Clone, Serialize)]
pub struct AdminOutcome {
    pub message: String,
    pub snapshot: Option<AdminSnapshot>,
}

pub async fn admin_snapshot(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    filter: StatusFilter,
    today: NaiveDate,
) -> Result<AdminSnapshot, AppError> {
    let view = notifier.report(load_admin(api, filter).await)?;
    Ok(view.snapshot(today))
}

async fn applied(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    message: String,
    filter: StatusFilter,
    today: NaiveDate,
) -> AdminOutcome {
    notifier.success(message.clone());
    let snapshot = admin_snapshot(api, notifier, filter, today).await.ok();
    AdminOutcome { message, snapshot }
}

pub async fn accept_appointment(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    id: i64,
    address: Option<&str>,
    filter: StatusFilter,
    today: NaiveDate,
) -> Result<AdminOutcome, AppError> {
    let msg = notifier.report(
        api.update_appointment_status(id, AppointmentStatus::Aceptado, address)
            .await,
    )?;
    tracing::info!(appointment_id = id, "appointment accepted");
    Ok(applied(api, notifier, msg, filter, today).await)
}

/// Rejects a pending request, or cancels an accepted one.
pub async fn reject_appointment(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    id: i64,
    filter: StatusFilter,
    today: NaiveDate,
) -> Result<AdminOutcome, AppError> {
    let msg = notifier.report(
        api.update_appointment_status(id, AppointmentStatus::Rechazado, None)
            .await,
    )?;
    tracing::info!(appointment_id = id, "appointment rejected");
    Ok(applied(api, notifier, msg, filter, today).await)
}

pub async fn remove_slot(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    id: i64,
    filter: StatusFilter,
    today: NaiveDate,
) -> Result<AdminOutcome, AppError> {
    let msg = notifier.report(api.delete_slot(id).await)?;
    tracing::info!(slot_id = id, "slot removed");
    Ok(applied(api, notifier, msg, filter, today).await)
}

pub async fn toggle_availability(
    api: &dyn AppointmentApi,
    notifier: &Notifier,
    id: i64,
    filter: StatusFilter,
    today: NaiveDate,
) -> Result<AdminOutcome, AppError> {
    let msg = notifier.report(api.toggle_availability(id).await)?;
    tracing::info!(slot_id = id, "slot availability toggled");
    Ok(applied(api, notifier, msg, filter, today).await)
}
