use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::current_user;
use crate::errors::AppError;
use crate::models::Slot;
use crate::services::booking::{self, BookingOutcome, Cancelled, UserAppointments};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

// GET /api/booking/slots?date=YYYY-MM-DD
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<Slot>>, AppError> {
    let slots = booking::load_booking_slots(state.api.as_ref(), &state.notifier, query.date).await?;
    Ok(Json(slots))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub slot_id: i64,
    #[serde(default)]
    pub notes: String,
}

// POST /api/booking
pub async fn submit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<BookingRequest>,
) -> Result<Response, AppError> {
    let user = current_user(&headers);
    let outcome = booking::submit_booking(
        state.api.as_ref(),
        &state.notifier,
        &state.bookings,
        user.as_ref(),
        req.slot_id,
        &req.notes,
    )
    .await?;

    let status = match &outcome {
        BookingOutcome::Submitted { .. } => StatusCode::CREATED,
        BookingOutcome::MissingUser { .. } => StatusCode::UNAUTHORIZED,
        BookingOutcome::InFlight { .. } => StatusCode::CONFLICT,
    };
    Ok((status, Json(outcome)).into_response())
}

// GET /api/me/appointments
pub async fn my_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<UserAppointments>, AppError> {
    let user = current_user(&headers).ok_or(AppError::Unauthorized)?;
    let list = booking::load_user(state.api.as_ref(), &state.notifier, &user).await?;
    Ok(Json(list))
}

// DELETE /api/me/appointments/:id
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<Cancelled>, AppError> {
    let user = current_user(&headers).ok_or(AppError::Unauthorized)?;
    let cancelled =
        booking::cancel_appointment(state.api.as_ref(), &state.notifier, &user, id).await?;
    Ok(Json(cancelled))
}
