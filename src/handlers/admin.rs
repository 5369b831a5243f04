use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use super::{require_admin, today};
use crate::errors::AppError;
use crate::models::StatusFilter;
use crate::services::admin::{self, AdminOutcome};
use crate::services::projection::AdminSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    #[serde(default)]
    pub filter: StatusFilter,
}

// GET /api/admin/slots?filter=
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<AdminQuery>,
) -> Result<Json<AdminSnapshot>, AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let snapshot =
        admin::admin_snapshot(state.api.as_ref(), &state.notifier, query.filter, today()).await?;
    Ok(Json(snapshot))
}

#[derive(Debug, Deserialize)]
pub struct AcceptBody {
    pub address: Option<String>,
}

// POST /api/admin/appointments/:id/accept
pub async fn accept_appointment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<AdminQuery>,
    body: Option<Json<AcceptBody>>,
) -> Result<Json<AdminOutcome>, AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let address = body.and_then(|Json(b)| b.address);
    let outcome = admin::accept_appointment(
        state.api.as_ref(),
        &state.notifier,
        id,
        address.as_deref(),
        query.filter,
        today(),
    )
    .await?;
    Ok(Json(outcome))
}

// POST /api/admin/appointments/:id/reject
pub async fn reject_appointment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<AdminOutcome>, AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let outcome =
        admin::reject_appointment(state.api.as_ref(), &state.notifier, id, query.filter, today())
            .await?;
    Ok(Json(outcome))
}

// DELETE /api/admin/slots/:id
pub async fn remove_slot(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<AdminOutcome>, AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let outcome =
        admin::remove_slot(state.api.as_ref(), &state.notifier, id, query.filter, today()).await?;
    Ok(Json(outcome))
}

// PATCH /api/admin/slots/:id/availability
pub async fn toggle_availability(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<AdminQuery>,
) -> Result<Json<AdminOutcome>, AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let outcome = admin::toggle_availability(
        state.api.as_ref(),
        &state.notifier,
        id,
        query.filter,
        today(),
    )
    .await?;
    Ok(Json(outcome))
}
