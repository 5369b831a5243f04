use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use super::require_admin;
use crate::errors::AppError;
use crate::models::Slot;
use crate::services::generator::{self, GenerateRequest, Generated, Preview};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

// GET /api/generator/slots?date=
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DateQuery>,
) -> Result<Json<Vec<Slot>>, AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let slots =
        generator::load_generator_slots(state.api.as_ref(), &state.notifier, query.date).await?;
    Ok(Json(slots))
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    pub start: String,
    pub end: String,
}

// GET /api/generator/preview?start=HH:MM&end=HH:MM
pub async fn preview(Query(query): Query<PreviewQuery>) -> Result<Json<Preview>, AppError> {
    let start = generator::parse_clock(&query.start)?;
    let end = generator::parse_clock(&query.end)?;
    Ok(Json(Preview::new(start, end)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

// POST /api/generator/slots
pub async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<GenerateBody>,
) -> Result<(StatusCode, Json<Generated>), AppError> {
    require_admin(&headers, &state.config.admin_token)?;

    let request = GenerateRequest {
        date: body.date,
        start: generator::parse_clock(&body.start_time)?,
        end: generator::parse_clock(&body.end_time)?,
    };
    let generated = generator::generate_slots(state.api.as_ref(), &state.notifier, request).await?;
    Ok((StatusCode::CREATED, Json(generated)))
}
