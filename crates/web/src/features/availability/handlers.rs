use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::Deserialize;
use storage::{
    Database,
    dto::availability::{CreateSlotRequest, SlotResponse},
};
use utoipa::IntoParams;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DayQuery {
    /// Date to list slots for (YYYY-MM-DD)
    pub date: NaiveDate,
}

#[utoipa::path(
    post,
    path = "/api/trainers/{id}/availability",
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    request_body = CreateSlotRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Slot created", body = SlotResponse),
        (status = 400, description = "End time not after start time"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Trainer not found"),
        (status = 409, description = "Slot overlaps an existing active slot")
    ),
    tag = "availability"
)]
pub async fn create_slot(
    State(db): State<Database>,
    Path(trainer_id): Path<i32>,
    Json(payload): Json<CreateSlotRequest>,
) -> WebResult<Response> {
    payload.validate()?;

    let slot = services::add_slot(db.pool(), trainer_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(SlotResponse::from(slot))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/trainers/{id}/availability",
    params(
        ("id" = i32, Path, description = "Trainer ID"),
        DayQuery
    ),
    responses(
        (status = 200, description = "Active slots for the date", body = Vec<SlotResponse>)
    ),
    tag = "availability"
)]
pub async fn list_slots(
    State(db): State<Database>,
    Path(trainer_id): Path<i32>,
    Query(query): Query<DayQuery>,
) -> WebResult<Response> {
    let slots = services::list_slots(db.pool(), trainer_id, query.date).await?;

    let response: Vec<SlotResponse> = slots.into_iter().map(SlotResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/availability/{id}",
    params(
        ("id" = i32, Path, description = "Availability slot ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Slot deactivated"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No active slot with this ID")
    ),
    tag = "availability"
)]
pub async fn deactivate_slot(
    State(db): State<Database>,
    Path(available_id): Path<i32>,
) -> WebResult<Response> {
    services::deactivate_slot(db.pool(), available_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
