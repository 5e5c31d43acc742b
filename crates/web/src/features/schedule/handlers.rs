use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::schedule::TrainerScheduleResponse};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/trainers/{id}/schedule",
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "PT sessions and classes with room info", body = TrainerScheduleResponse),
        (status = 404, description = "Trainer not found")
    ),
    tag = "schedule"
)]
pub async fn get_trainer_schedule(
    State(db): State<Database>,
    Path(trainer_id): Path<i32>,
) -> WebResult<Response> {
    let schedule = services::trainer_schedule(db.pool(), trainer_id).await?;

    Ok(Json(schedule).into_response())
}
