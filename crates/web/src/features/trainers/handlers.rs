use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::trainer::{CreateTrainerRequest, TrainerResponse},
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/trainers",
    responses(
        (status = 200, description = "List all trainers successfully", body = Vec<TrainerResponse>)
    ),
    tag = "trainers"
)]
pub async fn list_trainers(State(db): State<Database>) -> WebResult<Response> {
    let trainers = services::list_trainers(db.pool()).await?;

    let response: Vec<TrainerResponse> = trainers.into_iter().map(TrainerResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/trainers/{id}",
    params(
        ("id" = i32, Path, description = "Trainer ID")
    ),
    responses(
        (status = 200, description = "Trainer found", body = TrainerResponse),
        (status = 404, description = "Trainer not found")
    ),
    tag = "trainers"
)]
pub async fn get_trainer(
    State(db): State<Database>,
    Path(trainer_id): Path<i32>,
) -> WebResult<Response> {
    let trainer = services::get_trainer(db.pool(), trainer_id).await?;

    Ok(Json(TrainerResponse::from(trainer)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/trainers",
    request_body = CreateTrainerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Trainer created successfully", body = TrainerResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Email already in use")
    ),
    tag = "trainers"
)]
pub async fn create_trainer(
    State(db): State<Database>,
    Json(payload): Json<CreateTrainerRequest>,
) -> WebResult<Response> {
    payload.validate()?;

    let trainer = services::create_trainer(db.pool(), &payload).await?;

    Ok((StatusCode::CREATED, Json(TrainerResponse::from(trainer))).into_response())
}
