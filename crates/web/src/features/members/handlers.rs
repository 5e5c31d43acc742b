use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::member::{AddMetricRequest, MemberProfileResponse, MetricSummary, UpdatePhoneRequest},
};
use utoipa::IntoParams;
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against first name, last name and email
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/members/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching members with goal and metric", body = Vec<MemberProfileResponse>),
        (status = 400, description = "Empty search text")
    ),
    tag = "members"
)]
pub async fn search_members(
    State(db): State<Database>,
    Query(query): Query<SearchQuery>,
) -> WebResult<Response> {
    let text = query.q.trim();
    if text.is_empty() {
        return Err(WebError::BadRequest("Search text cannot be empty".to_string()));
    }

    let matches = services::search_members(db.pool(), text).await?;

    Ok(Json(matches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member profile with current goal and latest metric", body = MemberProfileResponse),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn get_member_profile(
    State(db): State<Database>,
    Path(member_id): Path<i32>,
) -> WebResult<Response> {
    let profile = services::member_profile(db.pool(), member_id).await?;

    Ok(Json(profile).into_response())
}

#[utoipa::path(
    put,
    path = "/api/members/{id}/phone",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdatePhoneRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Phone number updated"),
        (status = 400, description = "Phone number is not 10 digits"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn update_phone(
    State(db): State<Database>,
    Path(member_id): Path<i32>,
    Json(payload): Json<UpdatePhoneRequest>,
) -> WebResult<Response> {
    payload.validate()?;

    let member = services::update_phone(db.pool(), member_id, &payload.phone_number).await?;

    Ok(Json(member).into_response())
}

#[utoipa::path(
    post,
    path = "/api/members/{id}/metrics",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = AddMetricRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Metric recorded", body = MetricSummary),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Member not found")
    ),
    tag = "members"
)]
pub async fn add_metric(
    State(db): State<Database>,
    Path(member_id): Path<i32>,
    Json(payload): Json<AddMetricRequest>,
) -> WebResult<Response> {
    payload.validate()?;

    let metric = services::add_metric(db.pool(), member_id, &payload).await?;

    Ok((StatusCode::CREATED, Json(MetricSummary::from(metric))).into_response())
}
