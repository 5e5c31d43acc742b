use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PtSession {
    pub session_id: i32,
    pub member_id: Option<i32>,
    pub trainer_id: Option<i32>,
    pub room_id: Option<i32>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub active: bool,
}
