use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A PT session on a trainer's schedule, with its room resolved by name.
/// `room_name` is None when the room was deleted or never assigned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SessionEntry {
    pub session_id: i32,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub member_name: Option<String>,
    pub room_name: Option<String>,
}

/// A group class on a trainer's schedule
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassEntry {
    pub class_id: i32,
    pub name: String,
    pub capacity: i32,
    pub schedule: NaiveDateTime,
    pub room_name: Option<String>,
}

/// Everything a trainer is booked for: PT sessions and group classes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainerScheduleResponse {
    pub trainer_id: i32,
    pub sessions: Vec<SessionEntry>,
    pub classes: Vec<ClassEntry>,
}
