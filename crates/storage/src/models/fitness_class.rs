use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FitnessClass {
    pub class_id: i32,
    pub trainer_id: Option<i32>,
    pub room_id: Option<i32>,
    pub name: String,
    pub capacity: i32,
    pub schedule: NaiveDateTime,
}
