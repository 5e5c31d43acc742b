use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HealthMetric {
    pub metric_id: i32,
    pub member_id: Option<i32>,
    pub metric_type: String,
    pub value: Option<i32>,
    pub recorded_at: NaiveDateTime,
}
