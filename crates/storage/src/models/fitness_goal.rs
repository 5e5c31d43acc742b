use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FitnessGoal {
    pub goal_id: i32,
    pub member_id: Option<i32>,
    pub goal_type: String,
    pub value: Option<i32>,
    pub deadline: NaiveDate,
}
