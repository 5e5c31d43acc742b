use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Trainer {
    pub trainer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub speciality: String,
}
