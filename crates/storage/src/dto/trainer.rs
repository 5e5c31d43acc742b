use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Trainer;

/// Request payload for creating a new trainer
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "First name must be between 1 and 255 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Last name must be between 1 and 255 characters"
    ))]
    pub last_name: String,

    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Speciality is required"))]
    pub speciality: String,
}

/// Response containing basic trainer information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainerResponse {
    pub trainer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub speciality: String,
}

impl From<Trainer> for TrainerResponse {
    fn from(trainer: Trainer) -> Self {
        Self {
            trainer_id: trainer.trainer_id,
            first_name: trainer.first_name,
            last_name: trainer.last_name,
            email: trainer.email,
            speciality: trainer.speciality,
        }
    }
}
