use sqlx::PgPool;
use storage::{
    dto::trainer::CreateTrainerRequest, error::Result, models::Trainer,
    repository::trainer::TrainerRepository,
};

/// List all trainers
pub async fn list_trainers(pool: &PgPool) -> Result<Vec<Trainer>> {
    let repo = TrainerRepository::new(pool);
    repo.list().await
}

/// Get trainer by ID
pub async fn get_trainer(pool: &PgPool, trainer_id: i32) -> Result<Trainer> {
    let repo = TrainerRepository::new(pool);
    repo.find_by_id(trainer_id).await
}

/// Create a new trainer
pub async fn create_trainer(pool: &PgPool, request: &CreateTrainerRequest) -> Result<Trainer> {
    let repo = TrainerRepository::new(pool);
    repo.create(request).await
}
