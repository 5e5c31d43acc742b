use sqlx::PgPool;
use storage::{
    dto::schedule::TrainerScheduleResponse,
    error::Result,
    repository::{schedule::ScheduleRepository, trainer::TrainerRepository},
};

/// A trainer's full schedule. Confirms the trainer exists first so an
/// unknown ID is a not-found rather than an empty schedule.
pub async fn trainer_schedule(pool: &PgPool, trainer_id: i32) -> Result<TrainerScheduleResponse> {
    TrainerRepository::new(pool).find_by_id(trainer_id).await?;

    let repo = ScheduleRepository::new(pool);
    repo.for_trainer(trainer_id).await
}
