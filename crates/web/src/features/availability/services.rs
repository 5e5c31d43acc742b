use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::availability::CreateSlotRequest,
    error::Result,
    models::{Availability, SlotRange},
    repository::availability::AvailabilityRepository,
};

/// Validate the requested range and insert it if it does not collide with
/// an existing active slot
pub async fn add_slot(
    pool: &PgPool,
    trainer_id: i32,
    request: &CreateSlotRequest,
) -> Result<Availability> {
    let range = SlotRange::new(request.start_time, request.end_time)?;

    let repo = AvailabilityRepository::new(pool);
    repo.add_slot(trainer_id, request.date, range).await
}

/// List a trainer's active slots for one date
pub async fn list_slots(
    pool: &PgPool,
    trainer_id: i32,
    date: NaiveDate,
) -> Result<Vec<Availability>> {
    let repo = AvailabilityRepository::new(pool);
    repo.list_for_trainer(trainer_id, date).await
}

/// Retire a slot so it no longer blocks new bookings
pub async fn deactivate_slot(pool: &PgPool, available_id: i32) -> Result<()> {
    let repo = AvailabilityRepository::new(pool);
    repo.deactivate(available_id).await
}
