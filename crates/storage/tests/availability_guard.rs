//! Repository-level checks for the availability guard. These need a real
//! Postgres; they are skipped when DATABASE_URL is not set.

use chrono::{NaiveDate, NaiveTime};
use storage::Database;
use storage::error::StorageError;
use storage::models::SlotRange;
use storage::repository::availability::AvailabilityRepository;

async fn test_db() -> Option<Database> {
    let url = std::env::var("DATABASE_URL").ok()?;

    let db = Database::new(&url).await.expect("failed to connect");
    db.run_migrations().await.expect("failed to migrate");

    Some(db)
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn range(start: (u32, u32), end: (u32, u32)) -> SlotRange {
    SlotRange::new(t(start.0, start.1), t(end.0, end.1)).unwrap()
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
}

/// Insert a throwaway trainer with a unique email so parallel tests and
/// repeated runs never collide.
async fn create_trainer(db: &Database, tag: &str) -> i32 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    sqlx::query_scalar(
        r#"
        INSERT INTO trainer (first_name, last_name, email, speciality)
        VALUES ($1, $2, $3, $4)
        RETURNING trainer_id
        "#,
    )
    .bind("Test")
    .bind("Trainer")
    .bind(format!("{tag}.{nanos}@example.com"))
    .bind("General")
    .fetch_one(db.pool())
    .await
    .expect("failed to insert trainer")
}

#[tokio::test]
async fn add_slot_fails_for_nonexistent_trainer() {
    let Some(db) = test_db().await else { return };

    let repo = AvailabilityRepository::new(db.pool());
    let result = repo.add_slot(-1, day(), range((9, 0), (10, 0))).await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn add_slot_rejects_crossing_active_slot() {
    let Some(db) = test_db().await else { return };

    let trainer_id = create_trainer(&db, "crossing").await;
    let repo = AvailabilityRepository::new(db.pool());

    repo.add_slot(trainer_id, day(), range((9, 0), (11, 0)))
        .await
        .expect("first slot should insert");

    let result = repo.add_slot(trainer_id, day(), range((10, 0), (12, 0))).await;

    assert!(matches!(result, Err(StorageError::SlotOverlap)));
}

#[tokio::test]
async fn add_slot_accepts_back_to_back_slot() {
    let Some(db) = test_db().await else { return };

    let trainer_id = create_trainer(&db, "adjacent").await;
    let repo = AvailabilityRepository::new(db.pool());

    repo.add_slot(trainer_id, day(), range((9, 0), (10, 0)))
        .await
        .expect("first slot should insert");

    // Half-open intervals: sharing the 10:00 boundary is not a conflict
    let slot = repo
        .add_slot(trainer_id, day(), range((10, 0), (11, 0)))
        .await
        .expect("adjacent slot should insert");

    assert!(slot.active);
    assert_eq!(slot.trainer_id, Some(trainer_id));
}

#[tokio::test]
async fn deactivated_slot_no_longer_blocks() {
    let Some(db) = test_db().await else { return };

    let trainer_id = create_trainer(&db, "deactivate").await;
    let repo = AvailabilityRepository::new(db.pool());

    let slot = repo
        .add_slot(trainer_id, day(), range((9, 0), (11, 0)))
        .await
        .expect("first slot should insert");

    repo.deactivate(slot.available_id)
        .await
        .expect("deactivate should succeed");

    repo.add_slot(trainer_id, day(), range((10, 0), (12, 0)))
        .await
        .expect("slot over a retired window should insert");

    let active = repo
        .list_for_trainer(trainer_id, day())
        .await
        .expect("listing should succeed");

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].start_time, t(10, 0));
}
