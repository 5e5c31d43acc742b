use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{Availability, SlotRange};

pub struct AvailabilityRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AvailabilityRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new availability slot for a trainer, preventing overlaps.
    ///
    /// Fails with `NotFound` if the trainer does not exist, and with
    /// `SlotOverlap` if any active slot on the same date intersects the
    /// candidate range. Inactive slots do not participate in the check.
    pub async fn add_slot(
        &self,
        trainer_id: i32,
        date: NaiveDate,
        range: SlotRange,
    ) -> Result<Availability> {
        let trainer_exists: Option<i32> =
            sqlx::query_scalar("SELECT trainer_id FROM trainer WHERE trainer_id = $1")
                .bind(trainer_id)
                .fetch_optional(self.pool)
                .await?;

        if trainer_exists.is_none() {
            return Err(StorageError::NotFound);
        }

        // New slot [start, end) conflicts if start < existing.end AND end > existing.start
        let conflict: Option<i32> = sqlx::query_scalar(
            r#"
            SELECT available_id
            FROM availability
            WHERE trainer_id = $1
              AND date = $2
              AND active
              AND $3 < end_time
              AND $4 > start_time
            LIMIT 1
            "#,
        )
        .bind(trainer_id)
        .bind(date)
        .bind(range.start())
        .bind(range.end())
        .fetch_optional(self.pool)
        .await?;

        if conflict.is_some() {
            return Err(StorageError::SlotOverlap);
        }

        let slot = sqlx::query_as::<_, Availability>(
            r#"
            INSERT INTO availability (trainer_id, date, start_time, end_time, active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING available_id, trainer_id, date, start_time, end_time, active
            "#,
        )
        .bind(trainer_id)
        .bind(date)
        .bind(range.start())
        .bind(range.end())
        .fetch_one(self.pool)
        .await?;

        Ok(slot)
    }

    /// List a trainer's active slots for one date, earliest first
    pub async fn list_for_trainer(
        &self,
        trainer_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<Availability>> {
        let slots = sqlx::query_as::<_, Availability>(
            r#"
            SELECT available_id, trainer_id, date, start_time, end_time, active
            FROM availability
            WHERE trainer_id = $1 AND date = $2 AND active
            ORDER BY start_time
            "#,
        )
        .bind(trainer_id)
        .bind(date)
        .fetch_all(self.pool)
        .await?;

        Ok(slots)
    }

    /// Retire a slot. Retired slots are kept for history but no longer
    /// block new bookings.
    pub async fn deactivate(&self, available_id: i32) -> Result<()> {
        let result = sqlx::query(
            "UPDATE availability SET active = FALSE WHERE available_id = $1 AND active",
        )
        .bind(available_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
