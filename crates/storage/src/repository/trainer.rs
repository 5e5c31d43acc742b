use sqlx::PgPool;

use crate::dto::trainer::CreateTrainerRequest;
use crate::error::{Result, StorageError};
use crate::models::Trainer;

pub struct TrainerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all trainers
    pub async fn list(&self) -> Result<Vec<Trainer>> {
        let trainers = sqlx::query_as::<_, Trainer>(
            r#"
            SELECT trainer_id, first_name, last_name, email, speciality
            FROM trainer
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(trainers)
    }

    /// Find trainer by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Trainer> {
        let trainer = sqlx::query_as::<_, Trainer>(
            r#"
            SELECT trainer_id, first_name, last_name, email, speciality
            FROM trainer
            WHERE trainer_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(trainer)
    }

    pub async fn create(&self, req: &CreateTrainerRequest) -> Result<Trainer> {
        let trainer = sqlx::query_as::<_, Trainer>(
            r#"
            INSERT INTO trainer (first_name, last_name, email, speciality)
            VALUES ($1, $2, $3, $4)
            RETURNING trainer_id, first_name, last_name, email, speciality
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.speciality)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "A trainer with this email already exists".to_string(),
                )
            } else {
                e
            }
        })?;

        Ok(trainer)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trainer")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
