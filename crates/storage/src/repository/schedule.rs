use sqlx::PgPool;

use crate::dto::schedule::{ClassEntry, SessionEntry, TrainerScheduleResponse};
use crate::error::Result;

pub struct ScheduleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Everything a trainer is booked for: active PT sessions and group
    /// classes, each joined with its room. Rooms are optional, a session
    /// whose room was deleted still shows up.
    pub async fn for_trainer(&self, trainer_id: i32) -> Result<TrainerScheduleResponse> {
        let sessions = self.sessions_for_trainer(trainer_id).await?;
        let classes = self.classes_for_trainer(trainer_id).await?;

        Ok(TrainerScheduleResponse {
            trainer_id,
            sessions,
            classes,
        })
    }

    async fn sessions_for_trainer(&self, trainer_id: i32) -> Result<Vec<SessionEntry>> {
        let sessions = sqlx::query_as::<_, SessionEntry>(
            r#"
            SELECT
                s.session_id,
                s.date,
                s.start_time,
                s.end_time,
                m.first_name || ' ' || m.last_name AS member_name,
                r.name AS room_name
            FROM ptsession s
            LEFT JOIN member m ON s.member_id = m.member_id
            LEFT JOIN room r ON s.room_id = r.room_id
            WHERE s.trainer_id = $1 AND s.active
            ORDER BY s.date, s.start_time
            "#,
        )
        .bind(trainer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(sessions)
    }

    async fn classes_for_trainer(&self, trainer_id: i32) -> Result<Vec<ClassEntry>> {
        let classes = sqlx::query_as::<_, ClassEntry>(
            r#"
            SELECT
                c.class_id,
                c.name,
                c.capacity,
                c.schedule,
                r.name AS room_name
            FROM class c
            LEFT JOIN room r ON c.room_id = r.room_id
            WHERE c.trainer_id = $1
            ORDER BY c.schedule
            "#,
        )
        .bind(trainer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(classes)
    }
}
