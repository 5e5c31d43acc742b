use sqlx::PgPool;

use crate::dto::member::{MemberProfileResponse, NewMember};
use crate::error::{Result, StorageError};
use crate::models::{FitnessGoal, HealthMetric, Member};

const MEMBER_COLUMNS: &str =
    "member_id, first_name, last_name, email, date_of_birth, gender, phone_number";

pub struct MemberRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MemberRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Case-insensitive substring search over first name, last name and
    /// email. Each hit is decorated with the member's current goal and
    /// latest metric.
    pub async fn search(&self, text: &str) -> Result<Vec<MemberProfileResponse>> {
        let pattern = format!("%{}%", text);

        let members = sqlx::query_as::<_, Member>(&format!(
            r#"
            SELECT {MEMBER_COLUMNS}
            FROM member
            WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1
            ORDER BY last_name, first_name
            "#
        ))
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        let mut results = Vec::with_capacity(members.len());
        for member in members {
            let goal = self.current_goal(member.member_id).await?;
            let metric = self.latest_metric(member.member_id).await?;
            results.push(MemberProfileResponse::from_parts(member, goal, metric));
        }

        Ok(results)
    }

    /// Find member by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member WHERE member_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    /// Find member by exact email
    pub async fn find_by_email(&self, email: &str) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM member WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    /// Member profile: basic info plus current goal and latest metric
    pub async fn profile(&self, id: i32) -> Result<MemberProfileResponse> {
        let member = self.find_by_id(id).await?;
        let goal = self.current_goal(member.member_id).await?;
        let metric = self.latest_metric(member.member_id).await?;

        Ok(MemberProfileResponse::from_parts(member, goal, metric))
    }

    pub async fn update_phone(&self, id: i32, phone_number: &str) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            UPDATE member
            SET phone_number = $2
            WHERE member_id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(phone_number)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(member)
    }

    /// Record a new health metric for a member, stamped server-side
    pub async fn add_metric(
        &self,
        member_id: i32,
        metric_type: &str,
        value: i32,
    ) -> Result<HealthMetric> {
        // Existence check first so a missing member is a 404, not an FK error
        self.find_by_id(member_id).await?;

        let metric = sqlx::query_as::<_, HealthMetric>(
            r#"
            INSERT INTO healthmetric (member_id, metric_type, value, recorded_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING metric_id, member_id, metric_type, value, recorded_at
            "#,
        )
        .bind(member_id)
        .bind(metric_type)
        .bind(value)
        .fetch_one(self.pool)
        .await?;

        Ok(metric)
    }

    pub async fn create(&self, member: &NewMember) -> Result<Member> {
        let member = sqlx::query_as::<_, Member>(&format!(
            r#"
            INSERT INTO member (first_name, last_name, email, date_of_birth, gender, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(member.date_of_birth)
        .bind(&member.gender)
        .bind(&member.phone_number)
        .fetch_one(self.pool)
        .await
        .map_err(StorageError::from)
        .map_err(|e| {
            if e.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "A member with this email already exists".to_string(),
                )
            } else {
                e
            }
        })?;

        Ok(member)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM member")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// The goal with the earliest deadline counts as "current"
    async fn current_goal(&self, member_id: i32) -> Result<Option<FitnessGoal>> {
        let goal = sqlx::query_as::<_, FitnessGoal>(
            r#"
            SELECT goal_id, member_id, goal_type, value, deadline
            FROM fitnessgoal
            WHERE member_id = $1
            ORDER BY deadline ASC
            LIMIT 1
            "#,
        )
        .bind(member_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(goal)
    }

    async fn latest_metric(&self, member_id: i32) -> Result<Option<HealthMetric>> {
        let metric = sqlx::query_as::<_, HealthMetric>(
            r#"
            SELECT metric_id, member_id, metric_type, value, recorded_at
            FROM healthmetric
            WHERE member_id = $1
            ORDER BY recorded_at DESC
            LIMIT 1
            "#,
        )
        .bind(member_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(metric)
    }
}
