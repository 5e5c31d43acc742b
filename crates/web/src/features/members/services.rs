use sqlx::PgPool;
use storage::{
    dto::member::{AddMetricRequest, MemberProfileResponse},
    error::Result,
    models::{HealthMetric, Member},
    repository::member::MemberRepository,
};

/// Fuzzy lookup by name or email, each hit with current goal and latest metric
pub async fn search_members(pool: &PgPool, text: &str) -> Result<Vec<MemberProfileResponse>> {
    let repo = MemberRepository::new(pool);
    repo.search(text).await
}

/// Member profile with current goal and latest metric
pub async fn member_profile(pool: &PgPool, member_id: i32) -> Result<MemberProfileResponse> {
    let repo = MemberRepository::new(pool);
    repo.profile(member_id).await
}

pub async fn update_phone(pool: &PgPool, member_id: i32, phone_number: &str) -> Result<Member> {
    let repo = MemberRepository::new(pool);
    repo.update_phone(member_id, phone_number).await
}

pub async fn add_metric(
    pool: &PgPool,
    member_id: i32,
    request: &AddMetricRequest,
) -> Result<HealthMetric> {
    let repo = MemberRepository::new(pool);
    repo.add_metric(member_id, &request.metric_type, request.value)
        .await
}
