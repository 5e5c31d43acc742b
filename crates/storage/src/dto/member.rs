use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{FitnessGoal, HealthMetric, Member};

/// The goal with the earliest deadline, shown as the member's current goal
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalSummary {
    pub goal_id: i32,
    pub goal_type: String,
    pub value: Option<i32>,
    pub deadline: NaiveDate,
}

/// The most recently recorded health metric
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MetricSummary {
    pub metric_id: i32,
    pub metric_type: String,
    pub value: Option<i32>,
    pub recorded_at: NaiveDateTime,
}

/// Member profile: basic info plus current goal and latest metric
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MemberProfileResponse {
    pub member_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub phone_number: String,
    pub current_goal: Option<GoalSummary>,
    pub latest_metric: Option<MetricSummary>,
}

impl MemberProfileResponse {
    pub fn from_parts(
        member: Member,
        goal: Option<FitnessGoal>,
        metric: Option<HealthMetric>,
    ) -> Self {
        Self {
            member_id: member.member_id,
            first_name: member.first_name,
            last_name: member.last_name,
            email: member.email,
            date_of_birth: member.date_of_birth,
            gender: member.gender,
            phone_number: member.phone_number,
            current_goal: goal.map(GoalSummary::from),
            latest_metric: metric.map(MetricSummary::from),
        }
    }
}

impl From<FitnessGoal> for GoalSummary {
    fn from(goal: FitnessGoal) -> Self {
        Self {
            goal_id: goal.goal_id,
            goal_type: goal.goal_type,
            value: goal.value,
            deadline: goal.deadline,
        }
    }
}

impl From<HealthMetric> for MetricSummary {
    fn from(metric: HealthMetric) -> Self {
        Self {
            metric_id: metric.metric_id,
            metric_type: metric.metric_type,
            value: metric.value,
            recorded_at: metric.recorded_at,
        }
    }
}

/// Request payload for updating a member's phone number
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePhoneRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

/// Request payload for recording a new health metric
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddMetricRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Metric type must be between 1 and 255 characters"
    ))]
    pub metric_type: String,

    pub value: i32,
}

/// Fields required to register a member (used by the seed tooling)
#[derive(Debug, Clone)]
pub struct NewMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub phone_number: String,
}

// Validation helper
fn validate_phone_number(phone: &str) -> Result<(), validator::ValidationError> {
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_phone_number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn phone_request(phone: &str) -> UpdatePhoneRequest {
        UpdatePhoneRequest {
            phone_number: phone.to_string(),
        }
    }

    #[test]
    fn test_valid_phone_number() {
        assert!(phone_request("0412345678").validate().is_ok());
    }

    #[test]
    fn test_phone_number_too_short() {
        assert!(phone_request("12345").validate().is_err());
    }

    #[test]
    fn test_phone_number_too_long() {
        assert!(phone_request("12345678901").validate().is_err());
    }

    #[test]
    fn test_phone_number_with_letters() {
        assert!(phone_request("04123456ab").validate().is_err());
    }

    #[test]
    fn test_phone_number_with_separators() {
        assert!(phone_request("04-1234-56").validate().is_err());
    }

    #[test]
    fn test_empty_metric_type_rejected() {
        let req = AddMetricRequest {
            metric_type: String::new(),
            value: 72,
        };
        assert!(req.validate().is_err());
    }
}
