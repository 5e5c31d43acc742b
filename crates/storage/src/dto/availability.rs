use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Availability;

/// Request payload for adding an availability slot
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSlotRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Response containing a persisted availability slot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlotResponse {
    pub available_id: i32,
    pub trainer_id: Option<i32>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub active: bool,
}

impl From<Availability> for SlotResponse {
    fn from(slot: Availability) -> Self {
        Self {
            available_id: slot.available_id,
            trainer_id: slot.trainer_id,
            date: slot.date,
            start_time: slot.start_time,
            end_time: slot.end_time,
            active: slot.active,
        }
    }
}
