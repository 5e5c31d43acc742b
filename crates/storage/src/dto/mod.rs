pub mod availability;
pub mod member;
pub mod schedule;
pub mod trainer;
