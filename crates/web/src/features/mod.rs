pub mod availability;
pub mod members;
pub mod schedule;
pub mod trainers;
