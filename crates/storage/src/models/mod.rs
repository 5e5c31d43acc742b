mod availability;
mod fitness_class;
mod fitness_goal;
mod health_metric;
mod member;
mod pt_session;
mod room;
mod slot_range;
mod trainer;

pub use availability::Availability;
pub use fitness_class::FitnessClass;
pub use fitness_goal::FitnessGoal;
pub use health_metric::HealthMetric;
pub use member::Member;
pub use pt_session::PtSession;
pub use room::Room;
pub use slot_range::SlotRange;
pub use trainer::Trainer;
