use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_trainer_schedule;

pub fn routes() -> Router<Database> {
    Router::new().route("/trainers/:id/schedule", get(get_trainer_schedule))
}
