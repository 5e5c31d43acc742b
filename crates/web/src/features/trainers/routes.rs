use axum::{
    Router, middleware,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_trainer, get_trainer, list_trainers};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/trainers", post(create_trainer))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/trainers", get(list_trainers))
        .route("/trainers/:id", get(get_trainer))
        .merge(protected)
}
