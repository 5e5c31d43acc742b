use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_slot, deactivate_slot, list_slots};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/trainers/:id/availability", post(create_slot))
        .route("/availability/:id", delete(deactivate_slot))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/trainers/:id/availability", get(list_slots))
        .merge(protected)
}
