use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{add_metric, get_member_profile, search_members, update_phone};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/members/:id/phone", put(update_phone))
        .route("/members/:id/metrics", post(add_metric))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/members/search", get(search_members))
        .route("/members/:id", get(get_member_profile))
        .merge(protected)
}
