//! Opening routes. The id travels in the query string (GET, DELETE) or the body (PUT).

use crate::handlers::{create_opening, delete_opening, get_opening, list_openings, openapi_json, update_opening};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const API_BASE: &str = "/api/v1";

pub fn opening_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/opening",
            get(get_opening)
                .post(create_opening)
                .put(update_opening)
                .delete(delete_opening),
        )
        .route("/openings", get(list_openings))
        .route("/docs/openapi.json", get(openapi_json))
        .with_state(state)
}
