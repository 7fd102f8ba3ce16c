//! Router builders. `app` assembles the full service; the pieces are public for embedding.

mod common;
mod opening;
pub use common::{common_routes, common_routes_with_ready};
pub use opening::{opening_routes, API_BASE};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application: common routes at the root, opening routes under `/api/v1`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .nest(API_BASE, opening_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
