use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{
    middleware::{catch_panic_layer, cors_layer},
    state::AppState,
};

use super::todos;

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().nest(API_PREFIX, todos::router(state))
}

/// The routes wrapped in every cross-cutting layer the server runs with.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(catch_panic_layer())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
