//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/query", post(ops::query))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
