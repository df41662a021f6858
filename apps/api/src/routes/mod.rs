pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate;
use crate::render::handlers::handle_render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/generate-resume", post(handle_generate))
        .route("/api/render-resume", post(handle_render))
        .with_state(state)
}
