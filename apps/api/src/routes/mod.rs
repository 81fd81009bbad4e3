pub mod health;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

/// GET /
/// Serves the static input form.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .with_state(state)
}
