// Route table for the browsing site
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    grid_fragment, health_check, index_page, list_universities, university_page,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/index.html", get(index_page))
        .route("/fragments/grid", get(grid_fragment))
        .route("/api/universities", get(list_universities))
        .route("/universities/:page", get(university_page))
        .route("/healthz", get(health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
