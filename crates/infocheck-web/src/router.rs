//! Axum router — maps all URL paths to handlers.

use axum::{
    response::Redirect,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    api::api_search,
    home::home_page,
    inference::{inference_page, inference_submit},
    search::{search_page, search_submit},
};
use crate::state::SharedState;

/// Build and return the full Axum router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // Pages
        .route("/", get(|| async { Redirect::permanent("/home") }))
        .route("/home", get(home_page))
        .route("/search", get(search_page).post(search_submit))
        .route("/inference", get(inference_page).post(inference_submit))

        // API endpoints
        .route("/api/search", get(api_search))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
