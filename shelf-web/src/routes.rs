//! Page routes

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use shelf_core::router::BASE_PATH;
use tower_http::trace::TraceLayer;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let pages = Router::new()
        .route(BASE_PATH, get(handlers::book_list))
        .route(&format!("{BASE_PATH}/"), get(handlers::book_list))
        .route(&format!("{BASE_PATH}/retry"), post(handlers::retry_list))
        .route(&format!("{BASE_PATH}/book/:id"), get(handlers::book_detail))
        .route(
            &format!("{BASE_PATH}/book/:id/retry"),
            post(handlers::retry_detail),
        )
        .route(
            &format!("{BASE_PATH}/book/:id/chapters/:chapter_id"),
            post(handlers::toggle_chapter),
        )
        .route(&format!("{BASE_PATH}/theme"), post(handlers::toggle_theme));

    pages
        .route("/health", get(handlers::health_check))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
