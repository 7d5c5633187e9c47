//! Book list and detail screens

use crate::state::{AppState, Page};
use axum::{
    extract::{Path, State},
    http::Uri,
    response::Redirect,
};
use shelf_core::router::{Resolution, Route};

/// Show the book list
pub async fn book_list(State(state): State<AppState>) -> Page {
    state.show(&Route::List).await
}

/// Show one book
pub async fn book_detail(State(state): State<AppState>, Path(id): Path<String>) -> Page {
    state.show(&Route::detail(id)).await
}

/// Re-fetch the book list
pub async fn retry_list(State(state): State<AppState>) -> Redirect {
    state.retry(&Route::List).await;
    Redirect::to(&Route::List.href())
}

/// Re-fetch the current book
pub async fn retry_detail(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let route = Route::detail(id);
    state.retry(&route).await;
    Redirect::to(&route.href())
}

/// Expand or collapse one chapter of the current book
pub async fn toggle_chapter(
    State(state): State<AppState>,
    Path((id, chapter_id)): Path<(String, String)>,
) -> Redirect {
    let toggled = state.navigator.lock().await.toggle_chapter(&id, &chapter_id);
    if !toggled {
        tracing::debug!(book = %id, chapter = %chapter_id, "chapter toggle for unmounted book");
    }
    Redirect::to(&Route::detail(id).href())
}

/// Send unmatched paths to their canonical route, or to the list
pub async fn fallback(uri: Uri) -> Redirect {
    let target = match Route::resolve(uri.path()) {
        Resolution::Render(route) => route,
        Resolution::Redirect(route) => {
            tracing::debug!(path = %uri.path(), "unmatched path, redirecting");
            route
        }
    };
    Redirect::to(&target.href())
}
