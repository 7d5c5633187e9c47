//! Theme toggle

use crate::state::AppState;
use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;
use shelf_core::router::Route;

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// Page to return to after toggling
    pub return_to: Option<String>,
}

/// Flip the theme and go back to the page the toggle was pressed on
///
/// Only known routes are accepted as a return target.
pub async fn toggle_theme(State(state): State<AppState>, Form(form): Form<ThemeForm>) -> Redirect {
    // Persisting writes the preference file, so keep it off the async workers
    let store = state.theme.clone();
    match tokio::task::spawn_blocking(move || store.toggle()).await {
        Ok(theme) => tracing::debug!(%theme, "theme toggled"),
        Err(e) => tracing::warn!("Theme toggle task failed: {}", e),
    }

    let target = form
        .return_to
        .as_deref()
        .and_then(Route::parse)
        .unwrap_or(Route::List);
    Redirect::to(&target.href())
}
