//! Application state

use anyhow::Result;
use axum::response::{Html, IntoResponse, Redirect, Response};
use shelf_core::router::{FetchJob, Navigator, Route};
use shelf_core::storage::{FilePreferences, PreferenceStore, PREFERENCES_FILE};
use shelf_core::{view, BookApi, HttpBookApi, ShelfConfig, Strings, ThemeStore};
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a screen request resolved to
#[derive(Debug, PartialEq, Eq)]
pub enum Page {
    Rendered(String),
    /// Another navigation replaced the requested screen
    Moved(Route),
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self {
            Page::Rendered(html) => Html(html).into_response(),
            Page::Moved(route) => Redirect::to(&route.href()).into_response(),
        }
    }
}

/// Shared application state
///
/// One viewing session: a single navigator and theme, like one browser tab.
#[derive(Clone)]
pub struct AppState {
    /// Remote book API
    pub api: Arc<dyn BookApi>,

    /// Theme preference, persisted across restarts
    pub theme: Arc<ThemeStore>,

    /// The mounted screen
    pub navigator: Arc<Mutex<Navigator>>,

    /// Localized text
    pub strings: Arc<Strings>,
}

impl AppState {
    pub fn new(api: Arc<dyn BookApi>, prefs: Arc<dyn PreferenceStore>, strings: Strings) -> Self {
        Self {
            api,
            theme: Arc::new(ThemeStore::load(prefs)),
            navigator: Arc::new(Mutex::new(Navigator::new())),
            strings: Arc::new(strings),
        }
    }

    /// Create application state from configuration
    pub async fn from_config(config: &ShelfConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.data_path).await?;

        let prefs_path = config.data_path.join(PREFERENCES_FILE);
        let prefs = match FilePreferences::open(&prefs_path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Failed to load preferences, starting fresh: {}", e);
                FilePreferences::fresh(prefs_path)
            }
        };

        tracing::info!(api = %config.api_base_url, "using book API");
        let api = HttpBookApi::new(config.api_base_url.clone());

        Ok(Self::new(
            Arc::new(api),
            Arc::new(prefs),
            Strings::for_locale(config.locale),
        ))
    }

    /// Mount `route` if needed, wait for its fetch, and render the page
    ///
    /// A navigation that lands while the fetch is in flight replaces the
    /// mounted screen; the page of that newer route is returned as moved.
    pub async fn show(&self, route: &Route) -> Page {
        let job = self.navigator.lock().await.visit(route);
        self.run(job).await;

        let theme = self.theme.get();
        let navigator = self.navigator.lock().await;
        match navigator.current() {
            Some(screen) if screen.route() == *route => {
                Page::Rendered(view::render_screen(screen, theme, &self.strings))
            }
            Some(screen) => {
                tracing::debug!(requested = ?route, mounted = ?screen.route(), "route superseded");
                Page::Moved(screen.route())
            }
            None => Page::Moved(Route::List),
        }
    }

    /// Re-issue the fetch of `route`'s screen
    pub async fn retry(&self, route: &Route) {
        let job = self.navigator.lock().await.retry(route);
        self.run(job).await;
    }

    /// Run a planned fetch with the navigator unlocked, then apply its outcome
    async fn run(&self, job: Option<FetchJob>) {
        let Some(job) = job else {
            return;
        };

        let outcome = job.run(self.api.as_ref()).await;
        let applied = self
            .navigator
            .lock()
            .await
            .complete(&job, outcome, &self.strings);
        if !applied {
            tracing::debug!(fetch = ?job.target, "fetch outcome superseded");
        }
    }

}
