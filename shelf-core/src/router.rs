//! Routes and the navigator that mounts screens for them
//!
//! There are two screens: the book list at the root and a book's detail page
//! at `book/{id}`. Anything else redirects to the list. The [`Navigator`]
//! holds the one mounted screen and plans the fetches it needs; the caller
//! runs each [`FetchJob`] and hands the outcome back with
//! [`Navigator::complete`].

use crate::api::{BookApi, FetchResult};
use crate::screen::{BookDetailScreen, BookListScreen, FetchTicket};
use crate::strings::Strings;
use crate::types::{Book, BookSummary};

/// Path prefix every route is mounted under
pub const BASE_PATH: &str = "/books";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Detail { id: String },
}

/// How a requested path should be served
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
}

impl Route {
    pub fn detail(id: impl Into<String>) -> Self {
        Route::Detail { id: id.into() }
    }

    /// Match a path, with or without the [`BASE_PATH`] prefix
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = match path.strip_prefix(BASE_PATH) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        };

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Route::List),
            ["book", id] => {
                let id = urlencoding::decode(id).ok()?;
                Some(Route::detail(id.into_owned()))
            }
            _ => None,
        }
    }

    /// Unmatched paths redirect to the list
    pub fn resolve(path: &str) -> Resolution {
        match Self::parse(path) {
            Some(route) => Resolution::Render(route),
            None => Resolution::Redirect(Route::List),
        }
    }

    /// Absolute path of this route under [`BASE_PATH`]
    pub fn href(&self) -> String {
        match self {
            Route::List => format!("{BASE_PATH}/"),
            Route::Detail { id } => format!("{BASE_PATH}/book/{}", urlencoding::encode(id)),
        }
    }

    /// Form target that re-issues this route's fetch
    pub fn retry_href(&self) -> String {
        match self {
            Route::List => format!("{BASE_PATH}/retry"),
            Route::Detail { .. } => format!("{}/retry", self.href()),
        }
    }

    /// Form target that toggles one chapter of a detail route
    pub fn chapter_toggle_href(book_id: &str, chapter_id: &str) -> String {
        format!(
            "{}/chapters/{}",
            Route::detail(book_id).href(),
            urlencoding::encode(chapter_id)
        )
    }

    pub fn theme_toggle_href() -> String {
        format!("{BASE_PATH}/theme")
    }
}

/// What a fetch job asks the API for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Books,
    Book(String),
}

/// The result of running a [`FetchJob`]
#[derive(Debug)]
pub enum FetchOutcome {
    Books(FetchResult<Vec<BookSummary>>),
    Book(FetchResult<Book>),
}

/// A fetch planned by the navigator, to be run without holding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub ticket: FetchTicket,
    pub target: FetchTarget,
}

impl FetchJob {
    pub async fn run(&self, api: &dyn BookApi) -> FetchOutcome {
        match &self.target {
            FetchTarget::Books => FetchOutcome::Books(api.list_books().await),
            FetchTarget::Book(id) => FetchOutcome::Book(api.get_book(id).await),
        }
    }
}

/// The mounted screen
#[derive(Debug)]
pub enum Screen {
    List(BookListScreen),
    Detail(BookDetailScreen),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::List(_) => Route::List,
            Screen::Detail(screen) => Route::detail(screen.book_id()),
        }
    }
}

/// Mounts screens for routes and tracks their fetches
#[derive(Debug, Default)]
pub struct Navigator {
    screen: Option<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Screen> {
        self.screen.as_ref()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.screen.as_ref().map(Screen::route)
    }

    /// Show `route`, mounting its screen if another one is mounted
    ///
    /// Returns the fetch the newly mounted (or re-targeted) screen needs.
    /// Re-visiting the mounted screen re-renders it as is.
    pub fn visit(&mut self, route: &Route) -> Option<FetchJob> {
        match route {
            Route::List => {
                if matches!(self.screen, Some(Screen::List(_))) {
                    return None;
                }
                let mut screen = BookListScreen::new();
                let ticket = screen.begin_fetch();
                self.screen = Some(Screen::List(screen));
                Some(FetchJob {
                    ticket,
                    target: FetchTarget::Books,
                })
            }
            Route::Detail { id } => {
                if let Some(Screen::Detail(screen)) = &mut self.screen {
                    return screen.change_id(id).map(|ticket| FetchJob {
                        ticket,
                        target: FetchTarget::Book(id.clone()),
                    });
                }
                let mut screen = BookDetailScreen::new(id.clone());
                let ticket = screen.begin_fetch();
                self.screen = Some(Screen::Detail(screen));
                Some(FetchJob {
                    ticket,
                    target: FetchTarget::Book(id.clone()),
                })
            }
        }
    }

    /// Re-issue the fetch of `route`'s screen, mounting it first if needed
    pub fn retry(&mut self, route: &Route) -> Option<FetchJob> {
        let target = match (route, &mut self.screen) {
            (Route::List, Some(Screen::List(screen))) => {
                Some((screen.begin_fetch(), FetchTarget::Books))
            }
            (Route::Detail { id }, Some(Screen::Detail(screen))) if screen.book_id() == id => {
                Some((screen.begin_fetch(), FetchTarget::Book(id.clone())))
            }
            _ => None,
        };

        match target {
            Some((ticket, target)) => Some(FetchJob { ticket, target }),
            None => self.visit(route),
        }
    }

    /// Toggle a chapter on the mounted detail screen of `book_id`
    pub fn toggle_chapter(&mut self, book_id: &str, chapter_id: &str) -> bool {
        match &mut self.screen {
            Some(Screen::Detail(screen)) if screen.book_id() == book_id => {
                screen.toggle_chapter(chapter_id);
                true
            }
            _ => false,
        }
    }

    /// Apply a job's outcome to the mounted screen
    ///
    /// Outcomes for screens that have since been replaced, or for fetches that
    /// were superseded, are dropped and `false` is returned.
    pub fn complete(&mut self, job: &FetchJob, outcome: FetchOutcome, strings: &Strings) -> bool {
        match (&mut self.screen, outcome) {
            (Some(Screen::List(screen)), FetchOutcome::Books(result)) => {
                screen.finish(job.ticket, result, strings)
            }
            (Some(Screen::Detail(screen)), FetchOutcome::Book(result)) => {
                screen.finish(job.ticket, result, strings)
            }
            _ => {
                tracing::debug!(fetch = ?job.target, "dropping outcome for unmounted screen");
                false
            }
        }
    }
}
