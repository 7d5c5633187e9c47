//! Book list screen

use super::{Branch, ErrorPolicy, FetchTicket, ScreenState};
use crate::api::BookApi;
use crate::error::FetchError;
use crate::router::Route;
use crate::strings::Strings;
use crate::types::BookSummary;

/// Lists the whole collection
///
/// A failed fetch clears the list: the error state never shows stale books.
#[derive(Debug)]
pub struct BookListScreen {
    state: ScreenState<Vec<BookSummary>>,
}

impl BookListScreen {
    pub fn new() -> Self {
        Self {
            state: ScreenState::new(ErrorPolicy::ClearData),
        }
    }

    pub fn state(&self) -> &ScreenState<Vec<BookSummary>> {
        &self.state
    }

    pub fn branch(&self) -> Branch<'_, Vec<BookSummary>> {
        self.state.branch()
    }

    pub fn books(&self) -> &[BookSummary] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    /// Start (or restart, on retry) the fetch
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.state.begin()
    }

    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<BookSummary>, FetchError>,
        strings: &Strings,
    ) -> bool {
        self.state
            .finish(ticket, result, |_| strings.list_load_failed.to_string())
    }

    /// Fetch and apply in one step
    pub async fn load(&mut self, api: &dyn BookApi, strings: &Strings) {
        let ticket = self.begin_fetch();
        let result = api.list_books().await;
        self.finish(ticket, result, strings);
    }

    /// Route to the detail screen of a listed book
    ///
    /// Nothing is carried across; the detail screen fetches for itself.
    pub fn select(&self, book_id: &str) -> Option<Route> {
        self.books()
            .iter()
            .find(|book| book.id == book_id)
            .map(|book| Route::detail(&book.id))
    }
}

impl Default for BookListScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> BookSummary {
        BookSummary {
            id: id.to_string(),
            title: title.to_string(),
            author: "Author".to_string(),
            year: Some(2020),
            description: String::new(),
            cover_url: String::new(),
        }
    }

    #[test]
    fn test_failure_sets_fixed_message_and_no_books() {
        let strings = Strings::english();
        let mut screen = BookListScreen::new();

        let ticket = screen.begin_fetch();
        screen.finish(ticket, Ok(vec![summary("1", "One")]), &strings);
        assert_eq!(screen.books().len(), 1);

        let ticket = screen.begin_fetch();
        screen.finish(ticket, Err(FetchError::Status(503)), &strings);

        assert!(screen.books().is_empty());
        assert_eq!(screen.branch(), Branch::Failed(strings.list_load_failed));
    }

    #[test]
    fn test_transport_failure_uses_same_message() {
        let strings = Strings::english();
        let mut screen = BookListScreen::new();

        let ticket = screen.begin_fetch();
        screen.finish(ticket, Err(FetchError::Transport("reset".into())), &strings);

        assert_eq!(screen.state().error(), Some(strings.list_load_failed));
    }

    #[test]
    fn test_select_routes_to_detail() {
        let strings = Strings::english();
        let mut screen = BookListScreen::new();
        let ticket = screen.begin_fetch();
        screen.finish(ticket, Ok(vec![summary("7", "Seven")]), &strings);

        assert_eq!(screen.select("7"), Some(Route::detail("7")));
        assert_eq!(screen.select("8"), None);
    }
}
