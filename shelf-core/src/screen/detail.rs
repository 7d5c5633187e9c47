//! Book detail screen

use super::{Branch, ChapterExpansion, ErrorPolicy, FetchTicket, ScreenState};
use crate::api::BookApi;
use crate::error::FetchError;
use crate::strings::Strings;
use crate::types::Book;

/// Shows one book and its chapters
///
/// Unlike the list, a failed re-fetch keeps the book that was already shown and
/// reports the error as a banner next to it.
#[derive(Debug)]
pub struct BookDetailScreen {
    book_id: String,
    state: ScreenState<Book>,
    expansion: ChapterExpansion,
}

impl BookDetailScreen {
    pub fn new(book_id: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            state: ScreenState::new(ErrorPolicy::KeepStaleData),
            expansion: ChapterExpansion::new(),
        }
    }

    pub fn book_id(&self) -> &str {
        &self.book_id
    }

    pub fn state(&self) -> &ScreenState<Book> {
        &self.state
    }

    pub fn branch(&self) -> Branch<'_, Book> {
        self.state.branch()
    }

    pub fn book(&self) -> Option<&Book> {
        self.state.data()
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.state.begin()
    }

    /// Switch to another book
    ///
    /// Drops the previous book and chapter expansion, then starts a fetch.
    /// Returns `None` when `book_id` is already the current id.
    pub fn change_id(&mut self, book_id: &str) -> Option<FetchTicket> {
        if self.book_id == book_id {
            return None;
        }
        self.book_id = book_id.to_string();
        self.state.reset();
        self.expansion.clear();
        Some(self.begin_fetch())
    }

    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<Book, FetchError>,
        strings: &Strings,
    ) -> bool {
        self.state.finish(ticket, result, |err| {
            if err.is_not_found() {
                strings.book_not_found.to_string()
            } else {
                strings.book_load_failed.to_string()
            }
        })
    }

    /// Fetch and apply in one step
    pub async fn load(&mut self, api: &dyn BookApi, strings: &Strings) {
        let ticket = self.begin_fetch();
        let result = api.get_book(&self.book_id).await;
        self.finish(ticket, result, strings);
    }

    pub fn toggle_chapter(&mut self, chapter_id: &str) {
        self.expansion.toggle(chapter_id);
    }

    pub fn expansion(&self) -> &ChapterExpansion {
        &self.expansion
    }

    pub fn expanded_chapter(&self) -> Option<&str> {
        self.expansion.expanded()
    }
}
