//! Routed screens and their fetch lifecycle
//!
//! Each screen owns a [`ScreenState`]. A fetch is started with `begin`, which
//! hands out a [`FetchTicket`], and its result is applied with `finish`. Only
//! the ticket of the most recent `begin` is accepted, so a response that was
//! superseded by a retry or an id change never overwrites newer state.

mod chapters;
mod detail;
mod list;

pub use chapters::ChapterExpansion;
pub use detail::BookDetailScreen;
pub use list::BookListScreen;

use crate::error::FetchError;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one fetch; unique across all screens in the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    fn next() -> Self {
        Self(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }

    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What happens to held data when a fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Error state has no data (book list)
    ClearData,
    /// Previously fetched data stays on screen with the error as a banner (book detail)
    KeepStaleData,
}

/// The rendered branch of a screen
#[derive(Debug, PartialEq, Eq)]
pub enum Branch<'a, T> {
    Loading,
    Failed(&'a str),
    Ready { data: &'a T, banner: Option<&'a str> },
}

#[derive(Debug)]
pub struct ScreenState<T> {
    loading: bool,
    error: Option<String>,
    data: Option<T>,
    pending: Option<FetchTicket>,
    policy: ErrorPolicy,
}

impl<T> ScreenState<T> {
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
            pending: None,
            policy,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Whether `ticket` belongs to the fetch currently in flight
    pub fn is_pending(&self, ticket: FetchTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Enter `loading` and issue a ticket for the new fetch
    pub fn begin(&mut self) -> FetchTicket {
        let ticket = FetchTicket::next();
        self.loading = true;
        self.error = None;
        if self.policy == ErrorPolicy::ClearData {
            self.data = None;
        }
        self.pending = Some(ticket);
        ticket
    }

    /// Apply a fetch result
    ///
    /// Returns `false` and leaves state untouched when `ticket` was superseded.
    pub fn finish(
        &mut self,
        ticket: FetchTicket,
        result: Result<T, FetchError>,
        message: impl FnOnce(&FetchError) -> String,
    ) -> bool {
        if !self.is_pending(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                "discarding superseded response"
            );
            return false;
        }

        self.pending = None;
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(message(&err));
                if self.policy == ErrorPolicy::ClearData {
                    self.data = None;
                }
            }
        }
        true
    }

    /// Drop everything, including any in-flight ticket
    pub fn reset(&mut self) {
        self.loading = false;
        self.error = None;
        self.data = None;
        self.pending = None;
    }

    pub fn branch(&self) -> Branch<'_, T> {
        if self.loading {
            return Branch::Loading;
        }
        match (&self.data, &self.error) {
            (Some(data), banner) => Branch::Ready {
                data,
                banner: banner.as_deref(),
            },
            (None, Some(message)) => Branch::Failed(message),
            // Idle before the first fetch renders as loading
            (None, None) => Branch::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: &FetchError) -> String {
        err.to_string()
    }

    #[test]
    fn test_tickets_are_unique() {
        let mut a = ScreenState::<u32>::new(ErrorPolicy::ClearData);
        let mut b = ScreenState::<u32>::new(ErrorPolicy::ClearData);
        let ta = a.begin();
        let tb = b.begin();
        assert_ne!(ta, tb);
        assert!(!b.finish(ta, Ok(1), message));
        assert!(b.finish(tb, Ok(2), message));
    }

    #[test]
    fn test_success_branch() {
        let mut state = ScreenState::new(ErrorPolicy::ClearData);
        assert_eq!(state.branch(), Branch::Loading);

        let ticket = state.begin();
        assert!(state.is_loading());
        assert_eq!(state.branch(), Branch::Loading);

        assert!(state.finish(ticket, Ok(5), message));
        assert_eq!(
            state.branch(),
            Branch::Ready {
                data: &5,
                banner: None
            }
        );
    }

    #[test]
    fn test_clear_policy_drops_data_on_error() {
        let mut state = ScreenState::new(ErrorPolicy::ClearData);
        let ticket = state.begin();
        state.finish(ticket, Ok(5), message);

        let ticket = state.begin();
        assert_eq!(state.data(), None);
        state.finish(ticket, Err(FetchError::Status(500)), message);

        assert_eq!(state.data(), None);
        assert_eq!(state.branch(), Branch::Failed("HTTP error! status: 500"));
    }

    #[test]
    fn test_keep_policy_shows_banner_over_stale_data() {
        let mut state = ScreenState::new(ErrorPolicy::KeepStaleData);
        let ticket = state.begin();
        state.finish(ticket, Ok(5), message);

        let ticket = state.begin();
        assert_eq!(state.data(), Some(&5));
        state.finish(ticket, Err(FetchError::NotFound), message);

        assert_eq!(
            state.branch(),
            Branch::Ready {
                data: &5,
                banner: Some("Book not found")
            }
        );
    }

    #[test]
    fn test_superseded_response_is_discarded() {
        let mut state = ScreenState::new(ErrorPolicy::KeepStaleData);
        let first = state.begin();
        let second = state.begin();

        assert!(state.finish(second, Ok(2), message));
        assert!(!state.finish(first, Ok(1), message));
        assert_eq!(state.data(), Some(&2));
    }

    #[test]
    fn test_reset_forgets_pending_ticket() {
        let mut state = ScreenState::new(ErrorPolicy::KeepStaleData);
        let ticket = state.begin();
        state.reset();

        assert!(!state.finish(ticket, Ok(1), message));
        assert_eq!(state.data(), None);
    }
}
