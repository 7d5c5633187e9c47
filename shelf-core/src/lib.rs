//! Shelf Core Library
//!
//! Client-side logic for browsing a remote book library: the API client, the
//! list and detail screens with their fetch lifecycles, routing, the persisted
//! light/dark theme, and HTML rendering of each screen.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod screen;
pub mod storage;
pub mod strings;
pub mod theme;
pub mod types;
pub mod view;

pub use api::{BookApi, HttpBookApi};
pub use config::ShelfConfig;
pub use error::{ConfigError, FetchError, StorageError};
pub use router::{FetchJob, FetchOutcome, FetchTarget, Navigator, Resolution, Route, Screen};
pub use screen::{BookDetailScreen, BookListScreen, Branch, ChapterExpansion};
pub use strings::{Locale, Strings};
pub use theme::{Theme, ThemeStore};
pub use types::{Book, BookSummary, Chapter};
