//! Data model for books served by the remote API

mod book;
mod chapter;
mod wire;

pub use book::{Book, BookSummary};
pub use chapter::Chapter;
