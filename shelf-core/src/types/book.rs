//! Book records as served by the remote API

use super::{wire, Chapter};
use serde::{Deserialize, Serialize};

/// The full book record returned by `GET {base}/books/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for this book
    #[serde(deserialize_with = "wire::identifier")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub author: String,

    /// Publication year
    #[serde(default, deserialize_with = "wire::year")]
    pub year: Option<i32>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub cover_url: String,

    /// Ordered list of chapters, in API order
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Create a new book with the given id and title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: String::new(),
            year: None,
            description: String::new(),
            cover_url: String::new(),
            chapters: Vec::new(),
        }
    }

    /// Add a chapter to the book
    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Whether any chapter has a non-empty audio URL
    pub fn has_audio(&self) -> bool {
        self.chapters.iter().any(Chapter::has_audio)
    }

    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }
}

/// A book as listed by `GET {base}/books`
///
/// The list endpoint may omit `chapters`; any chapters it does send are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    #[serde(deserialize_with = "wire::identifier")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default, deserialize_with = "wire::year")]
    pub year: Option<i32>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub cover_url: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            description: book.description.clone(),
            cover_url: book.cover_url.clone(),
        }
    }
}
