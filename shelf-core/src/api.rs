//! Client for the remote book API
//!
//! One GET per call: no retries, no caching, transport-default timeouts.

use crate::error::FetchError;
use crate::types::{Book, BookSummary};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Result type for API calls
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// The remote book collection
#[async_trait]
pub trait BookApi: Send + Sync {
    /// `GET {base}/books`
    async fn list_books(&self) -> FetchResult<Vec<BookSummary>>;

    /// `GET {base}/books/{id}`
    async fn get_book(&self, id: &str) -> FetchResult<Book>;
}

/// HTTP implementation of [`BookApi`]
#[derive(Clone)]
pub struct HttpBookApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBookApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    /// The id is encoded as a single path segment
    pub fn book_url(&self, id: &str) -> String {
        format!("{}/books/{}", self.base_url, urlencoding::encode(id))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> FetchResult<T> {
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, "request failed: {}", e);
            FetchError::Transport(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request returned error status");
            return Err(FetchError::from_status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%url, "malformed response body: {}", e);
            FetchError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self) -> FetchResult<Vec<BookSummary>> {
        self.get_json(self.books_url()).await
    }

    async fn get_book(&self, id: &str) -> FetchResult<Book> {
        self.get_json(self.book_url(id)).await
    }
}
