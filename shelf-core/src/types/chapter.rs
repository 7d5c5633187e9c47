//! Chapter type representing a single chapter of a book

use super::wire;
use serde::{Deserialize, Serialize};

/// A single chapter of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter ID, unique within its book
    #[serde(deserialize_with = "wire::identifier")]
    pub id: String,

    /// Chapter title
    pub title: String,

    /// Summary text shown when the chapter is expanded
    #[serde(default)]
    pub summary: String,

    /// Audio source for the chapter, if any
    #[serde(default)]
    pub audio_url: Option<String>,
}

impl Chapter {
    /// Create a new chapter with an ID and a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: String::new(),
            audio_url: None,
        }
    }

    /// Set the summary text
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the audio source
    pub fn with_audio(mut self, audio_url: impl Into<String>) -> Self {
        self.audio_url = Some(audio_url.into());
        self
    }

    /// Whether the chapter carries a non-empty audio URL
    pub fn has_audio(&self) -> bool {
        self.audio_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_from_json() {
        let chapter: Chapter = serde_json::from_str(
            r#"{"id": 3, "title": "Ownership", "summary": "Moves", "audioUrl": "https://cdn/3.mp3"}"#,
        )
        .unwrap();
        assert_eq!(chapter.id, "3");
        assert_eq!(chapter.audio_url.as_deref(), Some("https://cdn/3.mp3"));
        assert!(chapter.has_audio());
    }

    #[test]
    fn test_blank_audio_is_not_audio() {
        let chapter = Chapter::new("c1", "Intro").with_audio("  ");
        assert!(!chapter.has_audio());
        assert!(!Chapter::new("c2", "Outro").has_audio());
    }
}
