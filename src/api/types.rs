//! Wire types of the photo-search endpoint.
//!
//! Records are kept as the API sends them. String fields the gallery needs
//! default to empty when absent so one odd record does not fail a whole page.

use serde::{Deserialize, Serialize};

/// Parameters of one search request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub query: String,
    pub page: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page,
        }
    }
}

/// Body of a successful search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub total: u64,
    /// `None` when the response omits it; the gallery then keeps paging.
    #[serde(default)]
    pub total_pages: Option<u32>,
    pub results: Vec<ImageRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    #[serde(default)]
    pub links: ImageLinks,
    #[serde(default)]
    pub urls: ImageUrls,
    #[serde(default)]
    pub user: ImageAuthor,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    /// Photo page on the provider's site.
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUrls {
    /// Thumbnail-sized rendition.
    #[serde(default)]
    pub small: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAuthor {
    #[serde(default)]
    pub name: String,
}

impl ImageRecord {
    /// Caption line for a card: alt text, then description, then the id.
    pub fn caption(&self) -> &str {
        self.alt_description
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.description.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.id)
    }
}
