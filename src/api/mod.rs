//! Photo-search API client.

mod client;
mod error;
mod types;

pub use client::{PhotoSearch, UnsplashClient};
pub use error::FetchError;
pub use types::{ImageAuthor, ImageLinks, ImageRecord, ImageUrls, SearchPage, SearchQuery};
