use crate::api::ImageRecord;
use crate::fetch::RequestTag;
use crate::ui::mvi::UiState;

/// Everything the gallery needs: keyword, page, accumulated images and the
/// request currently in flight.
///
/// Fields are only written by [`SearchReducer`](super::SearchReducer), which
/// keeps these invariants:
/// - `images` changes only by append (matching outcome) or clear (commit)
/// - `page` changes only by reset to 1 (commit) or +1 (next page)
/// - at most one request is in flight, identified by its tag
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub(super) input: String,
    pub(super) committed: Option<String>,
    pub(super) generation: u64,
    pub(super) page: u32,
    pub(super) images: Vec<ImageRecord>,
    pub(super) in_flight: Option<RequestTag>,
    pub(super) total: u64,
    pub(super) total_pages: Option<u32>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            input: String::new(),
            committed: None,
            generation: 0,
            page: 1,
            images: Vec::new(),
            in_flight: None,
            total: 0,
            total_pages: None,
        }
    }
}

impl UiState for SearchState {}

impl SearchState {
    /// Live text of the search box.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last submitted term; `None` before the first search.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    /// Request the orchestrator should be running, if any.
    pub fn in_flight(&self) -> Option<&RequestTag> {
        self.in_flight.as_ref()
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Total matches reported by the last applied response.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Page count reported by the last applied response.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// False once the current page is the last one the API reported.
    pub fn has_more(&self) -> bool {
        match self.total_pages {
            Some(total_pages) => self.page < total_pages,
            None => true,
        }
    }

    /// Id of the card the scroll sentinel should watch.
    pub fn last_image_id(&self) -> Option<&str> {
        self.images.last().map(|image| image.id.as_str())
    }
}
