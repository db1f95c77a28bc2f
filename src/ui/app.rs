use crate::api::ImageRecord;
use crate::fetch::{FetchOutcome, RequestTag};
use crate::ui::gallery::GalleryViewport;
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};
use crate::ui::sentinel::Sentinel;
use ratatui::layout::Rect;
use std::sync::Arc;

/// Starts the request for a tag. Installed by the runtime; tests install a spy.
pub type Fetcher = Arc<dyn Fn(RequestTag) + Send + Sync>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Input,
    Gallery,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Keyword, page and gallery contents (MVI pattern).
    search: SearchState,
    /// Tag last handed to the fetcher; compared against `search.in_flight()`.
    issued: Option<RequestTag>,
    fetcher: Option<Fetcher>,
    viewport: GalleryViewport,
    sentinel: Sentinel,
    spinner_frame: usize,
    notice: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            search: SearchState::default(),
            issued: None,
            fetcher: None,
            viewport: GalleryViewport::default(),
            sentinel: Sentinel::new(),
            spinner_frame: 0,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Gallery,
            Focus::Gallery => Focus::Input,
        };
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn viewport(&self) -> &GalleryViewport {
        &self.viewport
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// One-line message for the footer (e.g. clipboard result).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn selected_image(&self) -> Option<&ImageRecord> {
        self.search.images().get(self.viewport.selected())
    }

    /// Install the closure that starts requests.
    pub fn set_fetcher(&mut self, fetcher: Fetcher) {
        self.fetcher = Some(fetcher);
    }

    /// Dispatch an intent to the search reducer and start any newly
    /// requested fetch.
    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search, SearchReducer, intent);
        self.sync_fetch();
    }

    /// Submit the current input as a new search.
    pub fn commit_search(&mut self) {
        self.dispatch_search(SearchIntent::Commit);
        self.viewport.reset();
        self.sentinel.observe(None);
        self.notice = None;
        self.focus = Focus::Gallery;
        tracing::info!(
            generation = self.search.generation(),
            query = self.search.committed().unwrap_or_default(),
            "Search committed"
        );
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if self.search.in_flight() != Some(outcome.tag()) {
            tracing::debug!(
                generation = outcome.tag().generation,
                page = outcome.tag().page,
                "Discarding stale fetch outcome"
            );
        }
        self.dispatch_search(outcome.into());
        self.poll_sentinel();
    }

    pub fn on_paste(&mut self, text: &str) {
        if self.focus != Focus::Input {
            return;
        }
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        let mut input = self.search.input().to_string();
        input.push_str(&pasted);
        self.dispatch_search(SearchIntent::SetInput(input));
    }

    pub fn on_tick(&mut self) {
        if self.search.is_fetching() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Terminal resized to `cols` x `rows`.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        });
        self.viewport
            .resize(body.width, body.height, self.search.images().len());
        self.poll_sentinel();
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.viewport.move_by(delta, self.search.images().len());
        self.poll_sentinel();
    }

    pub fn move_rows(&mut self, delta: isize) {
        self.viewport.move_rows(delta, self.search.images().len());
        self.poll_sentinel();
    }

    pub fn move_pages(&mut self, delta: isize) {
        self.viewport.move_pages(delta, self.search.images().len());
        self.poll_sentinel();
    }

    pub fn select_first(&mut self) {
        self.viewport.select_first(self.search.images().len());
        self.poll_sentinel();
    }

    pub fn select_last(&mut self) {
        self.viewport.select_last(self.search.images().len());
        self.poll_sentinel();
    }

    /// Point the sentinel at the last card and request the next page when
    /// that card has just come into view.
    fn poll_sentinel(&mut self) {
        self.sentinel.observe(self.search.last_image_id());
        let len = self.search.images().len();
        let last_visible = len > 0 && self.viewport.is_visible(len - 1, len);
        if self.sentinel.check(last_visible) {
            tracing::debug!(page = self.search.page(), "Last card in view");
            self.dispatch_search(SearchIntent::NextPage);
        }
    }

    fn sync_fetch(&mut self) {
        if self.search.in_flight() == self.issued.as_ref() {
            return;
        }
        self.issued = self.search.in_flight().cloned();
        if let (Some(tag), Some(fetcher)) = (&self.issued, &self.fetcher) {
            fetcher(tag.clone());
        }
    }
}
