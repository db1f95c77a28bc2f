//! Responsive card grid and its scroll window.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::api::ImageRecord;
use crate::ui::theme::{ACCENT, CARD_BORDER, CARD_TEXT, MUTED_TEXT, SELECTED_BORDER};

/// Rows taken by one card: five content lines plus borders.
pub const CARD_HEIGHT: u16 = 7;
/// Narrowest card before the grid drops a column.
pub const MIN_CARD_WIDTH: u16 = 34;
pub const MAX_COLUMNS: usize = 3;

/// Columns and fully visible rows for a pane size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            columns: 1,
            rows: 1,
        }
    }
}

impl GridMetrics {
    pub fn for_area(width: u16, height: u16) -> Self {
        let columns = ((width / MIN_CARD_WIDTH) as usize).clamp(1, MAX_COLUMNS);
        let rows = ((height / CARD_HEIGHT) as usize).max(1);
        Self { columns, rows }
    }
}

/// Selection cursor and scroll offset of the gallery pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryViewport {
    selected: usize,
    scroll_row: usize,
    metrics: GridMetrics,
}

impl GalleryViewport {
    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Recompute the grid for a new pane size, keeping the selection in view.
    pub fn resize(&mut self, width: u16, height: u16, len: usize) {
        self.metrics = GridMetrics::for_area(width, height);
        self.clamp(len);
    }

    /// Back to the top; used when a new search clears the gallery.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    /// Move the selection by `delta` cards.
    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
        self.follow_selection();
    }

    /// Move the selection by `delta` grid rows.
    pub fn move_rows(&mut self, delta: isize, len: usize) {
        self.move_by(delta * self.metrics.columns as isize, len);
    }

    /// Move the selection by one screenful.
    pub fn move_pages(&mut self, delta: isize, len: usize) {
        self.move_rows(delta * self.metrics.rows as isize, len);
    }

    pub fn select_first(&mut self, len: usize) {
        self.move_by(-(self.selected as isize), len);
    }

    pub fn select_last(&mut self, len: usize) {
        self.move_by(len as isize, len);
    }

    /// Indices of cards inside the scroll window.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = (self.scroll_row * self.metrics.columns).min(len);
        let end = ((self.scroll_row + self.metrics.rows) * self.metrics.columns).min(len);
        start..end
    }

    pub fn is_visible(&self, index: usize, len: usize) -> bool {
        self.visible_range(len).contains(&index)
    }

    /// Screen rectangle of card `index` inside `area`, if it is on screen.
    pub fn card_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let columns = self.metrics.columns;
        let row = index / columns;
        if row < self.scroll_row || row >= self.scroll_row + self.metrics.rows {
            return None;
        }
        let col = index % columns;
        let card_width = area.width / columns as u16;
        let x = area.x + card_width * col as u16;
        // Last column absorbs the remainder.
        let width = if col + 1 == columns {
            area.width - card_width * col as u16
        } else {
            card_width
        };
        let y = area.y + CARD_HEIGHT * (row - self.scroll_row) as u16;
        if y >= area.y + area.height {
            return None;
        }
        let height = CARD_HEIGHT.min(area.y + area.height - y);
        Some(Rect {
            x,
            y,
            width,
            height,
        })
    }

    fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
        self.follow_selection();
    }

    fn follow_selection(&mut self) {
        let row = self.selected / self.metrics.columns;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.metrics.rows {
            self.scroll_row = row + 1 - self.metrics.rows;
        }
    }
}

/// Grid of photo cards.
pub struct GalleryGrid<'a> {
    images: &'a [ImageRecord],
    viewport: &'a GalleryViewport,
    focused: bool,
}

impl<'a> GalleryGrid<'a> {
    pub fn new(images: &'a [ImageRecord], viewport: &'a GalleryViewport, focused: bool) -> Self {
        Self {
            images,
            viewport,
            focused,
        }
    }
}

impl Widget for GalleryGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for index in self.viewport.visible_range(self.images.len()) {
            let Some(rect) = self.viewport.card_rect(area, index) else {
                continue;
            };
            let selected = self.focused && index == self.viewport.selected();
            card(&self.images[index], selected).render(rect, buf);
        }
    }
}

fn card(image: &ImageRecord, selected: bool) -> Paragraph<'_> {
    let text = Style::default().fg(CARD_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let lines = vec![
        Line::from(vec![
            Span::styled("▣ ", Style::default().fg(ACCENT)),
            Span::styled(image.caption(), text.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            format!("Photo by {}", image.user.name),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            image.description.as_deref().unwrap_or_default(),
            text,
        )),
        Line::from(vec![
            Span::styled("↗ ", muted),
            Span::styled(
                image.links.html.as_str(),
                muted.add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(vec![
            Span::styled("⧉ ", muted),
            Span::styled(image.urls.small.as_str(), muted),
        ]),
    ];

    let border = if selected { SELECTED_BORDER } else { CARD_BORDER };
    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}
