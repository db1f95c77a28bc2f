use crate::ui::search::SearchState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Enter: Search │ Tab: Focus │ ↑↓←→: Move │ y: Copy link │ Ctrl+Q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, search: &SearchState, notice: Option<&str>) -> Paragraph<'static> {
        let status = notice
            .map(str::to_string)
            .unwrap_or_else(|| summary(search));
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = HINTS.chars().count();
        let status_width = status.chars().count() + 3;
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(status_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, Style::default().fg(STATUS_OK)),
            Span::styled(" │ ", text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// "page 2/7 · 20 of 133 photos", or a prompt before the first search.
pub fn summary(search: &SearchState) -> String {
    if search.committed().is_none() {
        return "no search yet".to_string();
    }
    let pages = match search.total_pages() {
        Some(total) => format!("page {}/{}", search.page(), total),
        None => format!("page {}", search.page()),
    };
    format!(
        "{} · {} of {} photos",
        pages,
        search.images().len(),
        search.total()
    )
}
