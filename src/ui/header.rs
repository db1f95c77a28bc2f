use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const TITLE: &str = " UNSPLASH SEARCH ENGINE ";
const PROMPT: &str = " 🔍 ";
const SEARCH_HINT: &str = " [Enter] Search ";

/// Search box: live input plus the search button hint.
pub struct Header<'a> {
    input: &'a str,
    focused: bool,
}

impl<'a> Header<'a> {
    pub fn new(input: &'a str, focused: bool) -> Self {
        Self { input, focused }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let hint_style = if self.focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };

        let content_width = area.width.saturating_sub(2) as usize;
        let used = PROMPT.width() + self.input.width() + SEARCH_HINT.width();
        let padding = content_width.saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(PROMPT, text_style),
            Span::styled(self.input, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(SEARCH_HINT, hint_style),
        ]);

        let border = if self.focused { ACCENT } else { GLOBAL_BORDER };
        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(TITLE, Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
    }

    /// Terminal cursor position at the end of the input.
    pub fn cursor(&self, area: Rect) -> (u16, u16) {
        let offset = (PROMPT.width() + self.input.width()) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        ((area.x + 1 + offset).min(max_x), area.y + 1)
    }
}
