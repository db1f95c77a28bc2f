use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::gallery::GalleryGrid;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let search = app.search();

    let header_widget = Header::new(search.input(), app.focus() == Focus::Input);
    frame.render_widget(header_widget.widget(header), header);
    if app.focus() == Focus::Input && header.height >= 3 {
        frame.set_cursor_position(header_widget.cursor(header));
    }

    frame.render_widget(Clear, body);
    if search.images().is_empty() {
        if !search.is_fetching() {
            frame.render_widget(empty_message(app), body);
        }
    } else {
        frame.render_widget(
            GalleryGrid::new(search.images(), app.viewport(), app.focus() == Focus::Gallery),
            body,
        );
    }

    // Overlay, not a replacement: the grid stays drawn underneath.
    if search.is_fetching() {
        draw_loading(frame, body, app.spinner_frame());
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer, search, app.notice()), footer);
}

fn empty_message(app: &App) -> Paragraph<'static> {
    let text = match app.search().committed() {
        None => "Type a keyword and press Enter to search.".to_string(),
        Some(query) => format!("No photos found for \"{}\".", query),
    };
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(MUTED_TEXT))))
        .alignment(Alignment::Center)
}

fn draw_loading(frame: &mut Frame<'_>, body: Rect, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(ACCENT)),
        Span::raw(" Loading..."),
    ]);
    let width = line.width() as u16 + 4;
    let area = centered_rect_by_size(body, width, 3);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(popup),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ImageAuthor, ImageRecord, SearchPage};
    use crate::ui::search::SearchIntent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn idle_screen_prompts_for_search() {
        let app = App::new();
        let text = screen_text(&app, 100, 20);
        assert!(text.contains("UNSPLASH SEARCH ENGINE"));
        assert!(text.contains("Type a keyword"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn fetching_draws_overlay() {
        let mut app = App::new();
        app.commit_search();
        let text = screen_text(&app, 100, 20);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn cards_show_author() {
        let mut app = App::new();
        app.on_resize(100, 20);
        app.commit_search();
        let tag = app.search().in_flight().cloned().unwrap();
        app.dispatch_search(SearchIntent::FetchSucceeded {
            tag,
            page: SearchPage {
                total: 1,
                total_pages: Some(1),
                results: vec![ImageRecord {
                    id: "a".to_string(),
                    user: ImageAuthor {
                        name: "Ansel".to_string(),
                    },
                    ..ImageRecord::default()
                }],
            },
        });
        let text = screen_text(&app, 100, 20);
        assert!(text.contains("Photo by Ansel"));
        assert!(!text.contains("Loading..."));
    }
}
