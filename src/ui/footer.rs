use crate::ui::route::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

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

    pub fn widget(&self, area: Rect, route: &Route, error: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let version = format!("v{} ", VERSION);

        let (left, left_style) = match error {
            Some(message) => (format!(" {}", message), Style::default().fg(STATUS_ERROR)),
            None => (hints(route).to_string(), text_style),
        };

        // Char count, not bytes: hints use box-drawing separators.
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
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

fn hints(route: &Route) -> &'static str {
    match route {
        Route::Index => " ↑/↓: Move │ Enter: Open │ n: New Post │ r: Reload │ q: Quit",
        Route::Show(_) => " b/Esc: All Posts │ d: Delete │ q: Quit",
        Route::New => " Tab: Next Field │ Enter: Create Post │ Esc: Cancel",
    }
}
