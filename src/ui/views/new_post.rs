use crate::ui::form::{FormField, FormState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CURSOR: &str = "▏";

/// Create form: three fields, each followed by its error line.
pub fn render_new_post(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    for (idx, field) in FormField::ALL.into_iter().enumerate() {
        render_field(frame, rows[idx * 2], rows[idx * 2 + 1], form, field);
    }

    let status = if form.submitting {
        Span::styled(" Creating post...", Style::default().fg(STATUS_OK))
    } else {
        Span::styled(" Enter: Submit", Style::default().fg(HEADER_SEPARATOR))
    };
    frame.render_widget(Paragraph::new(Line::from(status)), rows[6]);
}

fn render_field(frame: &mut Frame<'_>, input: Rect, message: Rect, form: &FormState, field: FormField) {
    let focused = form.focused == field && !form.submitting;
    let error = form.visible_error(field);

    let border_color = match (focused, error) {
        (_, Some(_)) => STATUS_ERROR,
        (true, None) => ACCENT,
        (false, None) => GLOBAL_BORDER,
    };
    let mut value = form.values.value(field).to_string();
    if focused {
        value.push_str(CURSOR);
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default().fg(if focused { ACCENT } else { HEADER_TEXT }),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let widget = Paragraph::new(value)
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(widget, input);

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", error), Style::default().fg(STATUS_ERROR))),
            message,
        );
    }
}
