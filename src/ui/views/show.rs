use crate::api::Post;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// One post, or `Loading...` until it is in the store.
pub fn render_show(frame: &mut Frame<'_>, area: Rect, post: Option<&Post>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let Some(post) = post else {
        frame.render_widget(Paragraph::new(" Loading...").block(block), area);
        return;
    };

    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Categories: ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(post.categories.clone(), text_style),
        ]),
        Line::from(""),
    ];
    lines.extend(
        post.content
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), text_style))),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block.title(Span::styled(
            format!(" Post {} ", post.id),
            Style::default().fg(HEADER_SEPARATOR),
        )));
    frame.render_widget(widget, area);
}

pub fn render_delete_confirm(frame: &mut Frame<'_>, body: Rect, post: Option<&Post>) {
    let title = post.map(|post| post.title.as_str()).unwrap_or("this post");
    let lines = vec![
        Line::from(format!("Delete \"{}\"?", title)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(STATUS_ERROR)),
            Span::raw(": Delete  "),
            Span::styled("n/Esc", Style::default().fg(ACCENT)),
            Span::raw(": Keep"),
        ]),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let area = centered_rect_by_size(
        body,
        content_width.saturating_add(4),
        lines.len().saturating_add(2) as u16,
    );

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Delete Post ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
