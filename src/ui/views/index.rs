use crate::store::PostCollection;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

/// All posts, one row per post, labelled by title.
pub fn render_index(frame: &mut Frame<'_>, area: Rect, posts: &PostCollection, selection: usize) {
    let block = Block::default()
        .title(Span::styled(" Posts ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if posts.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            " No posts. Press n to write one.",
            Style::default().fg(HEADER_SEPARATOR),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let id_width = posts
        .ids()
        .map(|id| id.to_string().chars().count())
        .max()
        .unwrap_or(0);
    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$}  ", post.id.to_string(), width = id_width),
                    Style::default().fg(HEADER_SEPARATOR),
                ),
                Span::styled(post.title.clone(), Style::default().fg(HEADER_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selection));
    frame.render_stateful_widget(list, area, &mut state);
}
