use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::super::view::{ListScreenView, PromptView};

pub fn render_list_screen(frame: &mut Frame<'_>, area: Rect, view: &ListScreenView) {
    let block = Block::default()
        .title(view.title.clone())
        .borders(Borders::ALL);
    if view.items.is_empty() {
        let placeholder = Paragraph::new(view.empty_text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem<'static>> = view
        .items
        .iter()
        .map(|entry| {
            let mut lines = vec![Line::from(entry.title.clone())];
            if let Some(description) = &entry.description {
                lines.push(Line::from(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();
    let mut state = ListState::default();
    state.select(Some(view.selected.min(view.items.len() - 1)));
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn render_prompt(frame: &mut Frame<'_>, area: Rect, view: &PromptView) {
    let block = Block::default()
        .title(view.title.clone())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);
    frame.render_widget(Paragraph::new(format!("{}:", view.prompt)), rows[0]);
    let input = Paragraph::new(view.value.clone())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, rows[1]);

    let column = view.value.chars().take(view.cursor).count() as u16;
    frame.set_cursor_position((
        rows[1].x.saturating_add(1).saturating_add(column),
        rows[1].y.saturating_add(1),
    ));
}
