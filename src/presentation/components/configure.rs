use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;

use super::super::view::{ConfigureView, TabBody};
use super::{fields::field_lines, overlay::render_modal, tabstrip::render_tab_strip};

const PREVIEW_WIDTH: u16 = 42;

pub fn render_configure(frame: &mut Frame<'_>, area: Rect, view: &ConfigureView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);
    render_tab_strip(frame, chunks[0], &view.tabs, view.active_tab, &view.title);

    let tab_name = view.tabs.get(view.active_tab).copied().unwrap_or_default();
    render_body(frame, chunks[1], tab_name, &view.body);

    if let Some(modal) = &view.body.modal {
        render_modal(frame, modal);
    }
}

fn render_body(frame: &mut Frame<'_>, area: Rect, title: &str, body: &TabBody) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if let Some(placeholder) = body.placeholder {
        let widget = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let (fields_area, preview_area) = match &body.preview {
        Some(_) if area.width > PREVIEW_WIDTH * 2 => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(20), Constraint::Length(PREVIEW_WIDTH)])
                .split(area);
            (columns[0], Some(columns[1]))
        }
        _ => (area, None),
    };

    let lines: Vec<Line<'static>> = body
        .fields
        .iter()
        .enumerate()
        .flat_map(|(index, field)| field_lines(field, body.selected == Some(index)))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), fields_area);

    if let (Some(preview), Some(preview_area)) = (&body.preview, preview_area) {
        let width = preview_area.width.saturating_sub(2).max(1) as usize;
        let lines: Vec<Line<'static>> = preview
            .iter()
            .flat_map(|line| wrap(line, width))
            .map(|line| Line::from(line.into_owned()))
            .collect();
        let widget = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().title("Preview").borders(Borders::ALL));
        frame.render_widget(widget, preview_area);
    }
}
