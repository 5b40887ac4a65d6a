use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};

use crate::app::{Message, MessageKind};

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, help: Option<&str>, message: Option<&Message>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let message_widget = match message {
        Some(message) => {
            let color = match message.kind {
                MessageKind::Error => Color::Red,
                MessageKind::Warning => Color::Yellow,
                MessageKind::Info => Color::Green,
            };
            Paragraph::new(message.to_string()).style(Style::default().fg(color))
        }
        None => Paragraph::new(" "),
    };
    frame.render_widget(message_widget, rows[0]);

    if let Some(help) = help {
        let help_widget = Paragraph::new(help.to_string())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help_widget, rows[1]);
    }
}
