use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::view::ModalView;
use super::{fields::field_lines, layout::popup_rect};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 12;

/// Draws the repository editor in a fixed-size box centred on the frame.
pub fn render_modal(frame: &mut Frame<'_>, modal: &ModalView) {
    let base = frame.area();
    let area = popup_rect(
        base,
        MODAL_WIDTH.min(base.width),
        MODAL_HEIGHT.min(base.height),
    );
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(modal.title.clone())
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let lines = modal
        .fields
        .iter()
        .enumerate()
        .flat_map(|(index, field)| field_lines(field, index == modal.selected))
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
