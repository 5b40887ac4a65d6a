use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};
use unicode_width::UnicodeWidthStr;

const TAB_PADDING: usize = 2;
const DIVIDER_WIDTH: usize = 1;
const LEFT_CHEVRON: &str = "≪";
const RIGHT_CHEVRON: &str = "≫";

pub(crate) fn render_tab_strip(
    frame: &mut Frame<'_>,
    area: Rect,
    titles: &[&str],
    selected: usize,
    label: &str,
) {
    if titles.is_empty() {
        frame.render_widget(Block::default().title(label).borders(Borders::ALL), area);
        return;
    }

    let widths: Vec<usize> = titles
        .iter()
        .map(|title| UnicodeWidthStr::width(*title) + TAB_PADDING)
        .collect();
    let selected = selected.min(titles.len() - 1);
    // borders take two columns, chevrons two more on each side
    let available = (area.width as usize).saturating_sub(6);
    let window = visible_window(&widths, selected, available);

    let indicator = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(window.end - window.start);
    for index in window.start..window.end {
        let mut spans = Vec::with_capacity(3);
        if index == window.start && window.start > 0 {
            spans.push(Span::styled(format!("{LEFT_CHEVRON} "), indicator));
        }
        spans.push(Span::raw(format!(" {} ", titles[index])));
        if index + 1 == window.end && window.end < titles.len() {
            spans.push(Span::styled(format!(" {RIGHT_CHEVRON}"), indicator));
        }
        lines.push(Line::from(spans));
    }

    let tabs = Tabs::new(lines)
        .block(Block::default().title(label).borders(Borders::ALL))
        .select(selected - window.start)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TabWindow {
    start: usize,
    end: usize,
}

/// Grows a window outward from `selected`, preferring the right side, until
/// the next tab would no longer fit. The selected tab is always included.
fn visible_window(widths: &[usize], selected: usize, available: usize) -> TabWindow {
    let mut window = TabWindow {
        start: selected,
        end: selected + 1,
    };
    let mut used = widths[selected];
    loop {
        let mut grew = false;
        if window.end < widths.len() && used + DIVIDER_WIDTH + widths[window.end] <= available {
            used += DIVIDER_WIDTH + widths[window.end];
            window.end += 1;
            grew = true;
        }
        if window.start > 0 && used + DIVIDER_WIDTH + widths[window.start - 1] <= available {
            used += DIVIDER_WIDTH + widths[window.start - 1];
            window.start -= 1;
            grew = true;
        }
        if !grew {
            return window;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_fits_on_wide_screens() {
        let window = visible_window(&[10, 10, 10], 1, 100);
        assert_eq!(window, TabWindow { start: 0, end: 3 });
    }

    #[test]
    fn selected_tab_survives_narrow_width() {
        let window = visible_window(&[10, 10, 10], 2, 4);
        assert_eq!(window, TabWindow { start: 2, end: 3 });
    }

    #[test]
    fn window_grows_around_selection() {
        let widths = [8, 8, 8, 8, 8, 8];
        let window = visible_window(&widths, 3, 26);
        assert_eq!(window, TabWindow { start: 2, end: 5 });
    }
}
