use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::domain::bool_to_str;
use crate::form::FieldView;

pub(crate) const NO_REPOSITORIES: &str = "No repositories";

/// Lines for one field; `selected` marks the row the navigation cursor is on.
pub(crate) fn field_lines(view: &FieldView, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "» " } else { "  " };
    match view {
        FieldView::Checkbox {
            label,
            checked,
            focused,
        } => {
            let mark = if checked.unwrap_or(false) { "[x]" } else { "[ ]" };
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{mark} "), value_style(*focused)),
                Span::styled(label.to_string(), label_style(selected)),
            ];
            match checked {
                Some(value) => spans.push(Span::styled(
                    format!(" ({})", bool_to_str(*value)),
                    Style::default().fg(Color::DarkGray),
                )),
                None => spans.push(Span::styled(
                    " (unset)",
                    Style::default().fg(Color::DarkGray),
                )),
            }
            vec![Line::from(spans)]
        }
        FieldView::Text {
            label,
            value,
            cursor,
            focused,
            editing,
        } => {
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(format!("{label}: "), label_style(selected)),
            ];
            let style = value_style(*focused && *editing);
            match cursor {
                Some(offset) => spans.extend(with_cursor(value, *offset, style)),
                None => spans.push(Span::styled(value.clone(), style)),
            }
            vec![Line::from(spans)]
        }
        FieldView::Repositories {
            label,
            entries,
            selected: entry,
            focused,
        } => {
            let mut lines = vec![Line::from(vec![
                Span::raw(marker),
                Span::styled(label.to_string(), label_style(selected)),
            ])];
            if entries.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {NO_REPOSITORIES}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for (index, name) in entries.iter().enumerate() {
                let active = *focused && index == *entry;
                let prefix = if active { "  ▸ " } else { "    " };
                lines.push(Line::from(Span::styled(
                    format!("{prefix}{name}"),
                    value_style(active),
                )));
            }
            lines
        }
    }
}

fn with_cursor(value: &str, offset: usize, style: Style) -> Vec<Span<'static>> {
    let before: String = value.chars().take(offset).collect();
    let at = value.chars().nth(offset).unwrap_or(' ');
    let after: String = value.chars().skip(offset + 1).collect();
    vec![
        Span::styled(before, style),
        Span::styled(at.to_string(), style.add_modifier(Modifier::REVERSED)),
        Span::styled(after, style),
    ]
}

fn label_style(selected: bool) -> Style {
    if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn value_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn empty_repository_list_says_so() {
        let view = FieldView::Repositories {
            label: "Repositories",
            entries: Vec::new(),
            selected: 0,
            focused: true,
        };
        let lines = field_lines(&view, true);
        assert_eq!(text_of(&lines[1]).trim(), NO_REPOSITORIES);
    }

    #[test]
    fn checkbox_shows_unset_state() {
        let view = FieldView::Checkbox {
            label: "Has Wiki",
            checked: None,
            focused: false,
        };
        assert_eq!(text_of(&field_lines(&view, false)[0]), "  [ ] Has Wiki (unset)");
    }

    #[test]
    fn cursor_splits_value() {
        let view = FieldView::Text {
            label: "Name",
            value: "api".to_string(),
            cursor: Some(3),
            focused: true,
            editing: true,
        };
        assert_eq!(text_of(&field_lines(&view, true)[0]), "» Name: api ");
    }
}
