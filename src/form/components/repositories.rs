use crossterm::event::KeyCode;

use crate::domain::{RecordsSlot, preview_lines};
use crate::form::signal::{Effect, FocusMode, RepositoryRef, Signal, UiEvent};

use super::{ComponentKind, FieldComponent, FieldView};

const UNNAMED: &str = "<unnamed>";

/// Selectable list over every repository of a group; drilling in is left to the caller.
pub struct RepositoriesComponent<R> {
    label: &'static str,
    binding: RecordsSlot<R>,
    selected: usize,
    focused: bool,
}

impl<R> RepositoriesComponent<R> {
    pub fn new(label: &'static str, binding: RecordsSlot<R>) -> Self {
        Self {
            label,
            binding,
            selected: 0,
            focused: false,
        }
    }

    /// Selection clamped to the current list length.
    pub fn selected(&self, record: &R) -> usize {
        let len = (self.binding.read)(record).len();
        self.selected.min(len.saturating_sub(1))
    }
}

impl<R> FieldComponent<R> for RepositoriesComponent<R> {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Repositories
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn view(&self, record: &R) -> FieldView {
        let entries = (self.binding.read)(record)
            .iter()
            .map(|repo| {
                if repo.name.is_empty() {
                    UNNAMED.to_string()
                } else {
                    repo.name.clone()
                }
            })
            .collect();
        FieldView::Repositories {
            label: self.label,
            entries,
            selected: self.selected(record),
            focused: self.focused,
        }
    }

    fn handle_input(&mut self, record: &mut R, event: &UiEvent, _mode: FocusMode) -> Signal {
        let Some(key) = event.key() else {
            return Signal::None;
        };
        let len = (self.binding.read)(record).len();
        if len == 0 {
            return Signal::None;
        }
        self.selected = self.selected.min(len - 1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                Signal::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < len {
                    self.selected += 1;
                }
                Signal::None
            }
            KeyCode::Enter => Signal::Open(RepositoryRef {
                index: self.selected,
            }),
            _ => Signal::None,
        }
    }

    fn focus(&mut self, _mode: FocusMode) -> Option<Effect> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn preview_lines(&self, record: &R) -> Option<Vec<String>> {
        if !self.focused {
            return None;
        }
        let repositories = (self.binding.read)(record);
        let repo = repositories.get(self.selected(record))?;
        Some(preview_lines(repo))
    }

    fn collection_set_selected(&mut self, record: &R, index: usize) -> bool {
        if index >= (self.binding.read)(record).len() {
            return false;
        }
        self.selected = index;
        true
    }
}
