use crossterm::event::KeyCode;
use tracing::debug;

use crate::domain::FlagSlot;
use crate::form::signal::{Effect, FocusMode, Signal, UiEvent};

use super::{ComponentKind, FieldComponent, FieldView};

pub struct CheckboxComponent<R> {
    label: &'static str,
    binding: FlagSlot<R>,
    focused: bool,
}

impl<R> CheckboxComponent<R> {
    pub fn new(label: &'static str, binding: FlagSlot<R>) -> Self {
        Self {
            label,
            binding,
            focused: false,
        }
    }

    fn toggle(&self, record: &mut R) {
        let slot = (self.binding.slot)(record);
        // unset reads as false, so the first toggle always lands on true
        *slot = Some(!slot.unwrap_or(false));
        debug!(label = self.label, value = ?slot, "checkbox toggled");
    }
}

impl<R> FieldComponent<R> for CheckboxComponent<R> {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Checkbox
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn view(&self, record: &R) -> FieldView {
        FieldView::Checkbox {
            label: self.label,
            checked: (self.binding.read)(record),
            focused: self.focused,
        }
    }

    fn handle_input(&mut self, record: &mut R, event: &UiEvent, mode: FocusMode) -> Signal {
        if mode != FocusMode::Editing {
            return Signal::None;
        }
        let Some(key) = event.key() else {
            return Signal::None;
        };
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle(record);
                Signal::None
            }
            KeyCode::Up | KeyCode::Char('k') => Signal::Retreat,
            KeyCode::Down | KeyCode::Char('j') => Signal::Advance,
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
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::domain::{RepositoriesGroup, Record, Slot};

    fn has_issues() -> CheckboxComponent<RepositoriesGroup> {
        let Some(entry) = RepositoriesGroup::entry("Spec.HasIssues") else {
            panic!("missing Spec.HasIssues");
        };
        let Slot::Flag(flag) = &entry.slot else {
            panic!("Spec.HasIssues is not a flag");
        };
        CheckboxComponent::new("Has Issues", *flag)
    }

    fn press(code: KeyCode) -> UiEvent {
        UiEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn toggle_from_unset_lands_on_true_then_flips() {
        let mut group = RepositoriesGroup::default();
        let mut checkbox = has_issues();
        checkbox.handle_input(&mut group, &press(KeyCode::Char(' ')), FocusMode::Editing);
        assert_eq!(group.spec.has_issues, Some(true));
        checkbox.handle_input(&mut group, &press(KeyCode::Enter), FocusMode::Editing);
        assert_eq!(group.spec.has_issues, Some(false));
        checkbox.handle_input(&mut group, &press(KeyCode::Enter), FocusMode::Editing);
        assert_eq!(group.spec.has_issues, Some(true));
    }

    #[test]
    fn navigation_mode_ignores_keys() {
        let mut group = RepositoriesGroup::default();
        let mut checkbox = has_issues();
        let signal = checkbox.handle_input(&mut group, &press(KeyCode::Char(' ')), FocusMode::Navigation);
        assert_eq!(signal, Signal::None);
        assert_eq!(group.spec.has_issues, None);
    }

    #[test]
    fn vertical_keys_emit_focus_signals() {
        let mut group = RepositoriesGroup::default();
        let mut checkbox = has_issues();
        assert_eq!(
            checkbox.handle_input(&mut group, &press(KeyCode::Char('j')), FocusMode::Editing),
            Signal::Advance
        );
        assert_eq!(
            checkbox.handle_input(&mut group, &press(KeyCode::Up), FocusMode::Editing),
            Signal::Retreat
        );
    }
}
