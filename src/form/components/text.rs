use crossterm::event::KeyCode;

use crate::domain::{OptionalTextSlot, TextSlot};
use crate::form::signal::{Effect, FocusMode, Signal, UiEvent};

use super::helpers::handle_text_edit;
use super::{ComponentKind, FieldComponent, FieldView};

/// Plain strings are edited in place; optional strings collapse to `None` when emptied.
pub enum TextBinding<R> {
    Plain(TextSlot<R>),
    Optional(OptionalTextSlot<R>),
}

impl<R> TextBinding<R> {
    fn read<'a>(&self, record: &'a R) -> &'a str {
        match self {
            TextBinding::Plain(slot) => (slot.read)(record),
            TextBinding::Optional(slot) => (slot.read)(record).unwrap_or_default(),
        }
    }
}

pub struct TextInputComponent<R> {
    label: &'static str,
    binding: TextBinding<R>,
    cursor: usize,
    cursor_visible: bool,
    focused: bool,
    editing: bool,
}

impl<R> TextInputComponent<R> {
    pub fn new(label: &'static str, binding: TextBinding<R>, record: &R) -> Self {
        let cursor = binding.read(record).chars().count();
        Self {
            label,
            binding,
            cursor,
            cursor_visible: true,
            focused: false,
            editing: false,
        }
    }

    fn apply_edit(&mut self, record: &mut R, key: &crossterm::event::KeyEvent) {
        match &self.binding {
            TextBinding::Plain(slot) => {
                handle_text_edit((slot.slot)(record), &mut self.cursor, key);
            }
            TextBinding::Optional(slot) => {
                let target = (slot.slot)(record);
                let mut text = target.clone().unwrap_or_default();
                if handle_text_edit(&mut text, &mut self.cursor, key) {
                    *target = (!text.is_empty()).then_some(text);
                }
            }
        }
    }
}

impl<R> FieldComponent<R> for TextInputComponent<R> {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TextInput
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn view(&self, record: &R) -> FieldView {
        let value = self.binding.read(record).to_string();
        let cursor = (self.focused && self.editing && self.cursor_visible)
            .then(|| self.cursor.min(value.chars().count()));
        FieldView::Text {
            label: self.label,
            value,
            cursor,
            focused: self.focused,
            editing: self.editing,
        }
    }

    fn handle_input(&mut self, record: &mut R, event: &UiEvent, mode: FocusMode) -> Signal {
        self.editing = mode == FocusMode::Editing;
        let key = match event {
            UiEvent::Tick(_) => {
                if self.focused {
                    self.cursor_visible = !self.cursor_visible;
                }
                return Signal::None;
            }
            UiEvent::Key(key) => key,
        };
        if !self.editing {
            return Signal::None;
        }
        self.cursor_visible = true;
        match key.code {
            KeyCode::Enter => Signal::Done,
            KeyCode::Up => Signal::Retreat,
            KeyCode::Down => Signal::Advance,
            _ => {
                self.apply_edit(record, key);
                Signal::None
            }
        }
    }

    fn focus(&mut self, mode: FocusMode) -> Option<Effect> {
        self.focused = true;
        self.editing = mode == FocusMode::Editing;
        self.cursor_visible = true;
        Some(Effect::Blink)
    }

    fn blur(&mut self) {
        self.focused = false;
        self.editing = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
