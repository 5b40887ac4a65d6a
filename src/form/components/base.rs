use crate::form::signal::{Effect, FocusMode, Signal, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Checkbox,
    TextInput,
    Repositories,
}

/// Snapshot of a component for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldView {
    Checkbox {
        label: &'static str,
        checked: Option<bool>,
        focused: bool,
    },
    Text {
        label: &'static str,
        value: String,
        /// Char offset of the cursor, present only while the cursor is drawn.
        cursor: Option<usize>,
        focused: bool,
        editing: bool,
    },
    Repositories {
        label: &'static str,
        entries: Vec<String>,
        selected: usize,
        focused: bool,
    },
}

/// Editable unit bound to one slot of a record `R`.
///
/// Components never own the value they edit: every read goes through the
/// record passed to [`FieldComponent::view`] and every write lands in the
/// record passed to [`FieldComponent::handle_input`].
pub trait FieldComponent<R> {
    fn kind(&self) -> ComponentKind;
    fn label(&self) -> &'static str;
    fn view(&self, record: &R) -> FieldView;
    fn handle_input(&mut self, record: &mut R, event: &UiEvent, mode: FocusMode) -> Signal;
    /// Gives focus; `mode` is the mode the owner is in when focus lands.
    fn focus(&mut self, mode: FocusMode) -> Option<Effect>;
    fn blur(&mut self);
    fn is_focused(&self) -> bool;

    /// Summary of the selected entry, for components that expose one.
    fn preview_lines(&self, _record: &R) -> Option<Vec<String>> {
        None
    }

    fn collection_set_selected(&mut self, _record: &R, _index: usize) -> bool {
        false
    }
}
