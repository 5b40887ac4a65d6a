use crossterm::event::KeyCode;
use tracing::debug;

use crate::app::input::KeyAction;
use crate::app::keymap::{KeymapContext, classify_key};
use crate::domain::Repository;
use crate::form::{
    ComponentKind, Effect, FieldComponent, FocusMode, REPOSITORY_EDITABLE_FIELDS, Signal, UiEvent,
    bind,
};
use crate::presentation::ModalView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalSignal {
    Stay,
    /// Close and show the repository list again.
    BackToList,
    /// Close and leave the repository tab for the group fields.
    BackToGroup,
}

/// Drill-down editor over a single repository entry. Its fields always run in
/// editing mode and write straight into the entry.
pub(crate) struct RepoEditor {
    index: usize,
    fields: Vec<Box<dyn FieldComponent<Repository>>>,
    focused: usize,
}

impl RepoEditor {
    pub(crate) fn open(index: usize, repo: &Repository) -> (Self, Option<Effect>) {
        let mut fields = bind(repo, &REPOSITORY_EDITABLE_FIELDS);
        let effect = fields
            .first_mut()
            .and_then(|field| field.focus(FocusMode::Editing));
        debug!(index, repository = %repo.name, "repository editor opened");
        (
            Self {
                index,
                fields,
                focused: 0,
            },
            effect,
        )
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn handle(
        &mut self,
        repo: &mut Repository,
        event: &UiEvent,
    ) -> (ModalSignal, Option<Effect>) {
        let key = match event {
            UiEvent::Tick(_) => {
                for field in &mut self.fields {
                    field.handle_input(repo, event, FocusMode::Editing);
                }
                let rearm = self.focused_kind() == Some(ComponentKind::TextInput);
                return (ModalSignal::Stay, rearm.then_some(Effect::Blink));
            }
            UiEvent::Key(key) => key,
        };

        // printable keys belong to a focused text input, whatever the keymap says
        let typing = matches!(key.code, KeyCode::Char(_))
            && self.focused_kind() == Some(ComponentKind::TextInput);
        match classify_key(KeymapContext::Modal, key) {
            Some(KeyAction::ExitModal) => return (ModalSignal::BackToGroup, None),
            Some(KeyAction::CloseModal) if !typing => return (ModalSignal::BackToList, None),
            Some(KeyAction::FieldStep(delta)) => return (ModalSignal::Stay, self.step(delta)),
            _ => {}
        }

        let signal = match self.fields.get_mut(self.focused) {
            Some(field) => field.handle_input(repo, event, FocusMode::Editing),
            None => Signal::None,
        };
        match signal {
            Signal::Advance => (ModalSignal::Stay, self.step(1)),
            Signal::Retreat => (ModalSignal::Stay, self.step(-1)),
            Signal::Done => (ModalSignal::BackToList, None),
            Signal::None | Signal::Open(_) => (ModalSignal::Stay, None),
        }
    }

    fn step(&mut self, delta: i32) -> Option<Effect> {
        let len = self.fields.len() as i32;
        if len == 0 {
            return None;
        }
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.blur();
        }
        let next = self.focused as i32 + delta;
        self.focused = (((next % len) + len) % len) as usize;
        self.fields[self.focused].focus(FocusMode::Editing)
    }

    fn focused_kind(&self) -> Option<ComponentKind> {
        self.fields.get(self.focused).map(|field| field.kind())
    }

    pub(crate) fn focused(&self) -> usize {
        self.focused
    }

    pub(crate) fn view(&self, repo: &Repository) -> ModalView {
        let name = if repo.name.is_empty() {
            "<unnamed>"
        } else {
            repo.name.as_str()
        };
        ModalView {
            title: format!("Edit repository: {name}"),
            fields: self.fields.iter().map(|field| field.view(repo)).collect(),
            selected: self.focused(),
        }
    }
}
