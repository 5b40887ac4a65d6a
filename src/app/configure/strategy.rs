use crate::app::input::KeyAction;
use crate::app::keymap::{KeymapContext, classify_key, help_text};
use crate::app::screens::Transition;
use crate::app::status::Message;
use crate::form::{FocusMode, RepositoryRef, Signal, UiEvent};
use crate::io::GroupStore;
use crate::presentation::TabBody;

use super::modal::{ModalSignal, RepoEditor};
use super::session::GroupSession;

pub(crate) const EMPTY_TAB: &str = "Not supported yet or no fields available in this tab.";

/// Per-tab behaviour: layout of the tab body, input routing and the status line.
pub(crate) trait TabStrategy {
    fn body(&self, session: &GroupSession) -> TabBody;

    fn update(
        &mut self,
        session: &mut GroupSession,
        event: &UiEvent,
        store: &mut dyn GroupStore,
    ) -> Transition;

    fn status_text(&self, session: &GroupSession) -> String;

    fn modal_open(&self) -> bool {
        false
    }
}

fn field_rows(session: &GroupSession) -> TabBody {
    let tab = session.active();
    let record = &session.group.manifest;
    TabBody {
        fields: tab
            .components
            .iter()
            .map(|component| component.view(record))
            .collect(),
        selected: (!tab.components.is_empty()).then_some(session.focused_index),
        placeholder: tab.components.is_empty().then_some(EMPTY_TAB),
        ..TabBody::default()
    }
}

/// Keys shared by both strategies while the list or the fields have the focus.
fn shared_action(
    session: &mut GroupSession,
    action: KeyAction,
    store: &mut dyn GroupStore,
) -> Option<Transition> {
    match action {
        KeyAction::Save => session.save(store),
        KeyAction::TabStep(delta) => session.switch_tab(delta),
        KeyAction::ReturnToMenu => return Some(Transition::Menu),
        KeyAction::Quit => return Some(Transition::Quit),
        _ => return None,
    }
    Some(Transition::Stay)
}

#[derive(Debug, Default)]
pub(crate) struct GenericTabStrategy;

impl TabStrategy for GenericTabStrategy {
    fn body(&self, session: &GroupSession) -> TabBody {
        field_rows(session)
    }

    fn update(
        &mut self,
        session: &mut GroupSession,
        event: &UiEvent,
        store: &mut dyn GroupStore,
    ) -> Transition {
        let key = match event {
            UiEvent::Tick(now) => {
                session.broadcast(event);
                session.blink.arm(*now);
                return Transition::Stay;
            }
            UiEvent::Key(key) => key,
        };

        match session.mode {
            FocusMode::Navigation => match classify_key(KeymapContext::Navigation, key) {
                Some(KeyAction::FieldStep(delta)) if delta > 0 => session.advance_focus(),
                Some(KeyAction::FieldStep(_)) => session.retreat_focus(),
                Some(KeyAction::BeginEdit) => session.begin_editing(),
                Some(action) => {
                    if let Some(transition) = shared_action(session, action, store) {
                        return transition;
                    }
                }
                None => {}
            },
            FocusMode::Editing => {
                if classify_key(KeymapContext::Editing, key) == Some(KeyAction::FinishEdit) {
                    session.finish_editing();
                } else {
                    let signal = session.forward_to_focused(event);
                    session.apply_signal(signal);
                }
            }
        }
        Transition::Stay
    }

    fn status_text(&self, session: &GroupSession) -> String {
        match session.mode {
            FocusMode::Navigation => {
                format!("[NAV Mode] {}", help_text(KeymapContext::Navigation))
            }
            FocusMode::Editing => format!("[EDT Mode] {}", help_text(KeymapContext::Editing)),
        }
    }
}

/// Strategy of the repository list tab; scalar edits happen in [`RepoEditor`].
#[derive(Default)]
pub(crate) struct RepositoryTabStrategy {
    modal: Option<RepoEditor>,
}

impl RepositoryTabStrategy {
    fn open(&mut self, session: &mut GroupSession, target: RepositoryRef) {
        let Some(repo) = session.group.manifest.spec.repositories.get(target.index) else {
            session.message = Some(Message::error(format!(
                "Repository #{} is no longer part of this group.",
                target.index + 1
            )));
            return;
        };
        let (editor, effect) = RepoEditor::open(target.index, repo);
        self.modal = Some(editor);
        if let Some(effect) = effect {
            session.apply_effect(effect, std::time::Instant::now());
        }
    }

    fn update_modal(&mut self, session: &mut GroupSession, event: &UiEvent) {
        let Some(editor) = self.modal.as_mut() else {
            return;
        };
        let Some(repo) = session
            .group
            .manifest
            .spec
            .repositories
            .get_mut(editor.index())
        else {
            self.modal = None;
            session.message = Some(Message::error("The repository being edited no longer exists."));
            return;
        };
        let (signal, effect) = editor.handle(repo, event);
        if let Some(effect) = effect {
            let now = match event {
                UiEvent::Tick(now) => *now,
                UiEvent::Key(_) => std::time::Instant::now(),
            };
            session.apply_effect(effect, now);
        }
        match signal {
            ModalSignal::Stay => {}
            ModalSignal::BackToList => self.modal = None,
            ModalSignal::BackToGroup => {
                self.modal = None;
                session.select_tab(0);
            }
        }
    }
}

impl TabStrategy for RepositoryTabStrategy {
    fn body(&self, session: &GroupSession) -> TabBody {
        let mut body = field_rows(session);
        let tab = session.active();
        let record = &session.group.manifest;
        body.preview = tab
            .components
            .get(session.focused_index)
            .and_then(|component| component.preview_lines(record));
        body.modal = self.modal.as_ref().and_then(|editor| {
            let repo = record.spec.repositories.get(editor.index())?;
            Some(editor.view(repo))
        });
        body
    }

    fn update(
        &mut self,
        session: &mut GroupSession,
        event: &UiEvent,
        store: &mut dyn GroupStore,
    ) -> Transition {
        if self.modal.is_some() {
            self.update_modal(session, event);
            return Transition::Stay;
        }
        // nothing in the list blinks, so the timer lapses here
        let UiEvent::Key(key) = event else {
            return Transition::Stay;
        };
        session.mode = FocusMode::Navigation;

        let shared = classify_key(KeymapContext::Repository, key)
            .and_then(|action| shared_action(session, action, store));
        if let Some(transition) = shared {
            return transition;
        }
        match session.forward_to_focused(event) {
            Signal::Open(target) => self.open(session, target),
            signal => session.apply_signal(signal),
        }
        Transition::Stay
    }

    fn status_text(&self, _session: &GroupSession) -> String {
        if self.modal.is_some() {
            format!("[REPO Edit] {}", help_text(KeymapContext::Modal))
        } else {
            format!("[REPO Mode] {}", help_text(KeymapContext::Repository))
        }
    }

    fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}
