use std::time::Instant;

use tracing::{debug, info, warn};

use crate::app::status::Message;
use crate::domain::RepositoriesGroup;
use crate::form::{Effect, FieldComponent, FocusMode, Signal, TabModel, UiEvent};
use crate::io::{GroupFile, GroupStore};

use super::blink::BlinkTimer;

pub(crate) struct TabState {
    pub(crate) model: &'static TabModel,
    pub(crate) components: Vec<Box<dyn FieldComponent<RepositoriesGroup>>>,
}

/// Mutable editing state shared by every tab strategy.
pub(crate) struct GroupSession {
    pub(crate) tabs: Vec<TabState>,
    pub(crate) active_tab: usize,
    pub(crate) focused_index: usize,
    pub(crate) mode: FocusMode,
    pub(crate) group: GroupFile,
    pub(crate) message: Option<Message>,
    pub(crate) blink: BlinkTimer,
}

impl GroupSession {
    pub(crate) fn active(&self) -> &TabState {
        &self.tabs[self.active_tab]
    }

    pub(crate) fn advance_focus(&mut self) {
        self.step_focus(1);
    }

    pub(crate) fn retreat_focus(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, delta: i32) {
        let len = self.active().components.len();
        if len == 0 {
            return;
        }
        self.blur_current();
        let next = self.focused_index as i32 + delta;
        let len = len as i32;
        self.focused_index = (((next % len) + len) % len) as usize;
        self.focus_current();
    }

    pub(crate) fn switch_tab(&mut self, delta: i32) {
        let len = self.tabs.len() as i32;
        let next = self.active_tab as i32 + delta;
        self.select_tab((((next % len) + len) % len) as usize);
    }

    pub(crate) fn select_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.blur_current();
        self.active_tab = index;
        self.focused_index = 0;
        if !self.active().model.group_level {
            self.mode = FocusMode::Navigation;
        }
        self.focus_current();
        debug!(tab = self.active().model.name, "tab activated");
    }

    pub(crate) fn begin_editing(&mut self) {
        if self.active().components.is_empty() {
            return;
        }
        self.mode = FocusMode::Editing;
        self.focus_current();
    }

    pub(crate) fn finish_editing(&mut self) {
        self.mode = FocusMode::Navigation;
        self.blur_current();
    }

    pub(crate) fn focus_current(&mut self) {
        let index = self.focused_index;
        let mode = self.mode;
        let effect = self.tabs[self.active_tab]
            .components
            .get_mut(index)
            .and_then(|component| component.focus(mode));
        if let Some(effect) = effect {
            self.apply_effect(effect, Instant::now());
        }
    }

    fn blur_current(&mut self) {
        let index = self.focused_index;
        if let Some(component) = self.tabs[self.active_tab].components.get_mut(index) {
            component.blur();
        }
    }

    pub(crate) fn apply_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Blink => self.blink.arm(now),
        }
    }

    /// Routes an event to the focused component of the active tab.
    pub(crate) fn forward_to_focused(&mut self, event: &UiEvent) -> Signal {
        let mode = self.mode;
        let index = self.focused_index;
        let record = &mut self.group.manifest;
        match self.tabs[self.active_tab].components.get_mut(index) {
            Some(component) => component.handle_input(record, event, mode),
            None => Signal::None,
        }
    }

    pub(crate) fn broadcast(&mut self, event: &UiEvent) {
        let mode = self.mode;
        let record = &mut self.group.manifest;
        for component in &mut self.tabs[self.active_tab].components {
            component.handle_input(record, event, mode);
        }
    }

    /// Applies a field-level signal; `Open` is left to the caller.
    pub(crate) fn apply_signal(&mut self, signal: Signal) {
        match signal {
            Signal::Advance => self.advance_focus(),
            Signal::Retreat => self.retreat_focus(),
            Signal::Done => self.finish_editing(),
            Signal::None | Signal::Open(_) => {}
        }
    }

    pub(crate) fn save(&mut self, store: &mut dyn GroupStore) {
        let title = self.group.title().to_string();
        match store.save_group(&self.group) {
            Ok(()) => {
                info!(group = %title, "save requested from editor succeeded");
                self.message = Some(Message::saved(&title));
            }
            Err(err) => {
                warn!(group = %title, error = %err, "save failed");
                self.message = Some(Message::save_failed(&title, &err));
            }
        }
    }
}
