use std::time::Instant;

use crossterm::event::KeyEvent;

/// Whether key input drives focus movement or is handed to the focused component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    Navigation,
    Editing,
}

/// Index of an entry in the group's repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryRef {
    pub index: usize,
}

/// Control signal a component hands back to whoever routed the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Signal {
    #[default]
    None,
    Advance,
    Retreat,
    Done,
    Open(RepositoryRef),
}

/// Deferred work requested by a component when it gains focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Schedule the cursor blink tick.
    Blink,
}

#[derive(Debug, Clone, Copy)]
pub enum UiEvent {
    Key(KeyEvent),
    Tick(Instant),
}

impl UiEvent {
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            UiEvent::Key(key) => Some(key),
            UiEvent::Tick(_) => None,
        }
    }
}
