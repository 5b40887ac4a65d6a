use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::domain::Repository;
use crate::form::UiEvent;
use crate::io::GroupStore;
use crate::presentation::{ScreenView, UiContext};

use super::configure::ConfigureGroup;
use super::screens::{CreateRepoScreen, MenuScreen, SelectGroupScreen, Transition};
use super::status::Message;

pub enum Screen {
    Menu(MenuScreen),
    CreateRepo(CreateRepoScreen),
    SelectGroup(SelectGroupScreen),
    ConfigureGroup(Box<ConfigureGroup>),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu(_) => "menu",
            Screen::CreateRepo(_) => "create-repo",
            Screen::SelectGroup(_) => "select-group",
            Screen::ConfigureGroup(_) => "configure-group",
        }
    }
}

/// Owns the active screen and the store, and applies screen transitions.
pub struct Router<S: GroupStore> {
    store: S,
    screen: Screen,
    message: Option<Message>,
    blink_interval: Duration,
    should_quit: bool,
}

impl<S: GroupStore> Router<S> {
    pub fn new(store: S, blink_interval: Duration) -> Self {
        Self {
            store,
            screen: Screen::Menu(MenuScreen::default()),
            message: None,
            blink_interval,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.message = None;
        let transition = match &mut self.screen {
            Screen::Menu(menu) => menu.handle_key(&key),
            Screen::CreateRepo(create) => create.handle_key(&key),
            Screen::SelectGroup(select) => select.handle_key(&key),
            Screen::ConfigureGroup(configure) => {
                configure.handle_event(&UiEvent::Key(key), &mut self.store)
            }
        };
        self.apply(transition);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.screen {
            Screen::ConfigureGroup(configure) => configure.blink_deadline(),
            _ => None,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Screen::ConfigureGroup(configure) = &mut self.screen {
            configure.tick(now, &mut self.store);
        }
    }

    fn apply(&mut self, transition: Transition) {
        let next = match transition {
            Transition::Stay => return,
            Transition::Quit => {
                self.should_quit = true;
                return;
            }
            Transition::Menu => Screen::Menu(MenuScreen::default()),
            Transition::CreateRepo => Screen::CreateRepo(CreateRepoScreen::default()),
            Transition::SelectGroup { pending } => {
                Screen::SelectGroup(SelectGroupScreen::new(self.store.list_groups(), pending))
            }
            Transition::ConfigureGroup { name, pending } => {
                match self.open_group(&name, pending) {
                    Some(screen) => screen,
                    None => return,
                }
            }
        };
        debug!(from = self.screen.name(), to = next.name(), "screen transition");
        self.screen = next;
    }

    fn open_group(&mut self, name: &str, pending: Option<Repository>) -> Option<Screen> {
        let Some(group) = self.store.get_group(name) else {
            warn!(group = name, "group lookup failed");
            self.message = Some(Message::error(format!("Group '{name}' not found.")));
            return None;
        };
        let mut configure = ConfigureGroup::new(group, self.blink_interval);
        if let Some(repo) = pending {
            configure.add_repository(repo);
        }
        Some(Screen::ConfigureGroup(Box::new(configure)))
    }

    pub fn view(&self, show_help: bool) -> UiContext {
        let (screen, screen_message) = match &self.screen {
            Screen::Menu(menu) => (ScreenView::Menu(menu.view()), None),
            Screen::CreateRepo(create) => {
                (ScreenView::CreateRepo(create.view()), create.message().cloned())
            }
            Screen::SelectGroup(select) => (ScreenView::SelectGroup(select.view()), None),
            Screen::ConfigureGroup(configure) => {
                (ScreenView::Configure(configure.view()), configure.message().cloned())
            }
        };
        UiContext {
            screen,
            message: self.message.clone().or(screen_message),
            show_help,
        }
    }
}
