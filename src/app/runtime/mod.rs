use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use tracing::info;

use crate::io::GroupStore;
use crate::presentation;

use super::{options::UiOptions, router::Router, terminal::TerminalGuard};

pub(crate) struct App<S: GroupStore> {
    router: Router<S>,
    options: UiOptions,
}

impl<S: GroupStore> App<S> {
    pub(crate) fn new(store: S, options: UiOptions) -> Self {
        Self {
            router: Router::new(store, options.blink_interval),
            options,
        }
    }

    pub(crate) fn run(&mut self) -> Result<()> {
        let mut terminal = TerminalGuard::enter()?;
        while !self.router.should_quit() {
            terminal.draw(|frame| presentation::draw(frame, &self.router.view(self.options.show_help)))?;

            let now = Instant::now();
            let timeout = self
                .router
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now).min(self.options.tick_rate))
                .unwrap_or(self.options.tick_rate);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(width, height) => {
                        terminal.resize(Rect::new(0, 0, width, height))?;
                    }
                    Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
            self.router.tick(Instant::now());
        }
        info!("editor closed");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.router.handle_key(key);
    }
}
