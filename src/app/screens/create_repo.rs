use std::sync::LazyLock;

use crossterm::event::{KeyCode, KeyEvent};
use regex::Regex;

use crate::app::status::Message;
use crate::domain::Repository;
use crate::form::components::helpers::handle_text_edit;
use crate::presentation::PromptView;

use super::Transition;

static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("repository name pattern"));

const EMPTY_INPUT: &str = "please enter a value";
const INVALID_NAME: &str =
    "Repository names may only contain letters, digits, '.', '-' and '_'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Name,
    Description,
}

/// Two-step prompt collecting a new repository's name and description.
#[derive(Debug)]
pub struct CreateRepoScreen {
    step: Step,
    name: String,
    buffer: String,
    cursor: usize,
    message: Option<Message>,
}

impl Default for CreateRepoScreen {
    fn default() -> Self {
        Self {
            step: Step::Name,
            name: String::new(),
            buffer: String::new(),
            cursor: 0,
            message: None,
        }
    }
}

impl CreateRepoScreen {
    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        self.message = None;
        match key.code {
            KeyCode::Esc => Transition::Menu,
            KeyCode::Enter => self.submit(),
            _ => {
                handle_text_edit(&mut self.buffer, &mut self.cursor, key);
                Transition::Stay
            }
        }
    }

    fn submit(&mut self) -> Transition {
        let value = self.buffer.trim().to_string();
        if value.is_empty() {
            self.message = Some(Message::warning(EMPTY_INPUT));
            return Transition::Stay;
        }
        match self.step {
            Step::Name => {
                if !REPO_NAME.is_match(&value) {
                    self.message = Some(Message::error(INVALID_NAME));
                    return Transition::Stay;
                }
                self.name = value;
                self.step = Step::Description;
                self.buffer.clear();
                self.cursor = 0;
                Transition::Stay
            }
            Step::Description => Transition::SelectGroup {
                pending: Some(Repository::new(std::mem::take(&mut self.name), value)),
            },
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn view(&self) -> PromptView {
        let (title, prompt) = match self.step {
            Step::Name => ("Create a new repo".to_string(), "Repository name"),
            Step::Description => (
                format!("Create a new repo: {}", self.name),
                "Repository description",
            ),
        };
        PromptView {
            title,
            prompt,
            value: self.buffer.clone(),
            cursor: self.cursor,
            help: "Enter to confirm, Esc to go back to the menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut CreateRepoScreen, text: &str) {
        for ch in text.chars() {
            screen.handle_key(&press(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn empty_input_asks_for_a_value() {
        let mut screen = CreateRepoScreen::default();
        assert_eq!(screen.handle_key(&press(KeyCode::Enter)), Transition::Stay);
        assert_eq!(screen.message().map(|m| m.text.as_str()), Some(EMPTY_INPUT));
    }

    #[test]
    fn invalid_name_is_rejected() {
        let mut screen = CreateRepoScreen::default();
        type_text(&mut screen, "bad name");
        screen.handle_key(&press(KeyCode::Enter));
        assert_eq!(screen.message().map(|m| m.text.as_str()), Some(INVALID_NAME));
    }

    #[test]
    fn both_steps_yield_a_pending_repository() {
        let mut screen = CreateRepoScreen::default();
        type_text(&mut screen, "svc-api");
        assert_eq!(screen.handle_key(&press(KeyCode::Enter)), Transition::Stay);
        type_text(&mut screen, "Service API");
        let transition = screen.handle_key(&press(KeyCode::Enter));
        assert_eq!(
            transition,
            Transition::SelectGroup {
                pending: Some(Repository::new("svc-api", "Service API")),
            }
        );
    }
}
