use crossterm::event::{KeyCode, KeyEvent};

use crate::presentation::{ListEntry, ListScreenView};

use super::Transition;

const ITEMS: [(&str, &str); 2] = [
    ("Create a new repo", "Add a repository to one of the groups"),
    (
        "Configure an existing repo",
        "Edit group settings and their repositories",
    ),
];

#[derive(Debug, Default)]
pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(ITEMS.len() - 1);
            }
            KeyCode::Enter => {
                return match self.selected {
                    0 => Transition::CreateRepo,
                    _ => Transition::SelectGroup { pending: None },
                };
            }
            KeyCode::Char('q') => return Transition::Quit,
            _ => {}
        }
        Transition::Stay
    }

    pub fn view(&self) -> ListScreenView {
        ListScreenView {
            title: "Repository groups".to_string(),
            items: ITEMS
                .iter()
                .map(|(title, description)| ListEntry {
                    title: title.to_string(),
                    description: Some(description.to_string()),
                })
                .collect(),
            selected: self.selected,
            empty_text: "",
            help: "Up/Down to move, Enter to select, q to quit",
        }
    }
}
