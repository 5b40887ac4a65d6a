use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::Repository;
use crate::io::GroupFile;
use crate::presentation::{ListEntry, ListScreenView};

use super::Transition;

/// Picks the group to edit, optionally carrying a repository to add to it.
#[derive(Debug)]
pub struct SelectGroupScreen {
    groups: Vec<(String, String)>,
    selected: usize,
    pending: Option<Repository>,
}

impl SelectGroupScreen {
    pub fn new(groups: &[GroupFile], pending: Option<Repository>) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|group| (group.title().to_string(), group.description()))
                .collect(),
            selected: 0,
            pending,
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> Transition {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.groups.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some((name, _)) = self.groups.get(self.selected) {
                    return Transition::ConfigureGroup {
                        name: name.clone(),
                        pending: self.pending.clone(),
                    };
                }
            }
            KeyCode::Esc => return Transition::Menu,
            _ => {}
        }
        Transition::Stay
    }

    pub fn view(&self) -> ListScreenView {
        let title = match &self.pending {
            Some(repo) => format!("Select a group for '{}'", repo.name),
            None => "Select a group".to_string(),
        };
        ListScreenView {
            title,
            items: self
                .groups
                .iter()
                .map(|(title, description)| ListEntry {
                    title: title.clone(),
                    description: Some(description.clone()),
                })
                .collect(),
            selected: self.selected,
            empty_text: "No groups found",
            help: "Up/Down to move, Enter to select, Esc for the menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::domain::RepositoriesGroup;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn group(name: &str) -> GroupFile {
        let mut manifest = RepositoriesGroup::default();
        manifest.metadata.name = name.to_string();
        GroupFile::new(format!("{name}.yaml"), manifest)
    }

    #[test]
    fn enter_carries_pending_repository() {
        let pending = Some(Repository::new("api", "API"));
        let mut screen = SelectGroupScreen::new(&[group("core"), group("web")], pending.clone());
        screen.handle_key(&press(KeyCode::Down));
        screen.handle_key(&press(KeyCode::Down));
        assert_eq!(
            screen.handle_key(&press(KeyCode::Enter)),
            Transition::ConfigureGroup {
                name: "web".to_string(),
                pending,
            }
        );
        assert_eq!(screen.view().title, "Select a group for 'api'");
    }

    #[test]
    fn empty_store_ignores_enter() {
        let mut screen = SelectGroupScreen::new(&[], None);
        assert_eq!(screen.handle_key(&press(KeyCode::Enter)), Transition::Stay);
        assert_eq!(screen.view().empty_text, "No groups found");
        assert_eq!(screen.handle_key(&press(KeyCode::Esc)), Transition::Menu);
    }
}
