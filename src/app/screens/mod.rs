mod create_repo;
mod menu;
mod select_group;

pub use create_repo::CreateRepoScreen;
pub use menu::MenuScreen;
pub use select_group::SelectGroupScreen;

use crate::domain::Repository;

/// Where the router should go after a screen handled an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Stay,
    Menu,
    CreateRepo,
    SelectGroup { pending: Option<Repository> },
    ConfigureGroup {
        name: String,
        pending: Option<Repository>,
    },
    Quit,
}
