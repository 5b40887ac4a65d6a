mod configure;
mod editor;
pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod router;
mod runtime;
pub mod screens;
mod status;
mod terminal;

pub use configure::ConfigureGroup;
pub use editor::GroupEditor;
pub use options::UiOptions;
pub use router::{Router, Screen};
pub use screens::Transition;
pub use status::{Message, MessageKind};
