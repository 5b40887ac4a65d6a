mod base;
mod checkbox;
pub(crate) mod helpers;
mod repositories;
mod text;

pub use base::{ComponentKind, FieldComponent, FieldView};
pub use checkbox::CheckboxComponent;
pub use repositories::RepositoriesComponent;
pub use text::{TextBinding, TextInputComponent};
