mod binding;
pub mod components;
mod signal;
mod tabs;

pub use binding::{BindSkip, UnresolvedPath, bind, bind_records, unresolved_paths};
pub use components::{
    CheckboxComponent, ComponentKind, FieldComponent, FieldView, RepositoriesComponent,
    TextBinding, TextInputComponent,
};
pub use signal::{Effect, FocusMode, RepositoryRef, Signal, UiEvent};
pub use tabs::{REPOSITORY_EDITABLE_FIELDS, TABS, TabModel};
