#![deny(rust_2018_idioms)]

pub mod app;
pub mod domain;
pub mod form;
pub mod io;
pub mod presentation;

pub use app::{
    ConfigureGroup, GroupEditor, Message, MessageKind, Router, Screen, Transition, UiOptions,
};
pub use io::{GroupFile, GroupStore, ManifestStore, StoreError};

pub mod prelude {
    pub use super::{GroupEditor, UiOptions};
}
