mod components;
mod view;

pub use view::{
    ConfigureView, ListEntry, ListScreenView, ModalView, PromptView, ScreenView, TabBody,
    UiContext, draw,
};
