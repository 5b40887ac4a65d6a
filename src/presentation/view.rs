use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::Message;
use crate::form::FieldView;

use super::components::{render_configure, render_footer, render_list_screen, render_prompt};

/// Everything one frame needs, produced by the router.
pub struct UiContext {
    pub screen: ScreenView,
    pub message: Option<Message>,
    pub show_help: bool,
}

pub enum ScreenView {
    Menu(ListScreenView),
    CreateRepo(PromptView),
    SelectGroup(ListScreenView),
    Configure(ConfigureView),
}

pub struct ListScreenView {
    pub title: String,
    pub items: Vec<ListEntry>,
    pub selected: usize,
    pub empty_text: &'static str,
    pub help: &'static str,
}

pub struct ListEntry {
    pub title: String,
    pub description: Option<String>,
}

pub struct PromptView {
    pub title: String,
    pub prompt: &'static str,
    pub value: String,
    pub cursor: usize,
    pub help: &'static str,
}

pub struct ConfigureView {
    pub title: String,
    pub tabs: Vec<&'static str>,
    pub active_tab: usize,
    pub body: TabBody,
    pub status: String,
}

/// Contents of the active tab as its strategy lays them out.
#[derive(Debug, Default)]
pub struct TabBody {
    pub fields: Vec<FieldView>,
    /// Row carrying the navigation marker.
    pub selected: Option<usize>,
    pub placeholder: Option<&'static str>,
    pub preview: Option<Vec<String>>,
    pub modal: Option<ModalView>,
}

#[derive(Debug)]
pub struct ModalView {
    pub title: String,
    pub fields: Vec<FieldView>,
    pub selected: usize,
}

pub fn draw(frame: &mut Frame<'_>, ctx: &UiContext) {
    let footer_height = if ctx.show_help { 3 } else { 1 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(footer_height)])
        .split(frame.area());

    let status = match &ctx.screen {
        ScreenView::Menu(view) | ScreenView::SelectGroup(view) => {
            render_list_screen(frame, chunks[0], view);
            view.help.to_string()
        }
        ScreenView::CreateRepo(view) => {
            render_prompt(frame, chunks[0], view);
            view.help.to_string()
        }
        ScreenView::Configure(view) => {
            render_configure(frame, chunks[0], view);
            view.status.clone()
        }
    };
    let help = ctx.show_help.then_some(status.as_str());
    render_footer(frame, chunks[1], help, ctx.message.as_ref());
}
