mod configure;
mod fields;
mod footer;
mod layout;
mod overlay;
mod screens;
mod tabstrip;

pub use configure::render_configure;
pub use footer::render_footer;
pub use screens::{render_list_screen, render_prompt};
