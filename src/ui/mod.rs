mod panels;
mod scatter_view;
mod ui_config;
mod ui_text;

pub(crate) use scatter_view::show_scatter;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
