use crate::state::AppState;
use crate::ui::menu::create_menu_bar;
use adw::prelude::*;
use adw::{ApplicationWindow, HeaderBar, WindowTitle};

/// Creates the header bar carrying the menu bar and the document title.
pub fn create_header_bar(state: &AppState) -> (HeaderBar, WindowTitle) {
    let header_bar = HeaderBar::new();
    let view_title = WindowTitle::new(&state.window_title(), "");
    header_bar.set_title_widget(Some(&view_title));
    header_bar.pack_start(&create_menu_bar());
    (header_bar, view_title)
}

/// Brings the window title back in line with the current document path.
pub fn sync_title(window: &ApplicationWindow, view_title: &WindowTitle, state: &AppState) {
    let title = state.window_title();
    window.set_title(Some(title.as_str()));
    view_title.set_title(&title);
    let subtitle = state
        .current_file
        .as_ref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    view_title.set_subtitle(&subtitle);
}
