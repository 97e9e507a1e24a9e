mod constants;
mod shell;
mod state;
mod text_area;
mod ui;
mod utils;

use adw::prelude::*;
use adw::{Application, ApplicationWindow, StyleManager};
use gtk4::{glib, IconTheme, Orientation};
use std::cell::RefCell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

use crate::constants::{APP_ICON_NAME, APP_ID, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::state::AppState;
use crate::text_area::GtkTextArea;

fn main() -> glib::ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_startup(ui::menu::register_accels);
    app.connect_activate(build_ui);

    app.run()
}

fn build_ui(app: &Application) {
    let state = Rc::new(RefCell::new(AppState::new()));

    let window = ApplicationWindow::builder()
        .application(app)
        .default_width(DEFAULT_WINDOW_WIDTH)
        .default_height(DEFAULT_WINDOW_HEIGHT)
        .title(state.borrow().window_title())
        .build();

    // A missing icon only costs the window its decoration
    if IconTheme::for_display(&WidgetExt::display(&window)).has_icon(APP_ICON_NAME) {
        window.set_icon_name(Some(APP_ICON_NAME));
    } else {
        tracing::debug!("Icon {} not found in theme, skipping", APP_ICON_NAME);
    }

    let content_box = gtk4::Box::new(Orientation::Vertical, 0);
    window.set_content(Some(&content_box));

    let (header_bar, view_title) = ui::header::create_header_bar(&state.borrow());
    content_box.append(&header_bar);

    let (buffer, editor_view, editor_scroll) = ui::editor::create_editor(&StyleManager::default());
    content_box.append(&editor_scroll);

    let area = GtkTextArea::new(&editor_view, &buffer);
    ui::file_ops::connect_file_operations(&window, &area, state.clone(), &view_title);
    ui::edit_ops::connect_edit_operations(&window, &area);

    editor_view.grab_focus();
    window.present();
    tracing::info!("Notepad window ready");
}
