//! Native dialogs, awaited on the main context.
//!
//! Every chooser resolves to `None` when the user dismisses it.

use crate::constants::{
    ALL_FILES_FILTER_NAME, APP_NAME, COLOR_DIALOG_TITLE, DEFAULT_SAVE_NAME, TEXT_FILTER_NAME,
    TEXT_FILTER_SUFFIX,
};
use crate::text_area::FontColor;
use adw::ApplicationWindow;
use gtk4::gio::prelude::FileExt;
use gtk4::{AlertDialog, ColorDialog, FileDialog, FileFilter};
use std::path::PathBuf;

fn text_filters() -> (gio::ListStore, FileFilter) {
    let text_filter = FileFilter::new();
    text_filter.set_name(Some(TEXT_FILTER_NAME));
    text_filter.add_suffix(TEXT_FILTER_SUFFIX);

    let all_filter = FileFilter::new();
    all_filter.set_name(Some(ALL_FILES_FILTER_NAME));
    all_filter.add_pattern("*");

    let filters = gio::ListStore::new::<FileFilter>();
    filters.append(&text_filter);
    filters.append(&all_filter);
    (filters, text_filter)
}

/// Maps a dialog result to an optional value, logging real failures.
fn accept<T>(result: Result<T, glib::Error>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e)
            if e.matches(gtk4::DialogError::Dismissed)
                || e.matches(gtk4::DialogError::Cancelled) =>
        {
            tracing::debug!("{} dialog dismissed", what);
            None
        }
        Err(e) => {
            tracing::warn!("{} dialog failed: {}", what, e);
            None
        }
    }
}

/// Local path of a chosen file; remote locations are rejected with a warning.
fn local_path(file: &gio::File, what: &str) -> Option<PathBuf> {
    let path = file.path();
    if path.is_none() {
        tracing::warn!("{} dialog chose {} which has no local path", what, file.uri());
    }
    path
}

pub async fn choose_open_path(window: &ApplicationWindow) -> Option<PathBuf> {
    let (filters, default_filter) = text_filters();
    let dialog = FileDialog::builder()
        .title("Open File")
        .modal(true)
        .filters(&filters)
        .default_filter(&default_filter)
        .build();

    let file = accept(dialog.open_future(Some(window)).await, "Open")?;
    local_path(&file, "Open")
}

pub async fn choose_save_path(window: &ApplicationWindow) -> Option<PathBuf> {
    let (filters, default_filter) = text_filters();
    let dialog = FileDialog::builder()
        .title("Save File")
        .accept_label("Save")
        .modal(true)
        .initial_name(DEFAULT_SAVE_NAME)
        .filters(&filters)
        .default_filter(&default_filter)
        .build();

    let file = accept(dialog.save_future(Some(window)).await, "Save")?;
    local_path(&file, "Save")
}

pub async fn choose_font_color(window: &ApplicationWindow) -> Option<FontColor> {
    let dialog = ColorDialog::builder()
        .title(COLOR_DIALOG_TITLE)
        .modal(true)
        .with_alpha(false)
        .build();

    accept(dialog.choose_rgba_future(Some(window), None).await, "Color").map(FontColor::from)
}

/// Shows a modal informational message headed with the application name.
pub fn show_info(window: &ApplicationWindow, detail: &str) {
    let dialog = AlertDialog::builder()
        .message(APP_NAME)
        .detail(detail)
        .modal(true)
        .build();
    dialog.show(Some(window));
}
