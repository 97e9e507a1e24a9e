use adw::StyleManager;
use gtk4::prelude::*;
use gtk4::{ScrolledWindow, WrapMode};
use sourceview5::prelude::*;
use sourceview5::{Buffer, StyleSchemeManager, View};

/// Creates the plain-text editing area and its scrolled container.
///
/// Highlighting and undo are off; the buffer only ever holds plain text plus
/// the font-color tags applied from the Format menu.
pub fn create_editor(style_manager: &StyleManager) -> (Buffer, View, ScrolledWindow) {
    let buffer = Buffer::new(None);
    buffer.set_highlight_syntax(false);
    buffer.set_enable_undo(false);

    let editor_view = View::with_buffer(&buffer);
    editor_view.set_monospace(true);
    editor_view.set_show_line_numbers(false);
    editor_view.set_wrap_mode(WrapMode::WordChar);
    editor_view.set_top_margin(4);
    editor_view.set_left_margin(4);

    fn update_editor_theme(buffer: &Buffer, is_dark: bool) {
        let scheme_manager = StyleSchemeManager::default();
        let scheme_id = if is_dark { "Adwaita-dark" } else { "Adwaita" };
        if let Some(scheme) = scheme_manager.scheme(scheme_id) {
            buffer.set_style_scheme(Some(&scheme));
        } else {
            let fallback = if is_dark { "classic-dark" } else { "classic" };
            if let Some(scheme) = scheme_manager.scheme(fallback) {
                buffer.set_style_scheme(Some(&scheme));
            }
        }
    }

    update_editor_theme(&buffer, style_manager.is_dark());

    style_manager.connect_dark_notify(glib::clone!(
        #[weak]
        buffer,
        move |sm| {
            update_editor_theme(&buffer, sm.is_dark());
        }
    ));

    let editor_scroll = ScrolledWindow::builder()
        .child(&editor_view)
        .hexpand(true)
        .vexpand(true)
        .build();

    (buffer, editor_view, editor_scroll)
}
