use gtk4::prelude::GtkApplicationExt;
use gtk4::PopoverMenuBar;

// Window-scoped action names, registered on the main window.
pub const ACTION_NEW: &str = "new";
pub const ACTION_OPEN: &str = "open";
pub const ACTION_SAVE: &str = "save";
pub const ACTION_QUIT: &str = "quit";
pub const ACTION_CUT: &str = "cut";
pub const ACTION_COPY: &str = "copy";
pub const ACTION_PASTE: &str = "paste";
pub const ACTION_FONT_COLOR: &str = "font-color";
pub const ACTION_ABOUT: &str = "about";

fn win(action: &str) -> String {
    format!("win.{}", action)
}

fn submenu(items: &[(&str, &str)]) -> gio::Menu {
    let menu = gio::Menu::new();
    for (label, action) in items {
        menu.append(Some(*label), Some(win(action).as_str()));
    }
    menu
}

/// Builds the File / Edit / Format / Help menu bar.
pub fn create_menu_bar() -> PopoverMenuBar {
    let model = gio::Menu::new();

    let file_menu = submenu(&[("New", ACTION_NEW), ("Open", ACTION_OPEN), ("Save", ACTION_SAVE)]);
    file_menu.append_section(None, &submenu(&[("Exit", ACTION_QUIT)]));
    model.append_submenu(Some("File"), &file_menu);

    let edit_menu = submenu(&[("Cut", ACTION_CUT), ("Copy", ACTION_COPY), ("Paste", ACTION_PASTE)]);
    model.append_submenu(Some("Edit"), &edit_menu);

    let format_menu = submenu(&[("Font Color", ACTION_FONT_COLOR)]);
    model.append_submenu(Some("Format"), &format_menu);

    let help_menu = submenu(&[("About Notepad", ACTION_ABOUT)]);
    model.append_submenu(Some("Help"), &help_menu);

    PopoverMenuBar::from_model(Some(&model))
}

/// Fixed keyboard accelerators for the file commands.
///
/// Cut/Copy/Paste keep the text view's built-in bindings.
pub fn register_accels(app: &adw::Application) {
    app.set_accels_for_action(&win(ACTION_NEW), &["<Control>n"]);
    app.set_accels_for_action(&win(ACTION_OPEN), &["<Control>o"]);
    app.set_accels_for_action(&win(ACTION_SAVE), &["<Control>s"]);
    app.set_accels_for_action(&win(ACTION_QUIT), &["<Control>q"]);
}
