use crate::constants::{ABOUT_TEXT, NO_SELECTION_TEXT};
use crate::shell::{change_font_color, edit, ColorOutcome, EditCommand};
use crate::text_area::GtkTextArea;
use crate::ui::dialogs::{choose_font_color, show_info};
use crate::ui::menu::{ACTION_ABOUT, ACTION_COPY, ACTION_CUT, ACTION_FONT_COLOR, ACTION_PASTE};
use adw::prelude::*;
use adw::ApplicationWindow;
use gio::SimpleAction;

/// Connects the Edit, Format and Help menu actions to the window.
pub fn connect_edit_operations(window: &ApplicationWindow, area: &GtkTextArea) {
    for (name, command) in [
        (ACTION_CUT, EditCommand::Cut),
        (ACTION_COPY, EditCommand::Copy),
        (ACTION_PASTE, EditCommand::Paste),
    ] {
        let action = SimpleAction::new(name, None);
        action.connect_activate(glib::clone!(
            #[strong]
            area,
            move |_, _| edit(&area, command)
        ));
        window.add_action(&action);
    }

    // Font Color
    let color_action = SimpleAction::new(ACTION_FONT_COLOR, None);
    color_action.connect_activate(glib::clone!(
        #[weak]
        window,
        #[strong]
        area,
        move |_, _| {
            glib::MainContext::default().spawn_local(glib::clone!(
                #[weak]
                window,
                #[strong]
                area,
                async move {
                    let chosen = choose_font_color(&window).await;
                    match change_font_color(&area, chosen) {
                        Ok(ColorOutcome::NoSelection) => show_info(&window, NO_SELECTION_TEXT),
                        Ok(_) => {}
                        Err(e) => tracing::error!("Failed to apply font color: {}", e),
                    }
                }
            ));
        }
    ));
    window.add_action(&color_action);

    // About
    let about_action = SimpleAction::new(ACTION_ABOUT, None);
    about_action.connect_activate(glib::clone!(
        #[weak]
        window,
        move |_, _| show_info(&window, ABOUT_TEXT)
    ));
    window.add_action(&about_action);
}
