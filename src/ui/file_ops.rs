use crate::shell::{new_document, open_document, save_document};
use crate::state::AppState;
use crate::text_area::GtkTextArea;
use crate::ui::dialogs::{choose_open_path, choose_save_path};
use crate::ui::header::sync_title;
use crate::ui::menu::{ACTION_NEW, ACTION_OPEN, ACTION_QUIT, ACTION_SAVE};
use adw::prelude::*;
use adw::{ApplicationWindow, WindowTitle};
use gio::SimpleAction;
use std::cell::RefCell;
use std::rc::Rc;

/// Connects the File menu actions (New, Open, Save, Exit) to the window.
pub fn connect_file_operations(
    window: &ApplicationWindow,
    area: &GtkTextArea,
    state: Rc<RefCell<AppState>>,
    view_title: &WindowTitle,
) {
    // New
    let new_action = SimpleAction::new(ACTION_NEW, None);
    new_action.connect_activate(glib::clone!(
        #[weak]
        window,
        #[weak]
        view_title,
        #[strong]
        area,
        #[strong]
        state,
        move |_, _| {
            new_document(&mut state.borrow_mut(), &area);
            sync_title(&window, &view_title, &state.borrow());
        }
    ));
    window.add_action(&new_action);

    // Open
    let open_action = SimpleAction::new(ACTION_OPEN, None);
    open_action.connect_activate(glib::clone!(
        #[weak]
        window,
        #[weak]
        view_title,
        #[strong]
        area,
        #[strong]
        state,
        move |_, _| {
            glib::MainContext::default().spawn_local(glib::clone!(
                #[weak]
                window,
                #[weak]
                view_title,
                #[strong]
                area,
                #[strong]
                state,
                async move {
                    let chosen = choose_open_path(&window).await;
                    let result = open_document(&mut state.borrow_mut(), &area, chosen);
                    match result {
                        Ok(true) => sync_title(&window, &view_title, &state.borrow()),
                        Ok(false) => {}
                        Err(e) => tracing::error!("Failed to open: {:#}", e),
                    }
                }
            ));
        }
    ));
    window.add_action(&open_action);

    // Save
    let save_action = SimpleAction::new(ACTION_SAVE, None);
    save_action.connect_activate(glib::clone!(
        #[weak]
        window,
        #[weak]
        view_title,
        #[strong]
        area,
        #[strong]
        state,
        move |_, _| {
            glib::MainContext::default().spawn_local(glib::clone!(
                #[weak]
                window,
                #[weak]
                view_title,
                #[strong]
                area,
                #[strong]
                state,
                async move {
                    let needs_dialog = state.borrow().current_file.is_none();
                    let chosen = if needs_dialog {
                        choose_save_path(&window).await
                    } else {
                        None
                    };
                    let result = save_document(&mut state.borrow_mut(), &area, chosen);
                    match result {
                        Ok(true) => sync_title(&window, &view_title, &state.borrow()),
                        Ok(false) => {}
                        Err(e) => tracing::error!("Failed to save: {:#}", e),
                    }
                }
            ));
        }
    ));
    window.add_action(&save_action);

    // Exit
    let quit_action = SimpleAction::new(ACTION_QUIT, None);
    quit_action.connect_activate(glib::clone!(
        #[weak]
        window,
        move |_, _| {
            tracing::info!("Closing main window");
            window.close();
        }
    ));
    window.add_action(&quit_action);
}
