//! UI module containing the window chrome, menus, dialogs and action handlers.

pub mod dialogs;
pub mod edit_ops;
pub mod editor;
pub mod file_ops;
pub mod header;
pub mod menu;
