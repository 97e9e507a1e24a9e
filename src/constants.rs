//! Application-wide constants for notepad-rs.
//!
//! Centralizes labels, sizes and dialog texts so the UI modules stay free of
//! magic strings.

// ============================================================================
// Application Identity
// ============================================================================

/// GTK Application ID following reverse-DNS convention.
pub const APP_ID: &str = "com.github.notepad-rs";

/// Application name, used as the window title suffix and dialog heading.
pub const APP_NAME: &str = "Notepad";

/// Display name of a document that has never been saved or loaded.
pub const UNTITLED_NAME: &str = "Untitled";

/// Themed icon used for the main window, when the icon theme provides it.
pub const APP_ICON_NAME: &str = "accessories-text-editor";

// ============================================================================
// Window Configuration
// ============================================================================

/// Default window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;

/// Default window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;

// ============================================================================
// Dialogs
// ============================================================================

/// File name proposed by the save dialog for an untitled document.
pub const DEFAULT_SAVE_NAME: &str = "Untitled.txt";

pub const TEXT_FILTER_NAME: &str = "Text Documents";
pub const TEXT_FILTER_SUFFIX: &str = "txt";
pub const ALL_FILES_FILTER_NAME: &str = "All Files";

pub const COLOR_DIALOG_TITLE: &str = "Choose Text Color";

pub const ABOUT_TEXT: &str = "Notepad by Mrinal Verma";

/// Shown when a font color is chosen while nothing is selected.
pub const NO_SELECTION_TEXT: &str = "Please select text to change color.";

// ============================================================================
// Formatting
// ============================================================================

/// Prefix shared by every font-color tag registered in the buffer's tag table.
pub const COLOR_TAG_PREFIX: &str = "font-color-";
