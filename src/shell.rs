//! Menu command handlers.
//!
//! Each handler receives the outcome of its native dialog as an `Option`:
//! `None` means the user dismissed the dialog and nothing changes.

use crate::state::AppState;
use crate::text_area::{FontColor, TagError, TextArea};
use crate::utils::{open_file, save_file};
use anyhow::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Cut,
    Copy,
    Paste,
}

/// Result of a font color request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOutcome {
    Applied(FontColor),
    /// A color was chosen but no text was selected; the buffer is untouched.
    NoSelection,
    Cancelled,
}

/// Forgets the current path and empties the buffer.
pub fn new_document(state: &mut AppState, area: &impl TextArea) {
    state.current_file = None;
    area.clear();
    tracing::info!("Started a new document");
}

/// Loads `chosen` into the buffer.
///
/// Returns `Ok(false)` when the dialog was cancelled. The file is read before
/// anything is touched, so a failed read leaves buffer and path as they were.
pub fn open_document(
    state: &mut AppState,
    area: &impl TextArea,
    chosen: Option<PathBuf>,
) -> Result<bool> {
    let Some(path) = chosen else {
        return Ok(false);
    };

    let content = open_file(&path)?;
    area.set_text(&content);
    tracing::info!("Opened {:?} ({} bytes)", path, content.len());
    state.current_file = Some(path);
    Ok(true)
}

/// Writes the buffer to the current path, or to `chosen` when the document
/// has no path yet.
///
/// Returns `Ok(false)` when there is nowhere to write, i.e. the save dialog
/// was cancelled.
pub fn save_document(
    state: &mut AppState,
    area: &impl TextArea,
    chosen: Option<PathBuf>,
) -> Result<bool> {
    let Some(path) = state.current_file.clone().or(chosen) else {
        return Ok(false);
    };

    let content = area.text();
    save_file(&path, &content)?;
    tracing::info!("Saved {:?} ({} bytes)", path, content.len());
    state.current_file = Some(path);
    Ok(true)
}

pub fn edit(area: &impl TextArea, command: EditCommand) {
    tracing::debug!("Clipboard command: {:?}", command);
    match command {
        EditCommand::Cut => area.cut(),
        EditCommand::Copy => area.copy(),
        EditCommand::Paste => area.paste(),
    }
}

/// Applies `chosen` to the current selection.
///
/// A missing selection is reported as [`ColorOutcome::NoSelection`] so the
/// caller can tell the user; any other tag failure is returned as an error.
pub fn change_font_color(
    area: &impl TextArea,
    chosen: Option<FontColor>,
) -> Result<ColorOutcome, TagError> {
    let Some(color) = chosen else {
        return Ok(ColorOutcome::Cancelled);
    };

    match area.apply_foreground(color) {
        Ok(()) => {
            tracing::info!("Applied font color {}", color.to_hex());
            Ok(ColorOutcome::Applied(color))
        }
        Err(TagError::NoSelection) => Ok(ColorOutcome::NoSelection),
        Err(e) => Err(e),
    }
}
