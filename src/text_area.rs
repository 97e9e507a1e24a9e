//! The editable text widget, seen through the operations the menu handlers need.
//!
//! Handlers in [`crate::shell`] only talk to [`TextArea`], which keeps them
//! independent of a live display. [`GtkTextArea`] is the GTK implementation.

use crate::constants::COLOR_TAG_PREFIX;
use crate::utils::buffer_to_string;
use gtk4::gdk;
use gtk4::prelude::*;
use sourceview5::{Buffer, View};
use thiserror::Error;

/// Errors raised while styling the buffer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    /// A color was requested but the buffer has no selection.
    #[error("no text is selected")]
    NoSelection,
    /// The tag table refused a new color tag.
    #[error("failed to register tag {0}")]
    Register(String),
}

/// An opaque foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl FontColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// `#rrggbb` form, as understood by the `foreground` tag property.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Name of the buffer tag dedicated to this color.
    pub fn tag_name(&self) -> String {
        format!("{}{}", COLOR_TAG_PREFIX, self.to_hex())
    }
}

impl From<gdk::RGBA> for FontColor {
    fn from(rgba: gdk::RGBA) -> Self {
        fn channel(value: f32) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(rgba.red()), channel(rgba.green()), channel(rgba.blue()))
    }
}

pub trait TextArea {
    /// Full buffer content.
    fn text(&self) -> String;
    /// Replaces the whole content, dropping any styling.
    fn set_text(&self, text: &str);
    fn clear(&self) {
        self.set_text("");
    }
    /// Selected span as `(start, end)` character offsets, if non-empty.
    fn selection(&self) -> Option<(i32, i32)>;
    /// Colors the selected span only.
    fn apply_foreground(&self, color: FontColor) -> Result<(), TagError>;
    fn cut(&self);
    fn copy(&self);
    fn paste(&self);
}

/// [`TextArea`] backed by the editor's sourceview widget.
#[derive(Clone)]
pub struct GtkTextArea {
    view: View,
    buffer: Buffer,
}

impl GtkTextArea {
    pub fn new(view: &View, buffer: &Buffer) -> Self {
        Self {
            view: view.clone(),
            buffer: buffer.clone(),
        }
    }

    fn clipboard(&self) -> gdk::Clipboard {
        self.view.clipboard()
    }
}

impl TextArea for GtkTextArea {
    fn text(&self) -> String {
        buffer_to_string(self.buffer.upcast_ref())
    }

    fn set_text(&self, text: &str) {
        self.buffer.set_text(text);
    }

    fn selection(&self) -> Option<(i32, i32)> {
        self.buffer
            .selection_bounds()
            .map(|(start, end)| (start.offset(), end.offset()))
    }

    fn apply_foreground(&self, color: FontColor) -> Result<(), TagError> {
        let (start, end) = self.selection().ok_or(TagError::NoSelection)?;
        let start = self.buffer.iter_at_offset(start);
        let end = self.buffer.iter_at_offset(end);
        let table = self.buffer.tag_table();

        // Earlier colors on the span would otherwise compete by tag priority
        let mut stale = Vec::new();
        table.foreach(|tag| {
            let name = tag.property::<Option<String>>("name");
            if name.is_some_and(|n| n.starts_with(COLOR_TAG_PREFIX)) {
                stale.push(tag.clone());
            }
        });
        for tag in &stale {
            self.buffer.remove_tag(tag, &start, &end);
        }

        let name = color.tag_name();
        let tag = match table.lookup(&name) {
            Some(tag) => tag,
            None => {
                let tag = gtk4::TextTag::builder()
                    .name(name.as_str())
                    .foreground(color.to_hex())
                    .build();
                if !table.add(&tag) {
                    return Err(TagError::Register(name));
                }
                tag
            }
        };
        self.buffer.apply_tag(&tag, &start, &end);
        Ok(())
    }

    fn cut(&self) {
        self.buffer
            .cut_clipboard(&self.clipboard(), self.view.is_editable());
    }

    fn copy(&self) {
        self.buffer.copy_clipboard(&self.clipboard());
    }

    fn paste(&self) {
        self.buffer
            .paste_clipboard(&self.clipboard(), None, self.view.is_editable());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_color_hex() {
        assert_eq!(FontColor::new(255, 0, 16).to_hex(), "#ff0010");
        assert_eq!(FontColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_font_color_tag_name_is_per_color() {
        let red = FontColor::new(255, 0, 0);
        let blue = FontColor::new(0, 0, 255);
        assert_eq!(red.tag_name(), "font-color-#ff0000");
        assert_ne!(red.tag_name(), blue.tag_name());
    }

    #[test]
    fn test_font_color_from_rgba() {
        let color = FontColor::from(gdk::RGBA::new(1.0, 0.5, 0.0, 1.0));
        assert_eq!(color, FontColor::new(255, 128, 0));
    }

    #[test]
    fn test_font_color_from_rgba_clamps() {
        let color = FontColor::from(gdk::RGBA::new(1.5, -0.2, 0.0, 0.3));
        assert_eq!(color, FontColor::new(255, 0, 0));
    }

    #[test]
    fn test_tag_error_display() {
        assert_eq!(format!("{}", TagError::NoSelection), "no text is selected");
        assert_eq!(
            format!("{}", TagError::Register("font-color-#000000".to_string())),
            "failed to register tag font-color-#000000"
        );
    }

    fn tag_names_at(buffer: &Buffer, offset: i32) -> Vec<String> {
        buffer
            .iter_at_offset(offset)
            .tags()
            .iter()
            .filter_map(|tag| tag.property::<Option<String>>("name"))
            .filter(|name| name.starts_with(COLOR_TAG_PREFIX))
            .collect()
    }

    fn tag_table_len(buffer: &Buffer) -> i32 {
        buffer.tag_table().size()
    }

    // GTK may only be initialized from one thread, so every widget check
    // lives in this single test. Skipped when no display is available.
    #[test]
    fn test_gtk_text_area_coloring() {
        if gtk4::init().is_err() {
            return;
        }

        let buffer = Buffer::new(None);
        let view = View::with_buffer(&buffer);
        let area = GtkTextArea::new(&view, &buffer);
        area.set_text("hello world");
        let red = FontColor::new(255, 0, 0);
        let blue = FontColor::new(0, 0, 255);

        // No selection: nothing registered, nothing tagged
        let tags_before = tag_table_len(&buffer);
        assert_eq!(area.selection(), None);
        assert_eq!(area.apply_foreground(red), Err(TagError::NoSelection));
        assert_eq!(tag_table_len(&buffer), tags_before);
        assert!((0..11).all(|offset| tag_names_at(&buffer, offset).is_empty()));

        buffer.select_range(&buffer.iter_at_offset(0), &buffer.iter_at_offset(5));
        assert_eq!(area.selection(), Some((0, 5)));
        area.apply_foreground(red).unwrap();

        for offset in 0..5 {
            assert_eq!(tag_names_at(&buffer, offset), vec![red.tag_name()]);
        }
        for offset in 5..11 {
            assert!(tag_names_at(&buffer, offset).is_empty());
        }

        // Overlapping recolor: only the newest color on the overlap
        buffer.select_range(&buffer.iter_at_offset(3), &buffer.iter_at_offset(8));
        area.apply_foreground(blue).unwrap();

        for offset in 0..3 {
            assert_eq!(tag_names_at(&buffer, offset), vec![red.tag_name()]);
        }
        for offset in 3..8 {
            assert_eq!(tag_names_at(&buffer, offset), vec![blue.tag_name()]);
        }
        for offset in 8..11 {
            assert!(tag_names_at(&buffer, offset).is_empty());
        }
        assert_eq!(area.text(), "hello world");

        // Reusing a color does not register a second tag
        let tags_after = tag_table_len(&buffer);
        buffer.select_range(&buffer.iter_at_offset(9), &buffer.iter_at_offset(11));
        area.apply_foreground(red).unwrap();
        assert_eq!(tag_table_len(&buffer), tags_after);
        assert_eq!(tag_names_at(&buffer, 10), vec![red.tag_name()]);
    }
}
