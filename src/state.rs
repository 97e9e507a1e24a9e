use crate::constants::{APP_NAME, UNTITLED_NAME};
use std::path::PathBuf;

/// Central application state shared by every menu handler.
#[derive(Debug, Default)]
pub struct AppState {
    /// Path of the document shown in the editor, if it was ever opened or saved.
    pub current_file: Option<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base name of the current document, or "Untitled".
    pub fn display_name(&self) -> String {
        match &self.current_file {
            Some(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            None => UNTITLED_NAME.to_string(),
        }
    }

    /// Window title derived from the current document path.
    pub fn window_title(&self) -> String {
        format!("{} - {}", self.display_name(), APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_untitled_title() {
        let state = AppState::new();
        assert!(state.current_file.is_none());
        assert_eq!(state.window_title(), "Untitled - Notepad");
    }

    #[test]
    fn test_title_uses_base_name() {
        let state = AppState {
            current_file: Some(PathBuf::from("/tmp/notes/a.txt")),
        };
        assert_eq!(state.display_name(), "a.txt");
        assert_eq!(state.window_title(), "a.txt - Notepad");
    }

    #[test]
    fn test_title_without_extension() {
        let state = AppState {
            current_file: Some(Path::new("/var/log/README").to_path_buf()),
        };
        assert_eq!(state.window_title(), "README - Notepad");
    }

    #[test]
    fn test_title_for_path_without_file_name() {
        let state = AppState {
            current_file: Some(PathBuf::from("/")),
        };
        assert_eq!(state.window_title(), "/ - Notepad");
    }
}
