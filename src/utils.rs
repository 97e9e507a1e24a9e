use anyhow::{Context, Result};
use gtk4::prelude::*;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;
use tempfile::NamedTempFile;

pub fn buffer_to_string(buffer: &gtk4::TextBuffer) -> String {
    let (start, end) = buffer.bounds();
    buffer.text(&start, &end, false).to_string()
}

pub fn open_file(filename: &Path) -> Result<String> {
    let file =
        File::open(filename).with_context(|| format!("Failed to open file: {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read file contents: {:?}", filename))?;
    Ok(contents)
}

pub fn save_file(filename: &Path, contents: &str) -> Result<()> {
    // Write through symlinks to the file they point at
    let target = if filename.exists() {
        std::fs::canonicalize(filename)
            .with_context(|| format!("Failed to resolve path: {:?}", filename))?
    } else {
        filename.to_path_buf()
    };
    let existing_permissions = std::fs::metadata(&target).ok().map(|m| m.permissions());

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Write next to the destination so the final rename stays on one filesystem
    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {:?}", dir))?;

    file.write_all(contents.as_bytes())
        .with_context(|| "Failed to write content to temporary file")?;

    if let Some(permissions) = existing_permissions {
        file.as_file()
            .set_permissions(permissions)
            .with_context(|| format!("Failed to copy permissions of {:?}", target))?;
    }

    file.as_file()
        .sync_all()
        .with_context(|| "Failed to sync temporary file")?;

    file.persist(&target)
        .with_context(|| format!("Failed to replace {:?} with temporary file", target))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_open_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_notepad_rs.txt");
        fs::write(&path, "Hello Notepad").unwrap();

        let content = open_file(&path).unwrap();
        assert_eq!(content, "Hello Notepad");
    }

    #[test]
    fn test_open_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_file(&dir.path().join("nonexistent_file_12345.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_open_file_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(open_file(&path).is_err());
    }

    #[test]
    fn test_save_then_open_preserves_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let text = "line one\nline two\r\nno trailing newline";

        save_file(&path, text).unwrap();
        assert_eq!(open_file(&path).unwrap(), text);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        save_file(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_save_leaves_no_temporary_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");

        save_file(&path, "hello").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("a.txt");

        assert!(save_file(&path, "hello").is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_file(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_writes_through_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        save_file(&link, "new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "new");
    }
}
