//! Plain-text export
//!
//! Exported files never contain terminal escapes: every registered color code
//! is stripped, not only the one used for the current render.

use crate::error::{RenderError, Result};
use crate::palette::{RESET_CODE, registered_color_codes};
use chrono::Local;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Remove every registered color start code and the reset code
///
/// Repeats until nothing changes, since removing one code can splice the text
/// around it into another.
pub fn strip_color_codes(text: &str) -> String {
    let mut clean = text.to_string();
    loop {
        let mut changed = false;
        for code in registered_color_codes().chain(std::iter::once(RESET_CODE)) {
            if clean.contains(code) {
                clean = clean.replace(code, "");
                changed = true;
            }
        }
        if !changed {
            return clean;
        }
    }
}

/// `ascii_art_<YYYYMMDD_HHMMSS>.txt` for the current local time
pub fn default_file_name() -> PathBuf {
    PathBuf::from(format!(
        "ascii_art_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Write `text` without color codes to `path`, or to a timestamped file in
/// the working directory
///
/// The text is written to a temporary file next to the destination and then
/// renamed into place, so an interrupted export never leaves a truncated file.
/// Returns the path that was written.
pub fn export(text: &str, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_file_name(),
    };
    let clean = strip_color_codes(text);

    let io_err = |source: std::io::Error| RenderError::Io {
        path: path.clone(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(clean.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    debug!("wrote {} bytes to {}", clean.len(), tmp.path().display());

    tmp.persist(&path).map_err(|e| io_err(e.error))?;
    info!("exported glyph art to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::{LuminanceGrid, quantize, render};
    use crate::palette::{ColorPreset, Style};
    use std::fs;

    #[test]
    fn test_strip_removes_all_registered_codes() {
        let text = format!(
            "\x1b[91mab{RESET_CODE}\n\x1b[96mcd{RESET_CODE}\n\x1b[97mef{RESET_CODE}"
        );
        assert_eq!(strip_color_codes(&text), "ab\ncd\nef");
    }

    #[test]
    fn test_strip_removes_codes_spliced_by_removal() {
        // Dropping the reset joins "\x1b[" and "91m" into a red start code
        let text = format!("\x1b[{RESET_CODE}91mab");
        assert_eq!(strip_color_codes(&text), "ab");

        let nested = format!("\x1b[\x1b[{RESET_CODE}92m96mcd");
        assert_eq!(strip_color_codes(&nested), "cd");
    }

    #[test]
    fn test_strip_plain_text_is_noop() {
        let text = "@%#\n*+=\n-:.";
        assert_eq!(strip_color_codes(text), text);
    }

    #[test]
    fn test_strip_keeps_unregistered_escapes() {
        let text = "\x1b[31mab";
        assert_eq!(strip_color_codes(text), text);
    }

    #[test]
    fn test_export_colored_matches_plain() {
        let dir = tempfile::tempdir().unwrap();
        let samples = (0..60u32).map(|i| (i * 4) as u8).collect();
        let grid = LuminanceGrid::from_raw(20, 3, samples).unwrap();
        let glyphs = quantize(&grid, &Style::Blocks.palette());

        let plain_path = export(&render(&glyphs, None), Some(&dir.path().join("plain.txt"))).unwrap();
        let plain = fs::read(plain_path).unwrap();

        for color in ColorPreset::ALL {
            let path = dir.path().join(format!("{}.txt", color.number()));
            let written = export(&render(&glyphs, color.spec().as_ref()), Some(&path)).unwrap();
            assert_eq!(written, path);
            assert_eq!(fs::read(&path).unwrap(), plain, "{color} export differs");
        }
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.txt");
        fs::write(&path, "old content that is longer").unwrap();

        export("new", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_export_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/art.txt");
        let err = export("x", Some(&path)).unwrap_err();
        match err {
            RenderError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_default_file_name_format() {
        let name = default_file_name();
        let name = name.to_str().unwrap();
        assert!(name.starts_with("ascii_art_"));
        assert!(name.ends_with(".txt"));
        // ascii_art_ + YYYYMMDD_HHMMSS + .txt
        assert_eq!(name.len(), "ascii_art_".len() + 15 + ".txt".len());
    }
}
