use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Message printed when the input file does not exist
pub const MISSING_FILE_MESSAGE: &str = "Error with the file";

/// Read the text to transform from `path`
///
/// A missing file is not fatal: the message is written to `out` and the
/// text resolves to empty. Any other read failure is returned. Contents
/// are decoded lossily.
pub fn resolve_input<W: Write>(path: &Path, out: &mut W) -> Result<String> {
    if !path.exists() {
        log::debug!("input file {} does not exist", path.display());
        writeln!(out, "{}", MISSING_FILE_MESSAGE)?;
        return Ok(String::new());
    }

    let bytes = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "line one\nline two\n").unwrap();

        let mut out = Vec::<u8>::new();
        let text = resolve_input(&path, &mut out).unwrap();
        assert_eq!(text, "line one\nline two\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_resolve_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let mut out = Vec::<u8>::new();
        let text = resolve_input(&path, &mut out).unwrap();
        assert_eq!(text, "");
        assert_eq!(String::from_utf8(out).unwrap(), "Error with the file\n");
    }

    #[test]
    fn test_resolve_invalid_utf8_is_lossy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [b'a', 0xFF, b'b']).unwrap();

        let text = resolve_input(&path, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(text, "a\u{FFFD}b");
    }

    #[test]
    fn test_resolve_directory_fails() {
        let dir = tempdir().unwrap();
        let mut out = Vec::<u8>::new();
        let err = resolve_input(dir.path(), &mut out).unwrap_err();
        assert!(matches!(err, CipherError::Io(_)));
        assert!(out.is_empty());
    }
}
