//! File utilities for persona output.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Default output path for a user's persona file.
pub fn default_output_path(username: &str) -> PathBuf {
    PathBuf::from(format!("{username}_persona.txt"))
}

/// Write the persona text to `path` as UTF-8, creating or truncating the file.
///
/// The written bytes are exactly the persona string; no trailing newline or
/// metadata is added. Filesystem errors propagate untranslated.
pub fn write_persona_file(path: &Path, persona: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", persona.len(), path.display());
    fs::write(path, persona)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path("alice"),
            PathBuf::from("alice_persona.txt")
        );
    }

    #[test]
    fn test_write_persona_file_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let persona = "Curious tinkerer.\n\n- Cites: https://www.reddit.com/r/rust/";
        write_persona_file(&path, persona).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, persona.as_bytes());
    }

    #[test]
    fn test_write_persona_file_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        fs::write(&path, "previous contents that are much longer").unwrap();
        write_persona_file(&path, "short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_persona_file_invalid_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_subdir").join("out.txt");

        assert!(write_persona_file(&path, "text").is_err());
    }
}
