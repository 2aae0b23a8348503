use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::system_prompt::{verify_markers, GENERATION_PROMPT};

/// Write the generation prompt to `out` exactly, with no trailing additions.
pub fn print_prompt<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(GENERATION_PROMPT.as_bytes())
        .context("Failed to write prompt")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Write the generation prompt to `path` byte-for-byte, creating parent directories.
///
/// Returns the number of bytes written.
pub fn write_prompt(path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directory: {:?}", parent);
            std::fs::create_dir_all(parent).context("Failed to create output directory")?;
        }
    }

    std::fs::write(path, GENERATION_PROMPT)
        .with_context(|| format!("Failed to write prompt to {:?}", path))?;

    info!("Wrote prompt to {:?} ({} bytes)", path, GENERATION_PROMPT.len());
    Ok(GENERATION_PROMPT.len())
}

pub fn read_prompt(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read prompt file {:?}", path))
}

/// Whether the file at `path` is byte-identical to the built-in prompt
pub fn matches_builtin(path: &Path) -> Result<bool> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read prompt file {:?}", path))?;
    Ok(bytes == GENERATION_PROMPT.as_bytes())
}

/// Verify an exported prompt file: required markers first, then a byte comparison.
pub fn check_file(path: &Path) -> Result<()> {
    let text = read_prompt(path)?;
    verify_markers(&text)
        .with_context(|| format!("Exported prompt {:?} failed verification", path))?;

    if !matches_builtin(path)? {
        bail!("Exported prompt {:?} differs from the built-in prompt", path);
    }

    info!("{:?} matches the built-in prompt", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generation.txt");

        let written = write_prompt(&path).unwrap();
        assert_eq!(written, GENERATION_PROMPT.len());

        assert_eq!(read_prompt(&path).unwrap(), GENERATION_PROMPT);
        assert!(matches_builtin(&path).unwrap());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dist").join("prompts").join("generation.txt");

        write_prompt(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_modified_file_does_not_match() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generation.txt");

        // 末尾の改行だけ落とした場合も不一致として扱う
        std::fs::write(&path, GENERATION_PROMPT.trim_end()).unwrap();
        assert!(!matches_builtin(&path).unwrap());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(read_prompt(&dir.path().join("nope.txt")).is_err());
        assert!(matches_builtin(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn test_print_prompt_is_exact() {
        let mut out = Vec::new();
        print_prompt(&mut out).unwrap();
        assert_eq!(out, GENERATION_PROMPT.as_bytes());
    }

    #[test]
    fn test_check_file_accepts_export() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generation.txt");
        write_prompt(&path).unwrap();

        assert!(check_file(&path).is_ok());
    }

    #[test]
    fn test_check_file_rejects_changed_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generation.txt");

        // マーカーは揃っているが本文が異なる
        let edited = GENERATION_PROMPT.replace("senior", "junior");
        std::fs::write(&path, edited).unwrap();

        let err = check_file(&path).unwrap_err();
        assert!(err.to_string().contains("differs"));
    }

    #[test]
    fn test_check_file_rejects_missing_markers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generation.txt");
        std::fs::write(&path, GENERATION_PROMPT.replace("/App.jsx", "/main.jsx")).unwrap();

        let err = check_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("/App.jsx"));
    }

    #[test]
    fn test_check_file_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        assert!(check_file(&dir.path().join("nope.txt")).is_err());
    }
}
