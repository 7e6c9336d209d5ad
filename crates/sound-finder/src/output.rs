//! Writing generated text to disk.

use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::error::OutputError;

/// Default path of the generated text.
pub const DEFAULT_OUTPUT_PATH: &str = "./output.txt";

/// Writes `text` to `path`, deleting any existing file first.
///
/// Returns whether a previous file was replaced. On failure the caller still
/// holds `text` and can retry the write alone.
pub fn write_output(path: &Path, text: &str) -> Result<bool, OutputError> {
    let io_err = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let replaced = match fs::remove_file(path) {
        Ok(()) => true,
        Err(err) if err.kind() == io::ErrorKind::NotFound => false,
        Err(err) => return Err(io_err(err)),
    };
    if replaced {
        info!("previous {} deleted", path.display());
    }

    fs::write(path, text).map_err(io_err)?;
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_fresh_and_replace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");

        assert!(!write_output(&path, "A(\"1.7-1.8 a\");").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "A(\"1.7-1.8 a\");");

        assert!(write_output(&path, "B(\"b\");").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "B(\"b\");");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("output.txt");

        let err = write_output(&path, "text").unwrap_err();
        assert!(matches!(err, OutputError::Io { .. }));
    }
}
