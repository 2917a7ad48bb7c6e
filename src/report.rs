//! Reading documents and stop-word lists, and writing the concordance report.
//!
//! Every file operation takes an explicit path. Failures are reported as
//! [`ConcordanceError::FileAccess`] carrying the offending path.
//!
//! The report is a flat text file named [`REPORT_FILE_NAME`]: one line per
//! concordance window, tokens separated by a single space, lines separated by
//! a single `\n`, with no trailing newline and no metadata.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::analysis::token::Token;
use crate::error::{ConcordanceError, Result};

/// Name of the report file written into the output directory.
pub const REPORT_FILE_NAME: &str = "report.txt";

/// Read a UTF-8 text file fully into memory.
pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).map_err(|e| ConcordanceError::file_access(path, e))?;

    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Read a stop-word list. Words may be separated by any whitespace,
/// typically one per line; blank entries are ignored.
pub fn read_stop_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let words: Vec<String> = read_from_file(path)?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    debug!("loaded {} stop words", words.len());
    Ok(words)
}

/// Render report lines: tokens joined by spaces, lines joined by `\n`.
pub fn format_report<L: AsRef<[Token]>>(lines: &[L]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `lines` to `report.txt` inside `output_dir`, replacing any existing
/// report, and return the path written.
///
/// The directory must already exist.
pub fn write_to_file<P, L>(output_dir: P, lines: &[L]) -> Result<PathBuf>
where
    P: AsRef<Path>,
    L: AsRef<[Token]>,
{
    let path = output_dir.as_ref().join(REPORT_FILE_NAME);

    let file = File::create(&path).map_err(|e| ConcordanceError::file_access(&path, e))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(format_report(lines).as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| ConcordanceError::file_access(&path, e))?;

    info!("wrote {} report lines to {}", lines.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::tempdir;

    fn line(words: &[&str]) -> Vec<Token> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_report() {
        let lines = vec![line(&["man", "is", "happy"]), line(&["dog", "is", "happy"])];

        assert_eq!(format_report(&lines), "man is happy\ndog is happy");
    }

    #[test]
    fn test_format_empty_report() {
        let lines: Vec<Vec<Token>> = Vec::new();
        assert_eq!(format_report(&lines), "");
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempdir().unwrap();
        let lines = vec![line(&["a", "b"]), line(&["c"])];

        let path = write_to_file(dir.path(), &lines).unwrap();

        assert_eq!(path, dir.path().join("report.txt"));
        assert_eq!(read_from_file(&path).unwrap(), "a b\nc");
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = read_from_file(&missing).unwrap_err();

        match err {
            ConcordanceError::FileAccess { path, .. } => assert_eq!(path, missing),
            other => panic!("Expected file access error, got {other:?}"),
        }
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let lines = vec![line(&["a"])];

        let err = write_to_file(dir.path().join("nope"), &lines).unwrap_err();

        assert!(err.is_file_access());
    }

    #[test]
    fn test_read_stop_words() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stop_words.txt");
        fs::write(&path, "the\nis\n\n  a \r\nthe\n").unwrap();

        let words = read_stop_words(&path).unwrap();

        assert_eq!(words, vec!["the", "is", "a", "the"]);
    }
}
