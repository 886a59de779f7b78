//! Where statements come from.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{InputError, Result};

/// An input source for SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Statements given on the command line, one per argument.
    Inline(Vec<String>),
    /// A file holding the SQL text.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl Source {
    /// Picks the source from the command-line arguments.
    ///
    /// A file path of `-` means stdin. With neither statements nor a file,
    /// stdin is read.
    #[must_use]
    pub fn new(sql: Vec<String>, file: Option<PathBuf>) -> Self {
        match file {
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path),
            None if sql.is_empty() => Self::Stdin,
            None => Self::Inline(sql),
        }
    }

    /// Reads the raw texts of this source.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read as UTF-8.
    pub fn read(self) -> Result<Vec<String>> {
        match self {
            Self::Inline(sql) => Ok(sql),
            Self::File(path) => match fs::read_to_string(&path) {
                Ok(text) => {
                    debug!(path = %path.display(), bytes = text.len(), "read input file");
                    Ok(vec![text])
                }
                Err(source) => Err(InputError::Read { path, source }),
            },
            Self::Stdin => Ok(vec![read_all(io::stdin().lock())?]),
        }
    }

    /// Reads the source and splits it into statements.
    ///
    /// Without `lines`, each text is one statement. With `lines`, every
    /// non-blank line is its own statement.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails, or [`InputError::Empty`] if line
    /// mode finds no statement.
    pub fn statements(self, lines: bool) -> Result<Vec<String>> {
        let texts = self.read()?;
        if !lines {
            return Ok(texts);
        }

        let statements: Vec<String> = texts
            .iter()
            .map(String::as_str)
            .flat_map(split_lines)
            .collect();
        if statements.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(statements)
    }
}

/// Reads everything from `reader` as UTF-8.
///
/// # Errors
///
/// Returns [`InputError::Stdin`] on read failure or invalid UTF-8.
pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

/// Splits `text` into its non-blank lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_source_selection() {
        assert_eq!(Source::new(vec![], None), Source::Stdin);
        assert_eq!(
            Source::new(vec![], Some(PathBuf::from("-"))),
            Source::Stdin
        );
        assert_eq!(
            Source::new(vec![], Some(PathBuf::from("q.sql"))),
            Source::File(PathBuf::from("q.sql"))
        );
        assert_eq!(
            Source::new(vec![String::from("SELECT * FROM t")], None),
            Source::Inline(vec![String::from("SELECT * FROM t")])
        );
    }

    #[test]
    fn test_inline_statements_pass_through() {
        let source = Source::Inline(vec![String::from("DELETE FROM t"), String::new()]);
        let statements = source.statements(false).unwrap();
        assert_eq!(statements, vec!["DELETE FROM t", ""]);
    }

    #[test]
    fn test_file_is_one_statement() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "SELECT *\nFROM users\nWHERE id = 1;").unwrap();

        let statements = Source::File(file.path().to_path_buf())
            .statements(false)
            .unwrap();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("FROM users"));
    }

    #[test]
    fn test_file_in_line_mode() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "SELECT * FROM a\r\n\n   \nDELETE FROM b\n").unwrap();

        let statements = Source::File(file.path().to_path_buf())
            .statements(true)
            .unwrap();
        assert_eq!(statements, vec!["SELECT * FROM a", "DELETE FROM b"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.sql");

        let err = Source::File(path.clone()).read().unwrap_err();
        match err {
            InputError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected read error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_input_in_line_mode() {
        let source = Source::Inline(vec![String::from("\n  \n\t")]);
        assert!(matches!(source.statements(true), Err(InputError::Empty)));
    }

    #[test]
    fn test_read_all_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x53, 0xff, 0xfe];
        assert!(matches!(read_all(bytes), Err(InputError::Stdin(_))));
    }

    #[test]
    fn test_read_all() {
        let text = read_all("UPDATE t SET a = 1".as_bytes()).unwrap();
        assert_eq!(text, "UPDATE t SET a = 1");
    }
}
