//! Precomputed opening lookup consulted before search.
//!
//! The book is a read-only mapping from a serialized board state to a
//! recommended 0-indexed column, loaded once from a JSON file. An absent
//! file is a normal condition and yields an empty book; only a present but
//! unparseable file is reported as an error.

use std::{collections::HashMap, fs, io, path::Path};

/// A position that can produce its opening-book key.
pub trait BookKeyed {
    /// Deterministic string key for the position's contents.
    fn book_key(&self) -> String;
}

impl BookKeyed for crate::connect_four::Board {
    fn book_key(&self) -> String {
        self.serialize()
    }
}

/// Read-only table of precomputed best moves for known positions.
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    entries: HashMap<String, usize>,
}

impl OpeningBook {
    /// Create an empty book (every probe falls through to search).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book from in-memory entries.
    pub fn from_entries(entries: HashMap<String, usize>) -> Self {
        OpeningBook { entries }
    }

    /// Load a book from a JSON file mapping serialized boards to columns.
    ///
    /// # Errors
    ///
    /// A missing file yields an empty book. Other IO failures and malformed
    /// JSON are returned as errors.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(crate::Error::Io {
                    operation: format!("read opening book '{}'", path.display()),
                    source,
                });
            }
        };

        let entries: HashMap<String, usize> = serde_json::from_str(&contents)?;
        Ok(OpeningBook { entries })
    }

    /// Look up the recommended column for a serialized position.
    pub fn lookup(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::connect_four::Board;

    #[test]
    fn missing_file_yields_empty_book() {
        let book = OpeningBook::load("/nonexistent/opening_book.json").unwrap();
        assert!(book.is_empty());
        assert_eq!(book.lookup(&Board::new().book_key()), None);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = OpeningBook::load(file.path());
        assert!(matches!(result, Err(crate::Error::Serialization(_))));
    }

    #[test]
    fn loads_entries_from_json() {
        let key = Board::new().book_key();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"{key}\": 3}}").unwrap();

        let book = OpeningBook::load(file.path()).unwrap();
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup(&key), Some(3));
        assert_eq!(book.lookup("unknown"), None);
    }

    #[test]
    fn empty_board_key_is_42_zeros() {
        assert_eq!(Board::new().book_key(), "0".repeat(42));
    }
}
