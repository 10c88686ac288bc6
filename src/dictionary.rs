//! Dictionary sources: one pattern per line.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::{Automaton, BuildError, Builder};

/// Error reading a dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("failed to open dictionary {}: {source}", .path.display())]
    Io {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading a line failed (including invalid UTF-8).
    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),
}

/// An ordered list of patterns, duplicates kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    patterns: Vec<String>,
    skipped: usize,
}

impl Dictionary {
    /// Creates a dictionary from patterns, dropping empty ones.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::default();
        for pattern in patterns {
            dict.push(pattern.into());
        }
        dict
    }

    /// Reads one pattern per line.
    ///
    /// Line endings (`\n` or `\r\n`) are stripped and empty lines skipped;
    /// everything else, surrounding whitespace included, is kept verbatim.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut dict = Self::default();
        for line in reader.lines() {
            dict.push(line?);
        }
        Ok(dict)
    }

    /// Opens and reads a dictionary file. See [`from_reader`](Self::from_reader).
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let started = Instant::now();
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_reader(BufReader::new(file))?;

        tracing::info!(
            path = %path.display(),
            patterns = dict.len(),
            skipped = dict.skipped,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded dictionary"
        );
        Ok(dict)
    }

    fn push(&mut self, pattern: String) {
        if pattern.is_empty() {
            self.skipped += 1;
        } else {
            self.patterns.push(pattern);
        }
    }

    /// Returns the patterns in insertion order. A pattern's index is its id.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the pattern with the given id.
    pub fn get(&self, id: u32) -> Option<&str> {
        self.patterns.get(id as usize).map(String::as_str)
    }

    /// Returns the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if there are no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns how many empty lines or patterns were dropped.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Builds an automaton over these patterns with default settings.
    pub fn build(&self) -> Result<Automaton<char>, BuildError> {
        self.build_with(&Builder::new())
    }

    /// Builds an automaton over these patterns with `builder`.
    pub fn build_with(&self, builder: &Builder) -> Result<Automaton<char>, BuildError> {
        builder.build_patterns(&self.patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn reads_lines_in_order() {
        let dict = Dictionary::from_reader(Cursor::new("he\nshe\r\n\nhis\nhe\n")).unwrap();
        assert_eq!(dict.patterns(), &["he", "she", "his", "he"]);
        assert_eq!(dict.skipped(), 1);
        assert_eq!(dict.get(1), Some("she"));
        assert_eq!(dict.get(4), None);
    }

    #[test]
    fn keeps_inner_whitespace() {
        let dict = Dictionary::from_reader(Cursor::new(" spaced out \n")).unwrap();
        assert_eq!(dict.patterns(), &[" spaced out "]);
    }

    #[test]
    fn empty_source() {
        let dict = Dictionary::from_reader(Cursor::new("")).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.build().unwrap().pattern_count(), 0);
    }

    #[test]
    fn new_drops_empty_patterns() {
        let dict = Dictionary::new(["a", "", "b"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.skipped(), 1);
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let err = Dictionary::from_reader(Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert!(matches!(err, DictionaryError::Read(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ga").unwrap();
        writeln!(file, "下来").unwrap();

        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(dict.len(), 2);

        let ac = dict.build().unwrap();
        assert_eq!(ac.replace("哦啦啦666ga.ga 下来了", "**"), "哦啦啦666**.** **了");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = Dictionary::load(&path).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }
}
