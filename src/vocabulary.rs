//! Vocabulary input: weighted words and a line-oriented text loader.
//!
//! The text format holds one entry per line, either `word` (weight 1) or
//! `word weight`. Blank lines and lines starting with `#` are skipped. Words
//! are taken verbatim; callers normalize case and accents beforehand.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A word together with the weight it contributes to its ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedWord {
    /// The word itself.
    pub word: String,
    /// Insertion weight; repeated inserts accumulate.
    pub weight: u64,
}

impl WeightedWord {
    /// Create a new weighted word.
    pub fn new<S: Into<String>>(word: S, weight: u64) -> Self {
        WeightedWord {
            word: word.into(),
            weight,
        }
    }
}

impl From<&str> for WeightedWord {
    fn from(word: &str) -> Self {
        WeightedWord::new(word, 1)
    }
}

impl From<String> for WeightedWord {
    fn from(word: String) -> Self {
        WeightedWord::new(word, 1)
    }
}

impl From<(&str, u64)> for WeightedWord {
    fn from((word, weight): (&str, u64)) -> Self {
        WeightedWord::new(word, weight)
    }
}

impl From<(String, u64)> for WeightedWord {
    fn from((word, weight): (String, u64)) -> Self {
        WeightedWord::new(word, weight)
    }
}

/// Parse a single vocabulary line. `line_number` is 1-based and only used
/// for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<WeightedWord>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [word] => Ok(Some(WeightedWord::new(*word, 1))),
        [word, weight] => {
            let weight = weight.parse::<u64>().map_err(|_| {
                Error::parse(line_number, format!("weight {weight:?} is not a number"))
            })?;
            if weight == 0 {
                return Err(Error::parse(line_number, "weight must be at least 1"));
            }
            Ok(Some(WeightedWord::new(*word, weight)))
        }
        _ => Err(Error::parse(
            line_number,
            format!("expected `word [weight]`, found {} fields", parts.len()),
        )),
    }
}

/// Read every entry from a buffered reader.
pub fn read_vocabulary<R: BufRead>(reader: R) -> Result<Vec<WeightedWord>> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_line(&line, index + 1)? {
            entries.push(entry);
        }
    }

    Ok(entries)
}

/// Load a vocabulary file from disk.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vec<WeightedWord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let entries = read_vocabulary(BufReader::new(file))?;
    debug!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_line_forms() {
        assert_eq!(parse_line("cake", 1).unwrap(), Some(WeightedWord::new("cake", 1)));
        assert_eq!(
            parse_line("  cake\t7 ", 1).unwrap(),
            Some(WeightedWord::new("cake", 7))
        );
        assert_eq!(parse_line("", 1).unwrap(), None);
        assert_eq!(parse_line("   ", 1).unwrap(), None);
        assert_eq!(parse_line("# comment", 1).unwrap(), None);
    }

    #[test]
    fn test_parse_line_errors() {
        match parse_line("cake lots", 4) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 4),
            other => panic!("Expected parse error, got {other:?}"),
        }
        assert!(parse_line("cake 0", 1).is_err());
        assert!(parse_line("a b c", 1).is_err());
    }

    #[test]
    fn test_read_vocabulary() {
        let input = "brigadeiro 3\n\nbeijinho\n# seasonal\nbrigadeirão 2\n";
        let entries = read_vocabulary(Cursor::new(input)).unwrap();
        assert_eq!(entries, vec![
            WeightedWord::new("brigadeiro", 3),
            WeightedWord::new("beijinho", 1),
            WeightedWord::new("brigadeirão", 2),
        ]);
    }

    #[test]
    fn test_read_vocabulary_reports_line_number() {
        let input = "one\ntwo\nthree x\n";
        match read_vocabulary(Cursor::new(input)) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_vocabulary_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello 5").unwrap();
        writeln!(temp_file, "world").unwrap();
        temp_file.flush().unwrap();

        let entries = load_vocabulary(temp_file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].weight, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_vocabulary("/nonexistent/fuzzmatch/vocab.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(WeightedWord::from("a"), WeightedWord::new("a", 1));
        assert_eq!(WeightedWord::from(("a", 4)), WeightedWord::new("a", 4));
        assert_eq!(
            WeightedWord::from(("a".to_string(), 2)),
            WeightedWord::new("a", 2)
        );
    }
}
