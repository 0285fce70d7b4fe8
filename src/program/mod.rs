//! Line-numbered program buffer
//!
//! Stores the program the user builds by typing `<number> <statement>` lines.
//! The store is always observed in ascending line-number order; insertion
//! order never matters.
//!
//! # Example
//!
//! ```
//! use timewarp::program::ProgramStore;
//!
//! let mut store = ProgramStore::new();
//! store.upsert(20, "PRINT 2").unwrap();
//! store.upsert(10, "PRINT 1").unwrap();
//! assert_eq!(store.serialize(), vec!["10 PRINT 1", "20 PRINT 2"]);
//! ```

pub mod file;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::util::i18n::{t_cur, MSG};

/// Errors raised by program store mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// The statement text was empty after trimming
    #[error("invalid line {0}: statement text is empty")]
    EmptyLine(u64),

    /// The statement text spans more than one physical line
    #[error("invalid line {0}: statement text contains a line break")]
    LineBreak(u64),
}

/// A single stored program line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProgramLine {
    /// Line number
    pub number: u64,
    /// Trimmed statement text, never empty
    pub text: String,
}

impl fmt::Display for ProgramLine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.number, self.text)
    }
}

/// Ordered buffer of line-numbered source fragments
///
/// At most one entry exists per line number. `upsert` on an existing number
/// replaces its text in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramStore {
    lines: BTreeMap<u64, String>,
}

impl ProgramStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the line `number`
    ///
    /// The text is trimmed first. Empty text, or text that still contains a
    /// line break, is rejected without mutating the store: every entry must
    /// serialize to exactly one line.
    pub fn upsert(
        &mut self,
        number: u64,
        text: &str,
    ) -> Result<(), ProgramError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ProgramError::EmptyLine(number));
        }
        if text.contains(|c: char| c == '\n' || c == '\r') {
            return Err(ProgramError::LineBreak(number));
        }
        let number_str = number.to_string();
        debug!("{}", t_cur(MSG::StoreUpsert, &[&number_str, &text]));
        self.lines.insert(number, text.to_string());
        Ok(())
    }

    /// Remove every line. Idempotent.
    pub fn remove_all(&mut self) {
        debug!("{}", t_cur(MSG::StoreCleared, &[]));
        self.lines.clear();
    }

    /// Lines in ascending number order
    pub fn list(&self) -> Vec<ProgramLine> {
        self.iter()
            .map(|(number, text)| ProgramLine {
                number,
                text: text.to_string(),
            })
            .collect()
    }

    /// Borrowing iterator over `(number, text)` in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.lines.iter().map(|(n, t)| (*n, t.as_str()))
    }

    /// Text stored for `number`
    pub fn get(
        &self,
        number: u64,
    ) -> Option<&str> {
        self.lines.get(&number).map(String::as_str)
    }

    /// Number of stored lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no program is loaded
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// One `"<number> <text>"` string per entry, ascending
    pub fn serialize(&self) -> Vec<String> {
        self.iter()
            .map(|(number, text)| format!("{} {}", number, text))
            .collect()
    }

    /// The whole program joined with line breaks, as handed to an executor
    pub fn to_source(&self) -> String {
        self.serialize().join("\n")
    }

    /// Parse `content` line by line, upserting every program line
    ///
    /// Returns how many input lines matched the program-line shape. Lines
    /// that do not match are ignored; a return value of zero means the
    /// content is not a program and the caller decides what to do with it.
    pub fn deserialize(
        &mut self,
        content: &str,
    ) -> usize {
        let mut matched = 0;
        for raw in content.lines() {
            if let Some((number, text)) = parse_program_line(raw) {
                if self.upsert(number, text).is_ok() {
                    matched += 1;
                }
            }
        }
        matched
    }

    /// Build a fresh store from serialized content
    pub fn from_content(content: &str) -> (Self, usize) {
        let mut store = Self::new();
        let matched = store.deserialize(content);
        (store, matched)
    }
}

/// Split a raw line into `(number, rest)` if it has the program-line shape
///
/// The trimmed line must start with a digit, and split on its first run of
/// whitespace into an integer and non-empty remaining text.
pub fn parse_program_line(raw: &str) -> Option<(u64, &str)> {
    let line = raw.trim();
    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let (number, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    number.parse().ok().map(|n| (n, rest))
}
