//! Word completion for the line host
//!
//! Completes control words, `:` host commands and base-language keywords.
//! Input is case-insensitive, so the candidate keeps the case the user
//! started typing in.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::backends::dev::repl::commands::CONTROL_SPELLINGS;
use crate::lang::classify::vocabulary;

/// Host commands offered after `:`
const META_WORDS: &[&str] = &[":load", ":save", ":check", ":stop", ":restart", ":help"];

/// Completion helper
#[derive(Debug, Clone, Default)]
pub struct WordCompleter {
    words: Vec<&'static str>,
}

impl WordCompleter {
    /// Create a completer over every known word
    pub fn new() -> Self {
        let mut words: Vec<&'static str> = CONTROL_SPELLINGS
            .iter()
            .chain(vocabulary())
            .copied()
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Candidates for the word ending at `pos`
    pub fn candidates(
        &self,
        line: &str,
        pos: usize,
    ) -> (usize, Vec<String>) {
        let head = &line[..pos];
        let start = head
            .char_indices()
            .rev()
            .find(|&(_, c)| !c.is_alphanumeric() && c != '_' && c != ':')
            .map_or(0, |(i, c)| i + c.len_utf8());
        let word = &head[start..];
        if word.is_empty() {
            return (start, Vec::new());
        }

        if word.starts_with(':') {
            let lower = word.to_lowercase();
            let found = META_WORDS
                .iter()
                .filter(|m| m.starts_with(&lower))
                .map(|m| m.to_string())
                .collect();
            return (start, found);
        }

        let upper = word.to_uppercase();
        let lower_case = word.chars().all(|c| !c.is_uppercase());
        let found = self
            .words
            .iter()
            .filter(|w| w.starts_with(&upper))
            .map(|w| if lower_case { w.to_lowercase() } else { w.to_string() })
            .collect();
        (start, found)
    }
}

impl Completer for WordCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(line, pos);
        let pairs = words
            .into_iter()
            .map(|w| Pair {
                display: w.clone(),
                replacement: w,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for WordCompleter {
    type Hint = String;
}

impl Highlighter for WordCompleter {}

impl Validator for WordCompleter {}

impl Helper for WordCompleter {}
