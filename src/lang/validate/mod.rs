//! Advisory syntax checks
//!
//! Each language has a set of per-line heuristics. Findings are purely
//! informational: callers show them and carry on executing. None of these
//! checks is a parser, and they under- and over-report by nature.

mod rules;

use std::fmt;

use tracing::debug;

use super::LanguageTag;
use crate::util::i18n::{t_cur, MSG};

/// A single advisory finding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    /// 1-based physical line in the validated text
    pub line: usize,
    /// Displayable message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Check `text` with the heuristics for `tag`
///
/// Never fails. An empty result means nothing suspicious was found.
pub fn validate(
    text: &str,
    tag: LanguageTag,
) -> Vec<Diagnostic> {
    let check: fn(usize, &str, &mut Vec<Diagnostic>) = match tag {
        LanguageTag::TimeWarp => rules::generic,
        LanguageTag::Basic => rules::basic,
        LanguageTag::Logo => rules::logo,
        LanguageTag::Pilot => rules::pilot,
        LanguageTag::Pascal => rules::pascal,
        LanguageTag::Prolog => rules::prolog,
    };

    let mut diagnostics = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        check(index + 1, line, &mut diagnostics);
    }

    let count = diagnostics.len().to_string();
    debug!("{}", t_cur(MSG::Validated, &[&tag, &count]));
    diagnostics
}
