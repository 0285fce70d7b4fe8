//! Language classifier
//!
//! Ordered rules, first match wins:
//!
//! 1. a known file extension is authoritative
//! 2. any immediate keyword (`PRINT`, `INPUT`, `LET`)
//! 3. any keyword of the base-language vocabulary
//! 4. a single `identifier = expression` assignment
//! 5. fallback
//!
//! Rules 2 to 5 all resolve to [`LanguageTag::TimeWarp`]; classification
//! never reports an unrecognised language.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::LanguageTag;
use crate::util::i18n::{t_cur, MSG};

/// Keywords that alone mark an immediate statement
const IMMEDIATE_KEYWORDS: &[&str] = &["PRINT", "INPUT", "LET"];

/// Base-language vocabulary: movement, drawing, math, strings, I/O, control flow
const BASE_KEYWORDS: &[&str] = &[
    "FORWARD", "BACK", "LEFT", "RIGHT", "PENUP", "PENDOWN", "CLEARSCREEN", "HOME",
    "SETXY", "SETCOLOR", "SETPENSIZE", "CIRCLE", "DOT", "RECT", "TEXT",
    "SHOWTURTLE", "HIDETURTLE", "REPEAT", "DEFINE", "CALL", "SIN", "COS", "TAN",
    "SQRT", "ABS", "INT", "RND", "LEN", "MID", "UPPER", "LOWER",
    "SORT", "FIND", "SUM", "AVG", "MIN", "MAX", "LINE", "BOX", "TRIANGLE", "ELLIPSE",
    "FILL", "BEEP", "PLAY", "SOUND", "NOTE", "PLAYNOTE", "SETSOUND", "OPEN", "CLOSE",
    "READ", "WRITE", "EOF", "LET", "PRINT", "INPUT", "GOTO", "IF", "THEN", "FOR", "TO", "NEXT",
];

/// Statement openers that rule out the bare-assignment check
const ASSIGNMENT_EXCLUDED_PREFIXES: &[&str] = &["IF", "FOR", "WHILE", "LET"];

/// Characters that disqualify the right-hand side of a bare assignment
const FOREIGN_EXPR_CHARS: &[char] = &['(', ')', '{', '}', ';', ':'];

fn keyword_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("keyword alternation of escaped literals")
}

static IMMEDIATE_RE: Lazy<Regex> = Lazy::new(|| keyword_pattern(IMMEDIATE_KEYWORDS));
static BASE_RE: Lazy<Regex> = Lazy::new(|| keyword_pattern(BASE_KEYWORDS));
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

/// Base-language keywords, upper case
pub fn vocabulary() -> &'static [&'static str] {
    BASE_KEYWORDS
}

/// Map source text (plus an optional file extension) to a language tag
pub fn classify(
    text: &str,
    extension: Option<&str>,
) -> LanguageTag {
    let (tag, evidence) = explain(text, extension);
    debug!("{}", t_cur(MSG::Classified, &[&tag, &format!("{:?}", evidence)]));
    tag
}

/// `identifier = expression` on a single line
///
/// The identifier must match `[A-Za-z_][A-Za-z0-9_]*` and the expression must
/// be non-empty and free of `( ) { } ; :`.
pub fn is_bare_assignment(text: &str) -> bool {
    let text = text.trim();
    if text.contains('\n') {
        return false;
    }
    let upper = text.to_uppercase();
    if ASSIGNMENT_EXCLUDED_PREFIXES
        .iter()
        .any(|p| upper.starts_with(p))
    {
        return false;
    }
    let Some((name, expr)) = text.split_once('=') else {
        return false;
    };
    let (name, expr) = (name.trim(), expr.trim());
    IDENTIFIER_RE.is_match(name) && !expr.is_empty() && !expr.contains(FOREIGN_EXPR_CHARS)
}

/// Which vocabulary rule matched, for diagnostics and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    Extension,
    ImmediateKeyword,
    Keyword,
    Assignment,
    Fallback,
}

/// Like [`classify`] but also reports which rule decided
pub fn explain(
    text: &str,
    extension: Option<&str>,
) -> (LanguageTag, Evidence) {
    if let Some(tag) = extension.and_then(LanguageTag::from_extension) {
        return (tag, Evidence::Extension);
    }
    let upper = text.to_uppercase();
    let evidence = if IMMEDIATE_RE.is_match(&upper) {
        Evidence::ImmediateKeyword
    } else if BASE_RE.is_match(&upper) {
        Evidence::Keyword
    } else if is_bare_assignment(text) {
        Evidence::Assignment
    } else {
        Evidence::Fallback
    };
    (LanguageTag::TimeWarp, evidence)
}
