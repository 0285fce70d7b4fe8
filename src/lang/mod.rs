//! Language tags, classification and advisory syntax checks
//!
//! This module contains:
//! - [`LanguageTag`] - the fixed set of languages the REPL can hand off
//! - [`classify`] - best-effort language detection, never "unknown"
//! - [`validate`] - per-language static checks producing [`Diagnostic`]s

pub mod classify;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use classify::classify;
pub use validate::{validate, Diagnostic};

/// Language a piece of source text is tagged with
///
/// There is deliberately no "unknown" member: anything unrecognised is
/// [`LanguageTag::TimeWarp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageTag {
    /// Unified base language: immediate statements plus turtle graphics
    #[default]
    TimeWarp,
    /// Classic line-numbered BASIC
    Basic,
    /// Bracket-block turtle language
    Logo,
    /// Colon-prefixed command language
    Pilot,
    /// Structured, declarative language
    Pascal,
    /// Clause-based logic language
    Prolog,
}

impl LanguageTag {
    /// Every tag, base language first
    pub const ALL: [LanguageTag; 6] = [
        LanguageTag::TimeWarp,
        LanguageTag::Basic,
        LanguageTag::Logo,
        LanguageTag::Pilot,
        LanguageTag::Pascal,
        LanguageTag::Prolog,
    ];

    /// Canonical lower-case name
    pub fn name(self) -> &'static str {
        match self {
            LanguageTag::TimeWarp => "time_warp",
            LanguageTag::Basic => "basic",
            LanguageTag::Logo => "logo",
            LanguageTag::Pilot => "pilot",
            LanguageTag::Pascal => "pascal",
            LanguageTag::Prolog => "prolog",
        }
    }

    /// Tag for a file extension, with or without the leading dot
    pub fn from_extension(ext: &str) -> Option<LanguageTag> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pas" => Some(LanguageTag::Pascal),
            "plg" => Some(LanguageTag::Prolog),
            "logo" => Some(LanguageTag::Logo),
            "bas" => Some(LanguageTag::Basic),
            "pilot" => Some(LanguageTag::Pilot),
            "tw" => Some(LanguageTag::TimeWarp),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised language name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: {0}")]
pub struct LanguageParseError(pub String);

impl FromStr for LanguageTag {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time_warp" | "timewarp" | "tw" => Ok(LanguageTag::TimeWarp),
            "basic" => Ok(LanguageTag::Basic),
            "logo" => Ok(LanguageTag::Logo),
            "pilot" => Ok(LanguageTag::Pilot),
            "pascal" => Ok(LanguageTag::Pascal),
            "prolog" => Ok(LanguageTag::Prolog),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}
