//! Time Warp IDE - REPL core
//!
//! An educational, multi-language interactive environment. This crate holds
//! the parts that sit between the user and an execution engine:
//!
//! - [`program::ProgramStore`]: the line-numbered program being edited
//! - [`backends::dev::repl::CommandRouter`]: decides what each input line is
//! - [`lang::classify`]: picks the language of free text
//! - [`lang::validate`]: advisory per-language syntax checks
//!
//! Engines plug in through [`backends::Executor`].
//!
//! # Example
//!
//! ```
//! use timewarp::backends::dev::repl::{CommandRouter, Transcript};
//! use timewarp::backends::DryRunExecutor;
//!
//! let mut router = CommandRouter::new(DryRunExecutor::new(), Transcript::new());
//! router.handle_line("10 PRINT \"HELLO\"");
//! router.handle_line("RUN");
//! assert!(router.display().all_text().contains("Program completed."));
//! ```

#![warn(rust_2018_idioms)]

pub mod backends;
pub mod lang;
pub mod program;
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use backends::{Execution, Executor, ExecutorError};
pub use lang::{classify, validate, Diagnostic, LanguageTag};
pub use program::ProgramStore;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::util::i18n::{t_cur, MSG};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name
pub const NAME: &str = "Time Warp IDE";

/// A whole source file run once, outside any session
///
/// The content is passed to the executor verbatim, without program-line
/// parsing, and with completion reporting on.
#[derive(Debug, Clone)]
pub struct BatchFile {
    path: PathBuf,
    source: String,
}

impl BatchFile {
    /// Read `path` completely
    pub fn read(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            source,
        })
    }

    /// File content
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Forward the content once, tagged `language`
    ///
    /// Only an executor error is a failure. A run that completes with
    /// `success == false` is returned as-is for the caller to display.
    pub fn run<E: Executor>(
        &self,
        executor: &mut E,
        language: LanguageTag,
    ) -> Result<Execution> {
        let path_str = self.path.display().to_string();
        info!("{}", t_cur(MSG::BatchRun, &[&path_str, &language]));
        executor
            .run(&self.source, language, true)
            .with_context(|| format!("Failed to run {} as {}", self.path.display(), language))
    }
}
