//! Execution backends
//!
//! The REPL core never interprets programs. It hands tagged source text to an
//! [`Executor`], which stands for whatever engine actually runs the language.
//!
//! # Architecture
//!
//! ```text
//! raw input line
//!         |
//!         v
//!   CommandRouter ---> ProgramStore
//!         |
//!   classify / validate
//!         |
//!         v
//!  Executor::run(source, tag)
//!         |
//!         v
//!      Execution
//! ```

pub mod dev;
pub mod dry_run;

use thiserror::Error;

use crate::lang::LanguageTag;

pub use dry_run::DryRunExecutor;

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Executor error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutorError {
    /// The engine raised while running the program
    #[error("{0}")]
    Runtime(String),
    /// The engine has no support for this language
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(LanguageTag),
}

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Text produced for the display surface
    pub output: String,
    /// Whether the program ran to completion without error
    pub success: bool,
}

impl Execution {
    /// Successful run with `output`
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    /// Failed run with `output`
    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

/// Executor trait - every execution engine implements this
///
/// Calls are synchronous and blocking from the caller's point of view.
pub trait Executor {
    /// Run `source` as `language`
    ///
    /// With `report_completion` the engine appends its own completion notice
    /// to the output.
    fn run(
        &mut self,
        source: &str,
        language: LanguageTag,
        report_completion: bool,
    ) -> ExecutorResult<Execution>;
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn run(
        &mut self,
        source: &str,
        language: LanguageTag,
        report_completion: bool,
    ) -> ExecutorResult<Execution> {
        (**self).run(source, language, report_completion)
    }
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn run(
        &mut self,
        source: &str,
        language: LanguageTag,
        report_completion: bool,
    ) -> ExecutorResult<Execution> {
        (**self).run(source, language, report_completion)
    }
}
