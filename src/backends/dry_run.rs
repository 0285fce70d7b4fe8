//! Stand-in execution engine
//!
//! Echoes what it was asked to run, one line per source line, prefixed with
//! the language name. Useful for exercising the REPL without an engine and
//! for the batch entry point's smoke runs.

use super::{Execution, Executor, ExecutorResult};
use crate::lang::LanguageTag;

/// Completion notice appended when completion reporting is requested
pub const COMPLETION_NOTICE: &str = "Program completed.";

/// Executor that records and echoes instead of interpreting
#[derive(Debug, Default, Clone)]
pub struct DryRunExecutor {
    runs: usize,
}

impl DryRunExecutor {
    /// Create a new executor
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of runs so far
    pub fn runs(&self) -> usize {
        self.runs
    }
}

impl Executor for DryRunExecutor {
    fn run(
        &mut self,
        source: &str,
        language: LanguageTag,
        report_completion: bool,
    ) -> ExecutorResult<Execution> {
        self.runs += 1;

        let mut output = String::new();
        for line in source.lines().filter(|l| !l.trim().is_empty()) {
            output.push_str(&format!("[{}] {}\n", language, line.trim()));
        }
        if report_completion {
            output.push_str(COMPLETION_NOTICE);
            output.push('\n');
        }
        Ok(Execution::ok(output))
    }
}
