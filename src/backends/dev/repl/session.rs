//! REPL session context
//!
//! Everything that outlives a single input line: the program store, the file
//! the program came from, and the pending "OK" prompt. Created at session
//! start, reset by `:restart`, dropped at session end.

use std::path::{Path, PathBuf};

use crate::program::ProgramStore;

/// Mutable state of one REPL session
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// Line-numbered program
    store: ProgramStore,
    /// File the program was loaded from or last saved to
    current_file: Option<PathBuf>,
    /// Show `OK` before the next prompt
    show_ok_prompt: bool,
}

impl Session {
    /// Create a fresh session
    pub fn new() -> Self {
        Self::default()
    }

    /// The program store
    pub fn store(&self) -> &ProgramStore {
        &self.store
    }

    /// Mutable program store
    pub fn store_mut(&mut self) -> &mut ProgramStore {
        &mut self.store
    }

    /// Replace the whole program
    pub fn replace_store(
        &mut self,
        store: ProgramStore,
    ) {
        self.store = store;
    }

    /// Current file, if any
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Remember `path` as the current file
    pub fn set_current_file(
        &mut self,
        path: impl Into<PathBuf>,
    ) {
        self.current_file = Some(path.into());
    }

    /// Extension of the current file, used as a classification hint
    pub fn current_extension(&self) -> Option<&str> {
        self.current_file
            .as_deref()
            .and_then(Path::extension)
            .and_then(|e| e.to_str())
    }

    /// Ask the host to print `OK` before its next prompt
    pub fn request_ok_prompt(&mut self) {
        self.show_ok_prompt = true;
    }

    /// Consume the pending `OK` request
    pub fn take_ok_prompt(&mut self) -> bool {
        std::mem::take(&mut self.show_ok_prompt)
    }
}
