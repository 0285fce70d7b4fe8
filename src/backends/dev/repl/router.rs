//! Command router
//!
//! Consumes one raw input line at a time and decides what it is:
//!
//! 1. blank: nothing happens
//! 2. a control word (`RUN`, `LIST`, `NEW`, `HELP`, `CLS`/`CLEAR`,
//!    `EXIT`/`QUIT`/`BYE`)
//! 3. a program-line edit (`<number> <statement>`)
//! 4. otherwise an immediate statement, classified and handed to the executor
//!
//! The router never fails. Collaborator errors are shown as `Error: ...` and
//! the next line is processed normally. Every method takes `&mut self`, so a
//! `RUN` always finishes before the next line (or a second `RUN`) is seen.

use std::path::Path;

use tracing::{debug, info, warn};

use super::commands::ControlWord;
use super::display::{Color, DisplaySurface};
use super::session::Session;
use super::text::HELP_TEXT;
use crate::backends::{Executor, ExecutorResult, Execution};
use crate::lang::{classify, validate, Diagnostic, LanguageTag};
use crate::program::file::{self, Loaded};
use crate::util::config::ReplConfig;
use crate::util::i18n::{t_cur, MSG};

/// What the host should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line
    Continue,
    /// The user asked to leave
    Exit,
}

/// Router behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Show diagnostics before running an immediate statement
    pub validate_immediate: bool,
    /// Show diagnostics before `RUN`
    pub validate_on_run: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            validate_immediate: true,
            validate_on_run: false,
        }
    }
}

impl From<&ReplConfig> for RouterOptions {
    fn from(config: &ReplConfig) -> Self {
        Self {
            validate_immediate: config.validate_immediate,
            validate_on_run: config.validate_on_run,
        }
    }
}

/// Command router owning the session, an executor and a display surface
#[derive(Debug)]
pub struct CommandRouter<E: Executor, D: DisplaySurface> {
    session: Session,
    executor: E,
    display: D,
    options: RouterOptions,
}

impl<E: Executor, D: DisplaySurface> CommandRouter<E, D> {
    /// Create a router with a fresh session
    pub fn new(
        executor: E,
        display: D,
    ) -> Self {
        Self::with_options(executor, display, RouterOptions::default())
    }

    /// Create a router with explicit options
    pub fn with_options(
        executor: E,
        display: D,
        options: RouterOptions,
    ) -> Self {
        debug!("{}", t_cur(MSG::SessionStart, &[]));
        Self {
            session: Session::new(),
            executor,
            display,
            options,
        }
    }

    /// Process one raw input line
    pub fn handle_line(
        &mut self,
        raw: &str,
    ) -> Flow {
        let line = raw.trim();
        if line.is_empty() {
            return Flow::Continue;
        }
        debug!("{}", t_cur(MSG::InputReceived, &[&line]));

        if let Some(word) = ControlWord::parse(line) {
            debug!("{}", t_cur(MSG::ControlWord, &[&word.word()]));
            return self.dispatch(word);
        }

        if line.starts_with(|c: char| c.is_ascii_digit()) {
            self.edit_program_line(line);
            return Flow::Continue;
        }

        self.run_immediate(line);
        Flow::Continue
    }

    fn dispatch(
        &mut self,
        word: ControlWord,
    ) -> Flow {
        match word {
            ControlWord::Run => self.run_program(),
            ControlWord::List => self.list_program(),
            ControlWord::New => {
                self.session.store_mut().remove_all();
                self.display.write_line("Program cleared.", Color::Normal);
            }
            ControlWord::Help => self.display.write_text(HELP_TEXT, Color::Normal),
            ControlWord::Cls => {
                self.display.clear_screen();
                self.session.request_ok_prompt();
            }
            ControlWord::Exit => {
                info!("{}", t_cur(MSG::SessionExit, &[]));
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    /// `<number> <statement>`: stored silently, or a short diagnostic
    fn edit_program_line(
        &mut self,
        line: &str,
    ) {
        let (number_part, rest) = match line.split_once(char::is_whitespace) {
            Some((number, rest)) => (number, rest.trim()),
            None => (line, ""),
        };

        let Ok(number) = number_part.parse::<u64>() else {
            debug!("{}", t_cur(MSG::ProgramLineRejected, &[&line]));
            self.display
                .write_line("Invalid line number format.", Color::Error);
            return;
        };

        if rest.is_empty() {
            debug!("{}", t_cur(MSG::ProgramLineRejected, &[&line]));
            self.display.write_line(
                "Invalid line number format - missing command.",
                Color::Error,
            );
            return;
        }

        match self.session.store_mut().upsert(number, rest) {
            Ok(()) => debug!("{}", t_cur(MSG::ProgramLineStored, &[&number])),
            Err(e) => self.display.write_line(&format!("Error: {}", e), Color::Error),
        }
    }

    fn run_program(&mut self) {
        if self.session.store().is_empty() {
            self.display.write_line(
                "No program loaded. Enter line-numbered commands first.",
                Color::Warning,
            );
            return;
        }

        let source = self.session.store().to_source();
        info!("{}", t_cur(MSG::RunProgram, &[&self.session.store().len()]));
        if self.options.validate_on_run {
            let diagnostics = validate(&source, LanguageTag::TimeWarp);
            self.show_diagnostics(&diagnostics);
        }
        let result = self.executor.run(&source, LanguageTag::TimeWarp, true);
        self.show_result(result);
    }

    fn list_program(&mut self) {
        if self.session.store().is_empty() {
            self.display.write_line("No program loaded.", Color::Warning);
            return;
        }

        self.display.clear_screen();
        self.display.write_line("Program:", Color::Normal);
        for line in self.session.store().serialize() {
            self.display.write_line(&line, Color::Normal);
        }
    }

    fn run_immediate(
        &mut self,
        line: &str,
    ) {
        let tag = classify(line, self.session.current_extension());
        debug!("{}", t_cur(MSG::ImmediateStatement, &[&tag]));
        if self.options.validate_immediate {
            let diagnostics = validate(line, tag);
            self.show_diagnostics(&diagnostics);
        }
        let result = self.executor.run(line, tag, false);
        self.show_result(result);
    }

    fn show_diagnostics(
        &mut self,
        diagnostics: &[Diagnostic],
    ) {
        for diagnostic in diagnostics {
            self.display
                .write_line(&diagnostic.to_string(), Color::Warning);
        }
    }

    fn show_result(
        &mut self,
        result: ExecutorResult<Execution>,
    ) {
        match result {
            Ok(execution) => {
                if execution.output.is_empty() {
                    return;
                }
                let color = if execution.success {
                    Color::Normal
                } else {
                    Color::Error
                };
                self.display.write_text(&execution.output, color);
                if !execution.output.ends_with('\n') {
                    self.display.write_text("\n", color);
                }
            }
            Err(e) => {
                warn!("{}", t_cur(MSG::ExecutorFailed, &[&e]));
                self.display.write_line(&format!("Error: {}", e), Color::Error);
            }
        }
    }

    /// Load `path`: a program replaces the store, anything else is displayed
    ///
    /// Either way the previous program is gone afterwards.
    pub fn open_file(
        &mut self,
        path: &Path,
    ) {
        let path_str = path.display().to_string();
        match file::load(path) {
            Ok(Loaded::Program(store)) => {
                let count = store.len();
                info!("{}", t_cur(MSG::ProgramLoaded, &[&path_str, &count]));
                self.session.replace_store(store);
                self.session.set_current_file(path);
                self.display.write_line(
                    &format!("Loaded program from {}", path_str),
                    Color::Success,
                );
                self.display
                    .write_line(&format!("{} lines loaded.", count), Color::Success);
            }
            Ok(Loaded::Opaque(content)) => {
                info!("{}", t_cur(MSG::OpaqueLoaded, &[&path_str]));
                self.session.store_mut().remove_all();
                self.session.set_current_file(path);
                let rule = "=".repeat(50);
                self.display
                    .write_line(&format!("File: {}", path_str), Color::Info);
                self.display.write_line(&rule, Color::Info);
                self.display.write_text(&content, Color::Normal);
                self.display.write_text(&format!("\n{}\n", rule), Color::Info);
            }
            Err(e) => self.display.write_line(&format!("Error: {}", e), Color::Error),
        }
    }

    /// Save the program to `path`, or to the current file
    pub fn save_file(
        &mut self,
        path: Option<&Path>,
    ) {
        if self.session.store().is_empty() {
            self.display
                .write_line("No program loaded to save.", Color::Warning);
            self.display
                .write_line("Create a line-numbered program first.", Color::Warning);
            return;
        }

        let Some(target) = path
            .map(Path::to_path_buf)
            .or_else(|| self.session.current_file().map(Path::to_path_buf))
        else {
            self.display.write_line("No file name given.", Color::Warning);
            return;
        };

        match file::save(self.session.store(), &target) {
            Ok(()) => {
                self.display.write_line(
                    &format!("Program saved to {}", target.display()),
                    Color::Success,
                );
                self.session.set_current_file(target);
            }
            Err(e) => self.display.write_line(&format!("Error: {}", e), Color::Error),
        }
    }

    /// Show advisory diagnostics for the stored program
    pub fn check_program(&mut self) {
        if self.session.store().is_empty() {
            self.display.write_line("No program loaded.", Color::Warning);
            return;
        }

        let source = self.session.store().to_source();
        let tag = classify(&source, self.session.current_extension());
        let diagnostics = validate(&source, tag);
        if diagnostics.is_empty() {
            self.display
                .write_line("No syntax issues found.", Color::Success);
        } else {
            self.show_diagnostics(&diagnostics);
        }
    }

    /// Stopping a running program is not supported
    pub fn stop_program(&mut self) {
        self.display
            .write_line("Stop program - not implemented yet.", Color::Warning);
    }

    /// Replace the session with a fresh one
    pub fn new_session(&mut self) {
        info!("{}", t_cur(MSG::SessionReset, &[]));
        self.session = Session::new();
        self.display.write_line(
            "New program started. Previous program cleared.",
            Color::Success,
        );
    }

    /// Consume the pending `OK` prompt request
    pub fn take_ok_prompt(&mut self) -> bool {
        self.session.take_ok_prompt()
    }

    /// Session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session state
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Display surface
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable display surface
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
