//! Line-based REPL with rustyline
//!
//! Reads lines with editing and history, feeds them to a [`CommandRouter`]
//! and renders to the terminal. Lines starting with `:` are host commands
//! (load, save, check, stop, restart) and never reach the router.

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::{CompletionType, EditMode, Editor};
use thiserror::Error;
use tracing::{debug, warn};

use crate::backends::dev::repl::commands::{MetaCommand, META_HELP};
use crate::backends::dev::repl::display::{Color, DisplaySurface, TerminalDisplay};
use crate::backends::dev::repl::router::{CommandRouter, Flow, RouterOptions};
use crate::backends::dev::repl::text::welcome_banner;
use crate::backends::Executor;
use crate::util::config::ReplConfig;

mod completer;
pub use completer::WordCompleter;

/// Line REPL errors
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

type Result<T> = std::result::Result<T, ReplError>;

/// Line REPL
pub struct LineREPL<E: Executor> {
    config: ReplConfig,
    editor: Editor<WordCompleter, FileHistory>,
    router: CommandRouter<E, TerminalDisplay>,
}

impl<E: Executor> LineREPL<E> {
    /// Create a line REPL from the `[repl]` config section
    pub fn with_config(
        executor: E,
        config: ReplConfig,
    ) -> Result<Self> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .completion_type(CompletionType::List)
            .edit_mode(if config.vi_mode {
                EditMode::Vi
            } else {
                EditMode::Emacs
            })
            .build();

        let mut editor = Editor::with_config(rl_config)?;
        editor.set_helper(Some(WordCompleter::new()));

        if let Some(history_file) = &config.history_file {
            if history_file.exists() {
                if let Err(e) = editor.load_history(history_file) {
                    warn!("could not load history from {}: {}", history_file.display(), e);
                }
            }
        }

        let display = TerminalDisplay::stdout(config.colors);
        let router = CommandRouter::with_options(executor, display, RouterOptions::from(&config));

        Ok(Self {
            config,
            editor,
            router,
        })
    }

    /// Run until `EXIT`, Ctrl-D or a terminal failure
    pub fn run(&mut self) -> Result<()> {
        self.router
            .display_mut()
            .write_text(&welcome_banner(), Color::Normal);

        loop {
            if self.router.take_ok_prompt() {
                self.router.display_mut().write_line("OK", Color::Normal);
            }

            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = self.editor.add_history_entry(line.as_str());
                    }
                    if self.handle(&line) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Eof) => break,
                Err(ReadlineError::Interrupted) => {
                    self.router
                        .display_mut()
                        .write_line("(Interrupted)", Color::Warning);
                }
                Err(e) => return Err(e.into()),
            }
        }

        if let Some(history_file) = &self.config.history_file {
            if let Err(e) = self.editor.save_history(history_file) {
                warn!("could not save history to {}: {}", history_file.display(), e);
            }
        }
        Ok(())
    }

    fn handle(
        &mut self,
        line: &str,
    ) -> Flow {
        let Some(command) = MetaCommand::parse(line) else {
            return self.router.handle_line(line);
        };
        debug!("host command: {:?}", command);

        match command {
            MetaCommand::Load(path) => self.router.open_file(&path),
            MetaCommand::Save(path) => self.router.save_file(path.as_deref()),
            MetaCommand::Check => self.router.check_program(),
            MetaCommand::Stop => self.router.stop_program(),
            MetaCommand::Restart => self.router.new_session(),
            MetaCommand::Help => self
                .router
                .display_mut()
                .write_text(META_HELP, Color::Normal),
            MetaCommand::Usage(usage) => self.router.display_mut().write_line(usage, Color::Warning),
            MetaCommand::Unknown(text) => self
                .router
                .display_mut()
                .write_line(&format!("Unknown command: {}", text), Color::Error),
        }
        Flow::Continue
    }
}
