//! REPL command vocabulary
//!
//! Two kinds of commands exist:
//! - [`ControlWord`]s are typed as plain words (`RUN`, `LIST`, ...) and are
//!   recognised by the router before anything else.
//! - [`MetaCommand`]s start with `:` and belong to the interactive host; they
//!   stand in for the menu actions of a graphical shell.

use std::path::PathBuf;

/// Reserved top-level command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlWord {
    /// Run the stored program
    Run,
    /// List the stored program
    List,
    /// Clear the stored program
    New,
    /// Show help
    Help,
    /// Clear the screen
    Cls,
    /// End the session
    Exit,
}

impl ControlWord {
    /// Recognise a trimmed input line, case-insensitively
    ///
    /// `NEW` matches as a prefix, so `NEW` and `NEW PROGRAM` both clear; every
    /// other word must be the whole line.
    pub fn parse(line: &str) -> Option<ControlWord> {
        let upper = line.trim().to_uppercase();
        match upper.as_str() {
            "RUN" => Some(ControlWord::Run),
            "LIST" => Some(ControlWord::List),
            "HELP" => Some(ControlWord::Help),
            "CLS" | "CLEAR" => Some(ControlWord::Cls),
            "EXIT" | "QUIT" | "BYE" => Some(ControlWord::Exit),
            _ if upper.starts_with("NEW") => Some(ControlWord::New),
            _ => None,
        }
    }

    /// Canonical spelling
    pub fn word(self) -> &'static str {
        match self {
            ControlWord::Run => "RUN",
            ControlWord::List => "LIST",
            ControlWord::New => "NEW",
            ControlWord::Help => "HELP",
            ControlWord::Cls => "CLS",
            ControlWord::Exit => "EXIT",
        }
    }
}

/// Every spelling a control word accepts, for completion
pub const CONTROL_SPELLINGS: &[&str] = &[
    "RUN", "LIST", "NEW", "HELP", "CLS", "CLEAR", "EXIT", "QUIT", "BYE",
];

/// Host command starting with `:`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    /// Load a program (or display a non-program file)
    Load(PathBuf),
    /// Save the program, optionally under a new name
    Save(Option<PathBuf>),
    /// Syntax-check the stored program
    Check,
    /// Stop the running program
    Stop,
    /// Start a fresh session
    Restart,
    /// Show host command help
    Help,
    /// Recognised command with missing arguments
    Usage(&'static str),
    /// Anything else after `:`
    Unknown(String),
}

impl MetaCommand {
    /// Parse a line starting with `:`; `None` for any other line
    pub fn parse(line: &str) -> Option<MetaCommand> {
        let cmd = line.trim().strip_prefix(':')?.trim();
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (cmd, None),
        };

        Some(match name.to_lowercase().as_str() {
            "load" | "open" | "l" => match arg {
                Some(path) => MetaCommand::Load(PathBuf::from(path)),
                None => MetaCommand::Usage("Usage: :load <file>"),
            },
            "save" | "s" => MetaCommand::Save(arg.map(PathBuf::from)),
            "check" | "c" => MetaCommand::Check,
            "stop" => MetaCommand::Stop,
            "restart" | "reset" => MetaCommand::Restart,
            "help" | "h" | "" => MetaCommand::Help,
            _ => MetaCommand::Unknown(line.trim().to_string()),
        })
    }
}

/// Help for host commands
pub const META_HELP: &str = "\
Host commands:
  :load <file>   - Load a program (other files are displayed)
  :save [file]   - Save the program
  :check         - Check the program for syntax issues
  :stop          - Stop the running program
  :restart       - Start a new session
  :help          - Show this help
";
