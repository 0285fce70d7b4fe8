//! Interactive REPL core
//!
//! This module contains:
//! - [`router::CommandRouter`] - turns raw input lines into store edits,
//!   control actions and executor calls
//! - [`session::Session`] - state kept between lines
//! - [`display`] - display surfaces (terminal and in-memory)
//! - [`commands`] - control words and host commands
//! - [`line::LineREPL`] - line-based host with rustyline

pub mod commands;
pub mod display;
pub mod line;
pub mod router;
pub mod session;
pub mod text;

pub use commands::{ControlWord, MetaCommand};
pub use display::{Color, DisplaySurface, TerminalDisplay, Transcript};
pub use line::{LineREPL, ReplError};
pub use router::{CommandRouter, Flow, RouterOptions};
pub use session::Session;
