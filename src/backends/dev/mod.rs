//! Development tools for Time Warp
//!
//! Currently the interactive REPL.

pub mod repl;

pub use repl::{CommandRouter, LineREPL};
