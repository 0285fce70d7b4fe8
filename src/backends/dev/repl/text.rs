//! Fixed screen texts

use crate::{NAME, VERSION};

/// Output of `HELP`
pub const HELP_TEXT: &str = "
Available Commands:
  HELP     - Show this help
  CLS      - Clear screen
  EXIT     - Quit the IDE

Program Commands:
  Line-numbered programs are stored in memory
  RUN      - Execute the stored program
  LIST     - Show the stored program
  NEW      - Clear the stored program

Languages: Time Warp programming language

Examples:
  PRINT \"Hello, World!\"
  10 PRINT \"BASIC LINE\"
  FORWARD 100
  T:Hello World!

OK
";

/// Screen shown when a session starts
pub fn welcome_banner() -> String {
    format!(
        "
{} v{} - Educational Programming Environment
{} - {}

Supports: Time Warp, Pascal, Prolog

Type HELP for commands, or start programming!

OK
",
        NAME,
        VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
}
