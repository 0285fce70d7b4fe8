//! Per-language line checks
//!
//! Every rule receives one trimmed, non-empty physical line with its 1-based
//! number and appends whatever it finds.

use super::Diagnostic;

/// Two-letter PILOT commands
const PILOT_COMMANDS: &[&str] = &["T:", "A:", "J:", "Y:", "N:", "C:", "R:", "D:", "E:", "U:"];

/// Pascal line endings that open or close a block instead of ending a statement
const PASCAL_BLOCK_SUFFIXES: &[&str] = &["BEGIN", "END", "THEN", "ELSE", "DO"];

/// Pascal line openers that never need a trailing semicolon
const PASCAL_DECL_PREFIXES: &[&str] = &["PROGRAM", "VAR", "CONST", "PROCEDURE", "FUNCTION", "BEGIN", "END"];

/// Push a diagnostic when `open` and `close` occur a different number of times
fn balance(
    number: usize,
    line: &str,
    open: char,
    close: char,
    what: &str,
    out: &mut Vec<Diagnostic>,
) -> bool {
    let opening = line.matches(open).count();
    let closing = line.matches(close).count();
    if opening == closing {
        return true;
    }
    out.push(Diagnostic::new(
        number,
        format!("{}: {} opening, {} closing", what, opening, closing),
    ));
    false
}

fn quotes(
    number: usize,
    text: &str,
    out: &mut Vec<Diagnostic>,
) {
    if text.matches('"').count() % 2 != 0 {
        out.push(Diagnostic::new(number, "Unmatched quotes"));
    }
}

/// Base language and generic fallback
pub(super) fn generic(
    number: usize,
    line: &str,
    out: &mut Vec<Diagnostic>,
) {
    quotes(number, line, out);
    balance(number, line, '(', ')', "Unmatched parentheses", out);
}

pub(super) fn basic(
    number: usize,
    line: &str,
    out: &mut Vec<Diagnostic>,
) {
    let command = match line.split_once(char::is_whitespace) {
        Some((head, rest)) if head.chars().all(|c| c.is_ascii_digit()) => rest.trim(),
        None if line.chars().all(|c| c.is_ascii_digit()) => "",
        _ => line,
    };
    let upper = command.to_uppercase();
    if upper.starts_with("REM") {
        return;
    }

    quotes(number, command, out);
    if upper.contains("THEN") && !upper.contains("IF") {
        out.push(Diagnostic::new(number, "THEN without IF"));
    }
}

pub(super) fn logo(
    number: usize,
    line: &str,
    out: &mut Vec<Diagnostic>,
) {
    if line.to_uppercase().contains("REPEAT") {
        balance(number, line, '[', ']', "Unmatched brackets in REPEAT", out);
    }
}

pub(super) fn pilot(
    number: usize,
    line: &str,
    out: &mut Vec<Diagnostic>,
) {
    let mut chars = line.chars();
    let (Some(first), Some(':')) = (chars.next(), chars.next()) else {
        return;
    };
    let prefix = format!("{}:", first.to_uppercase());
    if !PILOT_COMMANDS.iter().any(|c| *c == prefix) {
        out.push(Diagnostic::new(number, format!("Unknown command: {}", prefix)));
    }
}

pub(super) fn pascal(
    number: usize,
    line: &str,
    out: &mut Vec<Diagnostic>,
) {
    let line = line.to_uppercase();
    if line.starts_with('{') || line.starts_with("(*") {
        return;
    }

    // An unbalanced line is taken to continue on the next one.
    if !balance(number, &line, '(', ')', "Unmatched parentheses", out) {
        return;
    }

    let ends_block = PASCAL_BLOCK_SUFFIXES.iter().any(|s| line.ends_with(s));
    let declares = PASCAL_DECL_PREFIXES.iter().any(|p| line.starts_with(p));
    if !line.ends_with(';') && !ends_block && !declares {
        out.push(Diagnostic::new(number, "Missing semicolon"));
    }
}

pub(super) fn prolog(
    number: usize,
    line: &str,
    out: &mut Vec<Diagnostic>,
) {
    if line.starts_with('%') {
        return;
    }
    balance(number, line, '(', ')', "Unmatched parentheses", out);
    if !line.ends_with('.') {
        out.push(Diagnostic::new(number, "Missing period at end of clause"));
    }
}
