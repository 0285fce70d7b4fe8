//! Display surface
//!
//! The router writes coloured text and clears the screen through
//! [`DisplaySurface`]. [`TerminalDisplay`] renders to a terminal;
//! [`Transcript`] keeps everything in memory.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use owo_colors::OwoColorize;

/// Colour tag attached to written text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Ordinary output
    #[default]
    Normal,
    /// Confirmations
    Success,
    /// Headers and framing
    Info,
    /// Errors
    Error,
    /// Advisory notices and diagnostics
    Warning,
}

/// Where the REPL writes its output
pub trait DisplaySurface {
    /// Write `text` as-is (callers include their own line breaks)
    fn write_text(
        &mut self,
        text: &str,
        color: Color,
    );

    /// Clear everything shown so far
    fn clear_screen(&mut self);

    /// Write `text` followed by a line break
    fn write_line(
        &mut self,
        text: &str,
        color: Color,
    ) {
        self.write_text(&format!("{}\n", text), color);
    }
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for &mut D {
    fn write_text(
        &mut self,
        text: &str,
        color: Color,
    ) {
        (**self).write_text(text, color);
    }

    fn clear_screen(&mut self) {
        (**self).clear_screen();
    }
}

/// Terminal output with optional ANSI colours
#[derive(Debug)]
pub struct TerminalDisplay<W: Write = Stdout> {
    out: W,
    colors: bool,
}

impl TerminalDisplay<Stdout> {
    /// Display on stdout
    pub fn stdout(colors: bool) -> Self {
        Self::new(io::stdout(), colors)
    }
}

impl<W: Write> TerminalDisplay<W> {
    /// Display on any writer
    pub fn new(
        out: W,
        colors: bool,
    ) -> Self {
        Self { out, colors }
    }

    /// Underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(
        &self,
        text: &str,
        color: Color,
    ) -> String {
        if !self.colors {
            return text.to_string();
        }
        match color {
            Color::Normal => text.to_string(),
            Color::Success => text.bright_green().to_string(),
            Color::Info => text.bright_cyan().to_string(),
            Color::Error => text.bright_red().to_string(),
            Color::Warning => text.bright_yellow().to_string(),
        }
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    fn write_text(
        &mut self,
        text: &str,
        color: Color,
    ) {
        let painted = self.paint(text, color);
        // A closed terminal leaves nothing to report to.
        let _ = self.out.write_all(painted.as_bytes());
        let _ = self.out.flush();
    }

    fn clear_screen(&mut self) {
        let _ = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0));
    }
}

/// One recorded display operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Text { text: String, color: Color },
    Clear,
}

/// In-memory display surface
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    events: Vec<DisplayEvent>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Text visible on screen: everything written since the last clear
    pub fn screen(&self) -> String {
        let start = self
            .events
            .iter()
            .rposition(|e| *e == DisplayEvent::Clear)
            .map_or(0, |i| i + 1);
        Self::join(&self.events[start..])
    }

    /// All text ever written, ignoring clears
    pub fn all_text(&self) -> String {
        Self::join(&self.events)
    }

    /// Number of screen clears
    pub fn clears(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == DisplayEvent::Clear)
            .count()
    }

    /// Texts written with `color`
    pub fn texts_with(
        &self,
        color: Color,
    ) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Text { text, color: c } if *c == color => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Forget everything recorded
    pub fn reset(&mut self) {
        self.events.clear();
    }

    fn join(events: &[DisplayEvent]) -> String {
        events
            .iter()
            .filter_map(|e| match e {
                DisplayEvent::Text { text, .. } => Some(text.as_str()),
                DisplayEvent::Clear => None,
            })
            .collect()
    }
}

impl DisplaySurface for Transcript {
    fn write_text(
        &mut self,
        text: &str,
        color: Color,
    ) {
        self.events.push(DisplayEvent::Text {
            text: text.to_string(),
            color,
        });
    }

    fn clear_screen(&mut self) {
        self.events.push(DisplayEvent::Clear);
    }
}
