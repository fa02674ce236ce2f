//! Terminal rendering of the session log.
//!
//! Entries are drawn as soon as they are appended, so a long batch shows its
//! progress line by line instead of all at the end.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use log::warn;

use disk_console_core::error::Result;
use disk_console_core::orchestrator::{CANCELLED_NOTICE, ECHO_PREFIX};
use disk_console_core::session::LogObserver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// A submitted command, echoed back
    Echo,
    Error,
    Notice,
    Plain,
}

impl LineStyle {
    #[must_use]
    pub fn of(line: &str) -> Self {
        if line.starts_with(ECHO_PREFIX) {
            Self::Echo
        } else if line.starts_with("Connection error") || line.starts_with("Could not") {
            Self::Error
        } else if line == CANCELLED_NOTICE || line.starts_with("Not re-running") {
            Self::Notice
        } else {
            Self::Plain
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Self::Echo => Some(Color::Cyan),
            Self::Error => Some(Color::Red),
            Self::Notice => Some(Color::Yellow),
            Self::Plain => None,
        }
    }
}

/// Draws log entries onto a terminal-like writer.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_entry(&mut self, entry: &str) -> Result<()> {
        for line in entry.lines() {
            let style = LineStyle::of(line);
            if style == LineStyle::Echo {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            match style.color() {
                Some(color) => queue!(
                    self.out,
                    SetForegroundColor(color),
                    Print(line),
                    ResetColor
                )?,
                None => queue!(self.out, Print(line))?,
            }
            queue!(self.out, SetAttribute(Attribute::Reset), Print("\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn wipe(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> LogObserver for TerminalRenderer<W> {
    fn on_append(&mut self, entry: &str) {
        if let Err(e) = self.draw_entry(entry) {
            warn!("Could not draw log entry: {e}");
        }
    }

    fn on_clear(&mut self) {
        if let Err(e) = self.wipe() {
            warn!("Could not clear the terminal: {e}");
        }
    }
}
