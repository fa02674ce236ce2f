//! The interactive console loop.

use std::io::Write;

use itertools::Itertools;
use log::{debug, info};

use disk_console_core::backend::Backend;
use disk_console_core::error::Result;
use disk_console_core::orchestrator::{BatchReport, Orchestrator};
use disk_console_core::prompt::Confirm;

use crate::prompt::LineSource;

pub const PROMPT: &str = "dc> ";

const BANNER: &str = "Disk console. Type `help` for local commands, end input to quit.";

/// Totals over every batch submitted during one console session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleStats {
    pub batches: usize,
    pub lines: usize,
    pub aborted_batches: usize,
}

impl ConsoleStats {
    fn record(&mut self, report: &BatchReport) {
        self.batches += 1;
        self.lines += report.lines;
        if report.is_aborted() {
            self.aborted_batches += 1;
        }
    }
}

/// One-line description of a finished batch, e.g.
/// `3 line(s), 1 confirmation(s), 1 remediation(s)`.
#[must_use]
pub fn summary_line(report: &BatchReport) -> String {
    let counts = [
        (report.lines, "line(s)"),
        (report.local_commands, "local command(s)"),
        (report.confirmations, "confirmation(s)"),
        (report.declined, "declined"),
        (report.remediations, "remediation(s)"),
        (report.remediation_failures, "failed remediation(s)"),
        (report.replays, "replay(s)"),
    ];

    let summary = counts
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{count} {label}"))
        .join(", ");

    match (&report.aborted, summary.is_empty()) {
        (Some(reason), _) => format!("Batch aborted after {} line(s): {reason}", report.lines),
        (None, true) => "Nothing to run".to_string(),
        (None, false) => summary,
    }
}

/// Reads lines from `input` until it ends, running each as its own batch.
///
/// An empty line runs whatever input is staged in the session, such as a
/// script loaded with `--interactive`. A batch that loses the interpreter
/// does not end the console.
///
/// # Errors
///
/// Returns an error if `input` or `out` fail.
pub fn run_interactive<B, C, R, W>(
    orchestrator: &mut Orchestrator<'_, B, C>,
    input: &mut R,
    out: &mut W,
) -> Result<ConsoleStats>
where
    B: Backend,
    C: Confirm,
    R: LineSource,
    W: Write,
{
    let mut stats = ConsoleStats::default();

    writeln!(out, "{BANNER}")?;
    if orchestrator.session().pending_input().is_some() {
        writeln!(out, "Script loaded. Submit an empty line to run it.")?;
    }

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Console input closed");
            break;
        }

        let report = if line.trim().is_empty() {
            match orchestrator.run_pending() {
                Some(report) => report,
                None => continue,
            }
        } else {
            orchestrator.run_batch(&line)
        };

        if report.is_aborted() {
            writeln!(out, "{}", summary_line(&report))?;
        }
        stats.record(&report);
    }

    info!(
        "Console closed after {} batch(es), {} aborted",
        stats.batches, stats.aborted_batches
    );
    Ok(stats)
}
