//! Sequential batch execution.
//!
//! Each line is fully resolved, including any confirmation, remediation and
//! replay it triggers, before the next one is dispatched. Remote state left
//! behind by one line (mounted partitions, created directories) is what the
//! following lines depend on.

use log::{debug, info, warn};

use crate::backend::Backend;
use crate::classifier::{split_batch, CommandLine, LineKind};
use crate::execution::{ConfirmationRequest, ExecutionResult, RemoteExecutor};
use crate::prompt::Confirm;
use crate::registry::LocalRegistry;
use crate::remediation::RemediationDispatcher;
use crate::session::Session;

/// How many nested replays a single confirmation cycle may start
pub const MAX_REPLAY_DEPTH: usize = 1;

/// Prefix echoed before every submitted command
pub const ECHO_PREFIX: &str = "> ";

pub const CANCELLED_NOTICE: &str = "Operation cancelled by the user.";

/// Counters describing what happened during one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Top-level lines dispatched (replays are not counted here)
    pub lines: usize,
    pub local_commands: usize,
    pub confirmations: usize,
    pub declined: usize,
    pub remediations: usize,
    pub remediation_failures: usize,
    pub replays: usize,
    /// Set when a connectivity failure stopped the batch
    pub aborted: Option<String>,
}

impl BatchReport {
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted.is_some()
    }
}

enum Flow {
    Continue,
    Abort(String),
}

pub struct Orchestrator<'a, B: Backend, C: Confirm> {
    registry: &'a LocalRegistry,
    executor: RemoteExecutor<'a, B>,
    dispatcher: RemediationDispatcher<'a, B>,
    prompt: C,
    session: Session,
}

impl<'a, B: Backend, C: Confirm> Orchestrator<'a, B, C> {
    pub fn new(registry: &'a LocalRegistry, backend: &'a B, prompt: C, session: Session) -> Self {
        Self {
            registry,
            executor: RemoteExecutor::new(backend),
            dispatcher: RemediationDispatcher::new(backend),
            prompt,
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn prompt(&self) -> &C {
        &self.prompt
    }

    /// Runs every non-blank line of `batch` in order.
    ///
    /// Stops early only when the interpreter cannot be reached; the lines
    /// after the failing one are never sent.
    pub fn run_batch(&mut self, batch: &str) -> BatchReport {
        let lines = split_batch(batch, self.registry);
        debug!("Running batch of {} line(s)", lines.len());

        let mut report = BatchReport::default();
        for line in &lines {
            report.lines += 1;
            if let Flow::Abort(reason) = self.run_line(line, 0, &mut report) {
                warn!("Batch stopped at `{line}`: {reason}");
                report.aborted = Some(reason);
                break;
            }
        }

        report
    }

    /// Runs whatever input is staged in the session, if any.
    pub fn run_pending(&mut self) -> Option<BatchReport> {
        let pending = self.session.take_pending_input()?;
        Some(self.run_batch(&pending))
    }

    fn run_line(&mut self, line: &CommandLine, depth: usize, report: &mut BatchReport) -> Flow {
        match line.kind {
            LineKind::Blank => Flow::Continue,
            LineKind::Local => {
                report.local_commands += 1;
                let registry = self.registry;
                if let Some(entry) = registry.get(line.trimmed()) {
                    (entry.handler)(&mut self.session, registry, line.text());
                }
                Flow::Continue
            }
            LineKind::Comment => {
                let echo = line.text().to_string();
                self.run_remote(line.text(), echo, depth, report)
            }
            LineKind::Remote => {
                let echo = format!("{ECHO_PREFIX}{}", line.text());
                self.run_remote(line.text(), echo, depth, report)
            }
        }
    }

    fn run_remote(
        &mut self,
        command: &str,
        echo: String,
        depth: usize,
        report: &mut BatchReport,
    ) -> Flow {
        match self.executor.execute(command) {
            ExecutionResult::Ok { message } => {
                if message.trim().is_empty() {
                    self.session.log_mut().append(echo);
                } else {
                    self.session.log_mut().append(format!("{echo}\n{message}"));
                }
                Flow::Continue
            }
            ExecutionResult::Failure { message } => {
                self.session.log_mut().append(format!("{echo}\n{message}"));
                Flow::Abort(message)
            }
            ExecutionResult::NeedsConfirmation(request) => {
                self.session
                    .log_mut()
                    .append(format!("{echo}\n{}", request.message));
                self.resolve_confirmation(&request, depth, report)
            }
        }
    }

    fn resolve_confirmation(
        &mut self,
        request: &ConfirmationRequest,
        depth: usize,
        report: &mut BatchReport,
    ) -> Flow {
        report.confirmations += 1;

        let approved = match self.prompt.ask(&request.message) {
            Ok(approved) => approved,
            Err(e) => {
                warn!("Confirmation prompt failed: {e}");
                self.session.log_mut().append(format!(
                    "Could not read the confirmation answer ({e}); treating it as \"no\"."
                ));
                false
            }
        };

        if !approved {
            report.declined += 1;
            self.session.log_mut().append(CANCELLED_NOTICE.to_string());
            return Flow::Continue;
        }

        match self.dispatcher.remediate(request, self.session.log_mut()) {
            ExecutionResult::Ok { .. } => report.remediations += 1,
            ExecutionResult::Failure { .. } => {
                report.remediation_failures += 1;
                return Flow::Continue;
            }
            ExecutionResult::NeedsConfirmation(_) => {
                warn!("Remediation asked for a further confirmation; ignoring it");
                return Flow::Continue;
            }
        }

        if !request.kind.replays_on_success() {
            return Flow::Continue;
        }

        if depth >= MAX_REPLAY_DEPTH {
            self.session.log_mut().append(format!(
                "Not re-running `{}`: retry limit reached.",
                request.original_command
            ));
            return Flow::Continue;
        }

        info!("Re-running `{}`", request.original_command);
        report.replays += 1;
        self.replay(&request.original_command, depth + 1, report)
    }

    /// Re-enters the pipeline with the original command as a one-line batch.
    fn replay(&mut self, command: &str, depth: usize, report: &mut BatchReport) -> Flow {
        for line in split_batch(command, self.registry) {
            if let Flow::Abort(reason) = self.run_line(&line, depth, report) {
                return Flow::Abort(reason);
            }
        }
        Flow::Continue
    }
}
