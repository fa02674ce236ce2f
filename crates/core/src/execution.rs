use std::fmt::{Display, Formatter};

use log::{debug, warn};

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::protocol::{AnalyzeReply, OVERWRITE_CONFIRMATION};

/// Which remedial endpoint a confirmation request is resolved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationKind {
    CreateDirectory,
    CreateFileWithDirectories,
}

impl RemediationKind {
    /// Whether the original command is re-run after a successful remediation.
    ///
    /// Only directory creation replays. File creation already performs the
    /// original command's work on the interpreter side.
    #[must_use]
    pub fn replays_on_success(self) -> bool {
        matches!(self, Self::CreateDirectory)
    }
}

impl Display for RemediationKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDirectory => formatter.write_str("create directory"),
            Self::CreateFileWithDirectories => formatter.write_str("create file with directories"),
        }
    }
}

/// A server-declared need for approval before a creating action proceeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub message: String,
    pub target_path: String,
    /// The submitted command text, verbatim, kept for a possible replay.
    pub original_command: String,
    pub kind: RemediationKind,
    pub overwrite: bool,
}

impl ConfirmationRequest {
    /// Derives the request from an `/analizar` reply flagged as requiring
    /// confirmation.
    ///
    /// Without a confirmation type the interpreter is asking for a missing
    /// directory; any type means a file is involved, and `sobreescribir`
    /// means the file already exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedConfirmation`] if the reply names no path.
    pub fn from_reply(original_command: &str, reply: &AnalyzeReply) -> Result<Self> {
        let confirmation_type = reply
            .confirmation_type
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        let (kind, overwrite, target_path) = match confirmation_type {
            None => (
                RemediationKind::CreateDirectory,
                false,
                reply.dir_path.as_ref().or(reply.path.as_ref()),
            ),
            Some(value) => (
                RemediationKind::CreateFileWithDirectories,
                value.eq_ignore_ascii_case(OVERWRITE_CONFIRMATION),
                reply.path.as_ref().or(reply.dir_path.as_ref()),
            ),
        };

        let target_path = target_path
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| Error::MalformedConfirmation {
                command: original_command.to_string(),
            })?;

        Ok(Self {
            message: reply.message.clone(),
            target_path: target_path.clone(),
            original_command: original_command.to_string(),
            kind,
            overwrite,
        })
    }
}

/// Outcome of one remote command (or one remediation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Ok { message: String },
    NeedsConfirmation(ConfirmationRequest),
    Failure { message: String },
}

/// Sends command text to the interpreter and maps the reply.
pub struct RemoteExecutor<'a, B: Backend> {
    backend: &'a B,
}

impl<'a, B: Backend> RemoteExecutor<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Executes one command remotely. Never fails: transport problems come
    /// back as [`ExecutionResult::Failure`].
    pub fn execute(&self, command_text: &str) -> ExecutionResult {
        let reply = match self.backend.analyze(command_text) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Interpreter unreachable while sending `{command_text}`: {e}");
                return ExecutionResult::Failure {
                    message: connectivity_message(&e),
                };
            }
        };

        if !reply.requires_confirmation {
            return ExecutionResult::Ok {
                message: reply.message,
            };
        }

        if let Some(echoed) = &reply.command {
            if echoed.trim() != command_text.trim() {
                debug!("Interpreter echoed `{echoed}` for `{command_text}`");
            }
        }

        match ConfirmationRequest::from_reply(command_text, &reply) {
            Ok(request) => ExecutionResult::NeedsConfirmation(request),
            Err(e) => {
                warn!("{e}");
                ExecutionResult::Ok {
                    message: format!("{}\n{e}", reply.message),
                }
            }
        }
    }
}

/// Message shown when the interpreter cannot be reached.
#[must_use]
pub fn connectivity_message(error: &Error) -> String {
    format!(
        "Connection error: {error}\nMake sure the command interpreter process is running and reachable."
    )
}
