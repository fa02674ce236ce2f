//! Corrective actions run after the user approves a confirmation request.

use log::{info, warn};

use crate::backend::Backend;
use crate::error::Result;
use crate::execution::{ConfirmationRequest, ExecutionResult, RemediationKind};
use crate::protocol::{CreateDirectoryRequest, CreateFileDirectoriesRequest, RemediationReply};
use crate::session::OutputLog;

pub struct RemediationDispatcher<'a, B: Backend> {
    backend: &'a B,
}

impl<'a, B: Backend> RemediationDispatcher<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Calls the endpoint matching `request.kind` and appends the outcome to
    /// the log.
    ///
    /// Returns [`ExecutionResult::Ok`] when the interpreter reports success
    /// and [`ExecutionResult::Failure`] otherwise. A failure here never stops
    /// the batch; deciding whether to replay is left to the caller.
    pub fn remediate(&self, request: &ConfirmationRequest, log: &mut OutputLog) -> ExecutionResult {
        info!(
            "Remediating `{}` with {} on `{}`",
            request.original_command, request.kind, request.target_path
        );

        match self.send(request) {
            Ok(reply) if reply.success => {
                let message = reply.text();
                log.append(message.clone());
                ExecutionResult::Ok { message }
            }
            Ok(reply) => {
                let message = reply.text();
                log.append(message.clone());
                ExecutionResult::Failure { message }
            }
            Err(e) => {
                warn!("Remediation request failed: {e}");
                let message = format!("Could not {}: {e}", request.kind);
                log.append(message.clone());
                ExecutionResult::Failure { message }
            }
        }
    }

    fn send(&self, request: &ConfirmationRequest) -> Result<RemediationReply> {
        match request.kind {
            RemediationKind::CreateDirectory => {
                self.backend.create_directory(&CreateDirectoryRequest {
                    path: request.target_path.clone(),
                    command: request.original_command.clone(),
                })
            }
            RemediationKind::CreateFileWithDirectories => {
                self.backend
                    .create_file_directories(&CreateFileDirectoriesRequest {
                        path: request.target_path.clone(),
                        command: request.original_command.clone(),
                        confirm: true,
                        overwrite: request.overwrite,
                    })
            }
        }
    }
}
