//! Transport to the remote command interpreter.
//!
//! [`Backend`] is the seam between the orchestration logic and the network:
//! the orchestrator only ever sees decoded replies or an [`Error`]. The HTTP
//! implementation uses a blocking client with no timeout and bypasses system
//! proxies.

use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;

use crate::config::{ClientConfig, CommandEncoding};
use crate::error::{Error, Result};
use crate::protocol::{
    AnalyzeReply, CreateDirectoryRequest, CreateFileDirectoriesRequest, RemediationReply,
    ANALYZE_PATH, CREATE_DIRECTORY_PATH, CREATE_FILE_DIRECTORIES_PATH,
};

/// The three endpoints the console talks to.
pub trait Backend {
    /// Sends one command to the interpreter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered, the status is not
    /// a success, or the reply is not the expected JSON.
    fn analyze(&self, command: &str) -> Result<AnalyzeReply>;

    /// Asks the interpreter to create a missing directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered or no reply can be
    /// decoded.
    fn create_directory(&self, request: &CreateDirectoryRequest) -> Result<RemediationReply>;

    /// Asks the interpreter to create a file along with its parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be delivered or no reply can be
    /// decoded.
    fn create_file_directories(
        &self,
        request: &CreateFileDirectoriesRequest,
    ) -> Result<RemediationReply>;
}

pub struct HttpBackend {
    client: Client,
    config: ClientConfig,
}

impl HttpBackend {
    /// Builds the HTTP client for the configured interpreter.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .no_proxy()
            .user_agent(concat!("disk-console/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!("Using command interpreter at {}", config.server_url);
        Ok(Self { client, config })
    }

    fn post_remediation<T: Serialize>(&self, path: &str, body: &T) -> Result<RemediationReply> {
        let url = self.config.endpoint(path);
        debug!("POST {url}");

        let response = self.client.post(&url).json(body).send()?;
        let status = response.status();
        let text = response.text()?;

        // Error statuses still carry a JSON body describing what went wrong
        match serde_json::from_str::<RemediationReply>(&text) {
            Ok(reply) => Ok(reply),
            Err(_) if !status.is_success() => Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
            }),
            Err(e) => Err(Error::decode_error(&url, e)),
        }
    }
}

impl Backend for HttpBackend {
    fn analyze(&self, command: &str) -> Result<AnalyzeReply> {
        let url = self.config.endpoint(ANALYZE_PATH);
        debug!("POST {url} ({:?} body)", self.config.command_encoding);

        let request = match self.config.command_encoding {
            CommandEncoding::Plain => self
                .client
                .post(&url)
                .header(CONTENT_TYPE, "text/plain")
                .body(command.to_string()),
            CommandEncoding::Json => {
                let body = serde_json::to_string(command).map_err(|original| Error::Encode {
                    url: url.clone(),
                    original,
                })?;
                self.client
                    .post(&url)
                    .header(CONTENT_TYPE, "application/json")
                    .body(body)
            }
        };

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text()?;
        serde_json::from_str(&text).map_err(|e| Error::decode_error(&url, e))
    }

    fn create_directory(&self, request: &CreateDirectoryRequest) -> Result<RemediationReply> {
        self.post_remediation(CREATE_DIRECTORY_PATH, request)
    }

    fn create_file_directories(
        &self,
        request: &CreateFileDirectoriesRequest,
    ) -> Result<RemediationReply> {
        self.post_remediation(CREATE_FILE_DIRECTORIES_PATH, request)
    }
}
