//! Client configuration for the disk console.
//!
//! This module resolves the configuration file path, expanding shell
//! variables like `~`, and loads the YAML settings that tell the console
//! where the command interpreter lives and how to talk to it.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default path for the client configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.disk-console/config.yml";

/// Default address of the command interpreter
pub const DEFAULT_SERVER_URL: &str = "http://localhost:1921";

/// How the command text is placed in the body of an `/analizar` request.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CommandEncoding {
    /// Raw command text with `Content-Type: text/plain`.
    #[default]
    Plain,
    /// The command text as a JSON string with `Content-Type: application/json`.
    Json,
}

/// Settings loaded from the configuration file.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// working configuration pointing at a local interpreter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    pub command_encoding: CommandEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            command_encoding: CommandEncoding::default(),
        }
    }
}

impl ClientConfig {
    /// Replaces the server URL, validating its scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidServerUrl`] if the URL is not http(s).
    pub fn with_server_url(mut self, server_url: &str) -> Result<Self> {
        validate_server_url(server_url)?;
        self.server_url = server_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    #[must_use]
    pub fn with_command_encoding(mut self, command_encoding: CommandEncoding) -> Self {
        self.command_encoding = command_encoding;
        self
    }

    /// Builds the full URL for an endpoint path such as `/analizar`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), path)
    }
}

fn validate_server_url(server_url: &str) -> Result<()> {
    if server_url.starts_with("http://") || server_url.starts_with("https://") {
        Ok(())
    } else {
        Err(Error::InvalidServerUrl(server_url.to_string()))
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use disk_console_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Loads the client configuration from disk.
///
/// A missing file is not an error: the defaults are returned instead.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The configured server URL is not http(s)
pub fn load_config(config_path: &str) -> Result<ClientConfig> {
    if !Path::exists(Path::new(config_path)) {
        debug!("No config file at `{config_path}`, using defaults");
        return Ok(ClientConfig::default());
    }

    let contents = fs::read_to_string(config_path)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    if contents.trim().is_empty() {
        return Ok(ClientConfig::default());
    }

    let config: ClientConfig = serde_yaml::from_str(&contents).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )
    })?;

    validate_server_url(&config.server_url)?;
    Ok(config)
}
