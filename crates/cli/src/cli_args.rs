//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and provides
//! validation for CLI arguments using the `clap` crate.

use clap::Parser;
use disk_console_core::error::{Error, Result};

/// Command-line arguments for the disk console.
///
/// Without `--file` or `--execute` the console starts interactively and runs
/// each entered line as its own batch.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use disk_console_cli::cli_args::Args;
///
/// let args = Args::parse_from(["dc", "--execute", "mounted"]);
/// assert_eq!(args.execute.as_deref(), Some("mounted"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the client config file YAML.
    ///
    /// If not provided, defaults to `~/.disk-console/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Base URL of the command interpreter, overriding the config file.
    #[arg(long, short = 's')]
    pub server: Option<String>,

    /// Send commands to the interpreter as JSON strings instead of plain text.
    #[arg(long, action)]
    pub json_body: bool,

    /// Script file whose lines are run, in order, as one batch.
    #[arg(long, short = 'f', conflicts_with = "execute")]
    pub file: Option<String>,

    /// Command text to run as one batch. May contain several lines.
    #[arg(long, short = 'e')]
    pub execute: Option<String>,

    /// Load the `--file` script as pending input and start the interactive
    /// console instead of running it straight away.
    ///
    /// Submit an empty line to run the loaded script; `clear` discards it.
    #[arg(long, short = 'i', action, requires = "file")]
    pub interactive: bool,

    /// Answer "yes" to every confirmation without asking.
    #[arg(long, short = 'y', action)]
    pub yes: bool,

    /// Answer "no" to every confirmation without asking.
    #[arg(long, short = 'n', action)]
    pub no: bool,
}

/// How confirmation requests from the interpreter are answered.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ConfirmPolicy {
    /// Ask on the terminal every time
    Ask,
    AlwaysYes,
    AlwaysNo,
}

/// What the console does once it is set up.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum RunMode {
    /// Run the given text once and exit
    Execute(String),
    /// Run a script file once and exit
    Script(String),
    /// Interactive console, optionally with a script staged as pending input
    Interactive { staged_script: Option<String> },
}

/// Trait for objects that can determine how confirmations are answered.
pub trait Provider {
    /// Validates that `--yes` and `--no` aren't mixed and returns the
    /// appropriate [`ConfirmPolicy`].
    ///
    /// # Errors
    ///
    /// Returns an error if both `--yes` and `--no` are given.
    fn get_confirm_policy(&self) -> Result<ConfirmPolicy>;
}

/// Determines the confirmation policy from the two flags.
///
/// # Errors
///
/// Returns [`Error::MixedConfirmationPolicy`] if both flags are set.
pub fn determine(always_yes: bool, always_no: bool) -> Result<ConfirmPolicy> {
    match (always_yes, always_no) {
        (true, true) => Err(Error::MixedConfirmationPolicy),
        (true, false) => Ok(ConfirmPolicy::AlwaysYes),
        (false, true) => Ok(ConfirmPolicy::AlwaysNo),
        (false, false) => Ok(ConfirmPolicy::Ask),
    }
}

impl Provider for Args {
    fn get_confirm_policy(&self) -> Result<ConfirmPolicy> {
        determine(self.yes, self.no)
    }
}

impl Args {
    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        match (&self.execute, &self.file) {
            (Some(text), _) => RunMode::Execute(text.clone()),
            (None, Some(path)) if self.interactive => RunMode::Interactive {
                staged_script: Some(path.clone()),
            },
            (None, Some(path)) => RunMode::Script(path.clone()),
            (None, None) => RunMode::Interactive {
                staged_script: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["dc"]);

        assert!(args.config_path.is_none());
        assert!(args.server.is_none());
        assert!(!args.json_body);
        assert!(args.file.is_none());
        assert!(args.execute.is_none());
        assert!(!args.interactive);
        assert!(!args.yes);
        assert!(!args.no);
        assert_eq!(
            args.run_mode(),
            RunMode::Interactive {
                staged_script: None
            }
        );
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "dc",
            "-c",
            "/custom/config.yml",
            "-s",
            "http://10.0.0.5:1921",
            "-f",
            "/scripts/calificacion.smia",
            "-y",
        ]);

        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.server, Some("http://10.0.0.5:1921".to_string()));
        assert_eq!(args.file, Some("/scripts/calificacion.smia".to_string()));
        assert!(args.yes);
        assert_eq!(
            args.run_mode(),
            RunMode::Script("/scripts/calificacion.smia".to_string())
        );
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "dc",
            "--config-path",
            "/custom/config.yml",
            "--server",
            "http://localhost:1921",
            "--json-body",
            "--execute",
            "mkdisk -size=10\nrmdisk -name=Disco1",
            "--no",
        ]);

        assert!(args.json_body);
        assert!(args.no);
        assert_eq!(
            args.run_mode(),
            RunMode::Execute("mkdisk -size=10\nrmdisk -name=Disco1".to_string())
        );
    }

    #[test]
    fn test_interactive_stages_script() {
        let args = Args::parse_from(["dc", "--file", "setup.smia", "--interactive"]);
        assert_eq!(
            args.run_mode(),
            RunMode::Interactive {
                staged_script: Some("setup.smia".to_string())
            }
        );
    }

    #[test]
    fn test_interactive_requires_file() {
        assert!(Args::try_parse_from(["dc", "--interactive"]).is_err());
    }

    #[test]
    fn test_file_conflicts_with_execute() {
        assert!(Args::try_parse_from(["dc", "-f", "a.smia", "-e", "mounted"]).is_err());
    }

    #[test]
    fn test_policy_provider() {
        assert_eq!(
            Args::parse_from(["dc"]).get_confirm_policy().unwrap(),
            ConfirmPolicy::Ask
        );
        assert_eq!(
            Args::parse_from(["dc", "-y"]).get_confirm_policy().unwrap(),
            ConfirmPolicy::AlwaysYes
        );
        assert_eq!(
            Args::parse_from(["dc", "-n"]).get_confirm_policy().unwrap(),
            ConfirmPolicy::AlwaysNo
        );
    }

    #[test]
    fn test_policy_provider_mixed_error() {
        let args = Args::parse_from(["dc", "--yes", "--no"]);
        assert!(matches!(
            args.get_confirm_policy(),
            Err(Error::MixedConfirmationPolicy)
        ));
    }
}
