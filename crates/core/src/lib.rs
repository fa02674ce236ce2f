//! Disk Console Core Library
//!
//! This crate provides the client-side orchestration for the disk console: it
//! turns multi-line command text into an ordered sequence of requests against
//! a remote filesystem command interpreter, handles a small set of built-in
//! commands locally, and runs the confirmation, remediation and retry
//! protocol for commands the interpreter cannot complete on its own.
//!
//! # Key Features
//!
//! - **Line Classification**: Split a batch into comment, local and remote lines
//! - **Local Commands**: `clear` and `help`, handled without a network call
//! - **Remote Execution**: Send commands to the interpreter and map its replies
//! - **Remediation**: Create missing directories or files once the user agrees
//! - **Batch Orchestration**: Strictly sequential execution with abort on lost connectivity
//! - **Scripts**: Load a whole script file and run it as one batch
//!
//! # Examples
//!
//! Running a batch against a local interpreter, answering every confirmation
//! with "yes":
//!
//! ```no_run
//! use disk_console_core::backend::HttpBackend;
//! use disk_console_core::config::ClientConfig;
//! use disk_console_core::orchestrator::Orchestrator;
//! use disk_console_core::prompt::FixedAnswer;
//! use disk_console_core::registry::LocalRegistry;
//! use disk_console_core::session::Session;
//!
//! let registry = LocalRegistry::with_builtins();
//! let backend = HttpBackend::new(ClientConfig::default())?;
//! let mut orchestrator = Orchestrator::new(&registry, &backend, FixedAnswer(true), Session::new());
//!
//! let report = orchestrator.run_batch("mkdisk -size=10\nrmdisk -name=Disco1");
//! println!("{}", orchestrator.session().log().render());
//! assert!(!report.is_aborted());
//! # Ok::<(), disk_console_core::error::Error>(())
//! ```

pub mod backend;
pub mod classifier;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod orchestrator;
pub mod prompt;
pub mod protocol;
pub mod registry;
pub mod remediation;
pub mod session;
