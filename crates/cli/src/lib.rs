//! Disk Console CLI Library
//!
//! This crate provides the terminal front end for the disk console: it parses
//! command-line options, draws the session log, asks confirmation questions
//! on the terminal and drives the interactive loop.
//!
//! # Key Features
//!
//! - **One-shot Batches**: Run a script file or inline text and exit
//! - **Interactive Console**: Submit one line at a time, or stage a script and run it on demand
//! - **Confirmation Policies**: Ask on the terminal, or answer every question with `--yes`/`--no`
//! - **Live Output**: Each log entry is drawn as soon as it is produced
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`prompt`]: Yes/no questions on a line-based terminal
//! - [`render`]: Colourised drawing of the session log
//! - [`console`]: The interactive read-run loop
//!
//! # Examples
//!
//! The CLI binary (`dc`) can be used in several ways:
//!
//! ```bash
//! # Interactive console against the default interpreter
//! dc
//!
//! # Run a script once
//! dc --file ~/scripts/calificacion.smia
//!
//! # Run inline commands, creating missing directories without asking
//! dc --yes --execute "mkdisk -size=10 -path=/home/discos/d1.mia"
//!
//! # Load a script, then run it from the console with an empty line
//! dc --file setup.smia --interactive
//!
//! # Talk to a remote interpreter using JSON string bodies
//! dc --server http://10.0.0.5:1921 --json-body
//! ```

pub mod cli_args;
pub mod console;
pub mod prompt;
pub mod render;
