//! Built-in commands handled without contacting the interpreter.
//!
//! The registry is built once at start-up and handed to the orchestrator by
//! reference. Names are stored lowercase and looked up case-insensitively.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

use crate::session::Session;

/// Handler run in-process for a local command, given the line as submitted
pub type LocalHandler = fn(&mut Session, &LocalRegistry, &str);

/// A single built-in command.
#[derive(Clone)]
pub struct LocalCommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: LocalHandler,
}

impl Display for LocalCommandEntry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}: {}", self.name, self.description)
    }
}

/// Immutable mapping from lowercase command name to its entry.
///
/// Insertion order is kept so `help` lists commands in the order they were
/// registered.
pub struct LocalRegistry {
    entries: IndexMap<String, LocalCommandEntry>,
}

impl LocalRegistry {
    /// The registry with the `clear` and `help` built-ins.
    #[must_use]
    pub fn with_builtins() -> Self {
        Self::from_entries(vec![
            LocalCommandEntry {
                name: "clear",
                description: "Clears the output log and any pending input",
                handler: clear,
            },
            LocalCommandEntry {
                name: "help",
                description: "Shows the list of available local commands",
                handler: help,
            },
        ])
    }

    /// Builds a registry from entries. A later entry with the same name
    /// (ignoring case) replaces an earlier one, keeping names unique.
    #[must_use]
    pub fn from_entries(entries: Vec<LocalCommandEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.name.to_lowercase(), entry))
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LocalCommandEntry> {
        self.entries.get(&name.trim().to_lowercase())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalCommandEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Static summary of the built-ins, as appended by `help`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = String::from("Available commands:\n");
        for entry in self.iter() {
            text.push_str(&format!("\n{entry}"));
        }
        text.push_str("\n\nAny other line is sent to the command interpreter.");
        text
    }
}

fn clear(session: &mut Session, _registry: &LocalRegistry, _submitted: &str) {
    session.clear();
}

fn help(session: &mut Session, registry: &LocalRegistry, submitted: &str) {
    session
        .log_mut()
        .append(format!("> {submitted}\n{}", registry.summary()));
}
