//! Batch splitting and line classification.
//!
//! A batch is the full text submitted in one action. It is split on line
//! breaks, blank lines are dropped, and every remaining line is tagged with
//! the [`LineKind`] that decides where it is dispatched. Nothing here has
//! side effects.

use std::fmt::{Display, Formatter};

use crate::registry::LocalRegistry;

/// Marker that starts a comment line
pub const COMMENT_PREFIX: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Local,
    Remote,
}

/// One line of a batch together with its derived kind.
///
/// `raw_text` has its line terminator removed but is otherwise exactly what
/// was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub raw_text: String,
    pub kind: LineKind,
}

impl CommandLine {
    /// The line as it is sent and echoed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.raw_text
    }

    /// The line without surrounding whitespace, used for classification and
    /// local command lookup only.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.raw_text.trim()
    }
}

impl Display for CommandLine {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.text())
    }
}

/// Classifies a single line against the local command registry.
#[must_use]
pub fn classify(raw_text: &str, registry: &LocalRegistry) -> LineKind {
    let trimmed = raw_text.trim();

    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with(COMMENT_PREFIX) {
        LineKind::Comment
    } else if registry.contains(trimmed) {
        LineKind::Local
    } else {
        LineKind::Remote
    }
}

/// Splits batch text into its executable lines, preserving input order.
///
/// Both `\n` and `\r\n` line endings are accepted. Lines that are empty after
/// trimming are discarded, so no [`LineKind::Blank`] line is ever returned.
#[must_use]
pub fn split_batch(batch: &str, registry: &LocalRegistry) -> Vec<CommandLine> {
    batch
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| CommandLine {
            raw_text: line.to_string(),
            kind: classify(line, registry),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(batch: &str) -> Vec<LineKind> {
        let registry = LocalRegistry::with_builtins();
        split_batch(batch, &registry)
            .into_iter()
            .map(|line| line.kind)
            .collect()
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let registry = LocalRegistry::with_builtins();
        let lines = split_batch("mkdisk -size=10\n\n   \n\trmdisk -name=Disco1\n", &registry);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "mkdisk -size=10");
        assert_eq!(lines[1].trimmed(), "rmdisk -name=Disco1");
    }

    #[test]
    fn test_surrounding_whitespace_is_kept() {
        let registry = LocalRegistry::with_builtins();
        let lines = split_batch("  mkfile -path=/a.txt -cont=x  \r\n   # note\n", &registry);

        assert_eq!(lines[0].text(), "  mkfile -path=/a.txt -cont=x  ");
        assert_eq!(lines[0].trimmed(), "mkfile -path=/a.txt -cont=x");
        assert_eq!(lines[1].text(), "   # note");
        assert_eq!(lines[1].kind, LineKind::Comment);
    }

    #[test]
    fn test_order_is_preserved() {
        let registry = LocalRegistry::with_builtins();
        let batch = "mount -name=Part1\nmkfs -id=341A\nlogin -user=root";
        let texts: Vec<String> = split_batch(batch, &registry)
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(texts, vec!["mount -name=Part1", "mkfs -id=341A", "login -user=root"]);
    }

    #[test]
    fn test_comment_detected_after_trim() {
        assert_eq!(kinds("   # setup disks"), vec![LineKind::Comment]);
        assert_eq!(kinds("#"), vec![LineKind::Comment]);
    }

    #[test]
    fn test_local_commands_are_case_insensitive() {
        assert_eq!(
            kinds("clear\nHELP\n  Clear  "),
            vec![LineKind::Local, LineKind::Local, LineKind::Local]
        );
    }

    #[test]
    fn test_local_name_with_arguments_is_remote() {
        assert_eq!(kinds("help mkdisk"), vec![LineKind::Remote]);
    }

    #[test]
    fn test_everything_else_is_remote() {
        assert_eq!(
            kinds("mkdisk -size=10\nexit\nrep -id=341A -name=mbr"),
            vec![LineKind::Remote, LineKind::Remote, LineKind::Remote]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let registry = LocalRegistry::with_builtins();
        let lines = split_batch("mkdisk -size=10\r\nhelp\r\n", &registry);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].raw_text, "mkdisk -size=10");
        assert_eq!(lines[1].kind, LineKind::Local);
    }

    #[test]
    fn test_classify_blank() {
        let registry = LocalRegistry::with_builtins();
        assert_eq!(classify("  \t ", &registry), LineKind::Blank);
    }
}
