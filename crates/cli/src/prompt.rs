use std::io::{self, stdin, stdout, BufRead, Cursor, Stdin, Stdout, Write};

use disk_console_core::error::{Error, Result};
use disk_console_core::prompt::Confirm;

/// Interprets a typed answer, in English or Spanish.
#[must_use]
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" | "s" | "si" | "sí" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Somewhere complete lines of user input come from.
///
/// Implementations return `Ok(0)` at the end of input, like
/// [`BufRead::read_line`].
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks standard input for one line at a time.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Asks confirmation questions on a line-based terminal.
///
/// The question is printed and the answer read until it is recognised.
/// Reaching the end of input is an error rather than an implicit answer.
pub struct TerminalPrompt<R: LineSource, W: Write> {
    input: R,
    output: W,
}

impl TerminalPrompt<Stdin, Stdout> {
    /// A prompt bound to the process's standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin(), stdout())
    }
}

impl<R: LineSource, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Confirm for TerminalPrompt<R, W> {
    fn ask(&mut self, message: &str) -> Result<bool> {
        loop {
            write!(self.output, "{message} ([y]es/[n]o): ")?;
            self.output.flush()?;

            let mut input = String::new();
            if self.input.read_line(&mut input)? == 0 {
                return Err(Error::Stdio(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for an answer",
                )));
            }

            if let Some(answer) = parse_answer(&input) {
                return Ok(answer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y"), Some(true));
        assert_eq!(parse_answer(" YES \n"), Some(true));
        assert_eq!(parse_answer("Sí"), Some(true));
        assert_eq!(parse_answer("n"), Some(false));
        assert_eq!(parse_answer("No"), Some(false));
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("maybe"), None);
    }

    #[test]
    fn test_ask_repeats_until_recognised() {
        let mut prompt = TerminalPrompt::new(Cursor::new("what\n\ns\n"), Vec::new());

        assert!(prompt.ask("Create /home/discos?").unwrap());

        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output.matches("Create /home/discos? ([y]es/[n]o): ").count(), 3);
    }

    #[test]
    fn test_ask_declined() {
        let mut prompt = TerminalPrompt::new(Cursor::new("n\n"), Vec::new());
        assert!(!prompt.ask("Overwrite /a/b.txt?").unwrap());
    }

    #[test]
    fn test_ask_end_of_input_is_error() {
        let mut prompt = TerminalPrompt::new(Cursor::new("huh\n"), Vec::new());
        assert!(matches!(
            prompt.ask("Create /x?"),
            Err(Error::Stdio(e)) if e.kind() == io::ErrorKind::UnexpectedEof
        ));
    }
}
