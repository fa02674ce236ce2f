//! The yes/no decision surface.
//!
//! Asking is a suspension point: the batch waits, with no timeout, until the
//! implementation returns one of the two answers.

use crate::error::Result;

pub trait Confirm {
    /// Presents `message` and blocks until the user decides.
    ///
    /// # Errors
    ///
    /// Returns an error if the interactive surface cannot be read.
    fn ask(&mut self, message: &str) -> Result<bool>;
}

/// Answers every confirmation the same way without asking anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn ask(&mut self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn ask(&mut self, message: &str) -> Result<bool> {
        (**self).ask(message)
    }
}
