//! Where the demo objects send their diagnostic lines.
//!
//! Production code writes to stdout; tests hand the same objects a
//! [`Transcript`] and assert on the recorded lines.

use crate::error::Result;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

pub trait Console {
    fn print_line(&self, line: &str) -> Result<()>;
}

/// Writes each line to the process stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Console for Stdout {
    fn print_line(&self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }
}

/// Records lines in memory.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: RefCell<Vec<String>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the recorded lines and clears the transcript.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }
}

impl Console for Transcript {
    fn print_line(&self, line: &str) -> Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}

impl<C: Console + ?Sized> Console for &C {
    fn print_line(&self, line: &str) -> Result<()> {
        (**self).print_line(line)
    }
}

impl<C: Console + ?Sized> Console for Rc<C> {
    fn print_line(&self, line: &str) -> Result<()> {
        (**self).print_line(line)
    }
}
