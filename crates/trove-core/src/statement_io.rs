//! Line-oriented statement reading and writing
//!
//! One statement per line, three whitespace-separated terms. Lines that carry fewer than
//! three terms never reach the store: they are skipped with a warning, or rejected when the
//! reader is strict.

use crate::error::{TroveError, TroveResult};
use std::io::{BufRead, Write};
use tracing::warn;
use trove_types::{STATEMENT_TERMINATOR, Statement};

/// Pull-based statement reader over any buffered source
#[derive(Debug)]
pub struct StatementReader<R> {
    reader: R,
    buffer: String,
    line_number: usize,
    strict: bool,
    skipped: usize,
}

impl<R: BufRead> StatementReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buffer: String::new(), line_number: 0, strict: false, skipped: 0 }
    }

    /// Fail on malformed lines instead of skipping them
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Next well-formed statement, or `None` at end of input.
    ///
    /// Blank lines are ignored.
    pub fn next_statement(&mut self) -> TroveResult<Option<Statement>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            if self.buffer.trim().is_empty() {
                continue;
            }

            match self.buffer.parse::<Statement>() {
                Ok(statement) => return Ok(Some(statement)),
                Err(err) if self.strict => {
                    return Err(TroveError::malformed_statement(
                        self.line_number,
                        &self.buffer,
                        err.to_string(),
                    ));
                }
                Err(err) => {
                    warn!(line = self.line_number, error = %err, "Skipping malformed statement line");
                    self.skipped += 1;
                }
            }
        }
    }

    /// Lines consumed so far, blank and skipped ones included
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Malformed lines skipped so far
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> Iterator for StatementReader<R> {
    type Item = TroveResult<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_statement().transpose()
    }
}

/// Writes `"<subject> <predicate> <object> ."` lines
#[derive(Debug)]
pub struct StatementWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> StatementWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn write_statement(&mut self, subject: &str, predicate: &str, object: &str) -> TroveResult<()> {
        writeln!(self.writer, "{subject} {predicate} {object} {STATEMENT_TERMINATOR}")?;
        self.written += 1;
        Ok(())
    }

    pub fn write(&mut self, statement: &Statement) -> TroveResult<()> {
        self.write_statement(&statement.subject, &statement.predicate, &statement.object)
    }

    /// Lines written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> TroveResult<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
