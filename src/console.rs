//! Console dialogue primitives
//!
//! Input is read as whitespace-separated tokens, so a value may sit on its own
//! line or share a line with the values that follow it.

use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Reads whitespace-separated tokens from a buffered reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Next token parsed as `T`; `expected` names the value in error messages
    pub fn next_value<T: FromStr>(&mut self, expected: &str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or_else(|| Error::unexpected_eof(expected))?;
        token
            .parse()
            .map_err(|_| Error::invalid_number(token, expected))
    }
}

/// Write a prompt without a line break and flush it so it shows before the read
pub fn prompt(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}
