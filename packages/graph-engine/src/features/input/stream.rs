use std::io::{BufRead, Cursor};
use std::str::FromStr;

use tracing::debug;

use crate::errors::{GraphError, Result};

/// Token and line reader over a buffered source
pub struct InputStream<R> {
    reader: R,
    /// Unread remainder of the current line, without its terminator
    current: Option<String>,
    pos: usize,
    poisoned: bool,
    line_no: usize,
}

impl<'a> InputStream<Cursor<&'a [u8]>> {
    /// Stream over in-memory text
    pub fn from_str(text: &'a str) -> Self {
        Self::new(Cursor::new(text.as_bytes()))
    }
}

impl<R: BufRead> InputStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: None,
            pos: 0,
            poisoned: false,
            line_no: 0,
        }
    }

    /// Line number of the most recently loaded line (1-based)
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Whether a malformed token has ended the readable input
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Load the next physical line. `Ok(false)` at end of input.
    fn load_line(&mut self) -> Result<bool> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            self.current = None;
            return Ok(false);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        self.line_no += 1;
        self.current = Some(buf);
        self.pos = 0;
        Ok(true)
    }

    /// Advance past whitespace, loading lines as needed.
    ///
    /// Returns `Ok(false)` when the input holds no further token.
    fn skip_whitespace(&mut self) -> Result<bool> {
        if self.poisoned {
            return Ok(false);
        }
        loop {
            if let Some(line) = &self.current {
                let rest = &line[self.pos..];
                let trimmed = rest.trim_start();
                self.pos += rest.len() - trimmed.len();
                if !trimmed.is_empty() {
                    return Ok(true);
                }
            }
            if !self.load_line()? {
                return Ok(false);
            }
        }
    }

    /// True while at least one more token can be read
    pub fn has_more(&mut self) -> Result<bool> {
        self.skip_whitespace()
    }

    /// Next whitespace-delimited token, left unconsumed
    pub fn peek_token(&mut self) -> Result<Option<&str>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let Some(line) = &self.current else {
            return Ok(None);
        };
        let rest = &line[self.pos..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        Ok(Some(&rest[..len]))
    }

    /// Next whitespace-delimited token
    pub fn next_token(&mut self) -> Result<Option<String>> {
        let token = self.peek_token()?.map(str::to_string);
        if let Some(token) = &token {
            self.pos += token.len();
        }
        Ok(token)
    }

    /// Whether the next token reads as a vertex count.
    ///
    /// Used between graphs: anything else after a complete graph is
    /// trailing text rather than the start of another graph.
    pub(crate) fn count_follows(&mut self) -> Result<bool> {
        Ok(self
            .peek_token()?
            .map_or(false, |token| token.parse::<usize>().is_ok()))
    }

    /// Next token parsed as `T`.
    ///
    /// A token that does not parse poisons the stream and yields `None`,
    /// exactly like running out of input.
    pub fn next_value<T: FromStr>(&mut self) -> Result<Option<T>> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        match token.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                debug!(
                    "Malformed token {:?} on line {}, ignoring remaining input",
                    token, self.line_no
                );
                self.poisoned = true;
                self.current = None;
                Ok(None)
            }
        }
    }

    /// Remainder of the current line, or the next full line.
    ///
    /// `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        if self.poisoned {
            return Ok(None);
        }
        if let Some(line) = self.current.take() {
            return Ok(Some(line[self.pos..].to_string()));
        }
        if !self.load_line()? {
            return Ok(None);
        }
        Ok(self.current.take())
    }

    /// Discard the remainder of the current line
    pub fn skip_line(&mut self) {
        self.current = None;
    }

    /// Read the vertex count header and the label lines that follow it.
    ///
    /// Shared by both graph builders.
    pub(crate) fn read_header(&mut self, max: usize) -> Result<Vec<String>> {
        let token = self
            .next_token()?
            .ok_or_else(|| GraphError::parse("missing vertex count"))?;
        let size: usize = token
            .parse()
            .map_err(|_| GraphError::parse(format!("invalid vertex count {:?}", token)))?;
        if size > max {
            return Err(GraphError::CapacityExceeded {
                requested: size,
                max,
            });
        }
        self.skip_line();

        let mut labels = Vec::with_capacity(size);
        for i in 1..=size {
            let line = self.next_line()?.ok_or_else(|| {
                GraphError::parse(format!("expected {} labels, input ended after {}", size, i - 1))
            })?;
            labels.push(line);
        }
        Ok(labels)
    }
}
