//! Growable output buffer shared by every parsing stage.
//!
//! Growth goes through `try_reserve` so an allocation failure surfaces as
//! [`ParseError::Allocation`] instead of aborting. Capacity is requested in
//! chunks of at least [`Sink::CHUNK`] bytes so appends stay amortized.

use crate::error::ParseError;

#[derive(Debug, Default)]
pub struct Sink {
    buf: String,
}

impl Sink {
    /// Minimum number of bytes requested whenever the buffer has to grow.
    pub const CHUNK: usize = 4096;

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink with room for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Result<Self, ParseError> {
        let mut sink = Self::new();
        sink.reserve(capacity)?;
        Ok(sink)
    }

    /// Appends `s` verbatim.
    pub fn push_str(&mut self, s: &str) -> Result<(), ParseError> {
        self.reserve(s.len())?;
        self.buf.push_str(s);
        Ok(())
    }

    /// Appends `s` with `<` and `>` replaced by their entities.
    ///
    /// Nothing else is escaped: `&` and quotes pass through so entities
    /// already written by the author survive.
    pub fn push_escaped(&mut self, s: &str) -> Result<(), ParseError> {
        let mut rest = s;
        while let Some(i) = rest.find(['<', '>']) {
            self.push_str(&rest[..i])?;
            let entity = if rest.as_bytes()[i] == b'<' {
                "&lt;"
            } else {
                "&gt;"
            };
            self.push_str(entity)?;
            rest = &rest[i + 1..];
        }
        self.push_str(rest)
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn reserve(&mut self, additional: usize) -> Result<(), ParseError> {
        if self.buf.capacity() - self.buf.len() >= additional {
            return Ok(());
        }
        let grow = additional.max(Self::CHUNK).max(self.buf.len());
        self.buf.try_reserve(grow)?;
        Ok(())
    }
}
