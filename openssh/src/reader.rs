//! Bounds-checked cursor over the SSH wire encoding.
//!
//! Strings are a 4-byte big-endian length followed by that many bytes. Every
//! read either returns the requested slice or fails with
//! [`KeyError::CorruptContainer`] naming the field; the cursor never moves
//! past the end of the buffer.

use crate::errors::KeyError;

#[derive(Debug, Clone)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Consumes `literal` if the unread input starts with it.
    pub(crate) fn read_literal(&mut self, literal: &[u8]) -> bool {
        if self.buf[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    pub(crate) fn read_bytes(&mut self, len: usize, what: &'static str) -> Result<&'a [u8], KeyError> {
        if len > self.remaining() {
            return Err(KeyError::CorruptContainer(what));
        }
        let out = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    fn read_array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], KeyError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, what)?);
        Ok(out)
    }

    pub(crate) fn read_u32_be(&mut self, what: &'static str) -> Result<u32, KeyError> {
        self.read_array(what).map(u32::from_be_bytes)
    }

    pub(crate) fn read_u32_le(&mut self, what: &'static str) -> Result<u32, KeyError> {
        self.read_array(what).map(u32::from_le_bytes)
    }

    /// Reads a length-prefixed string.
    pub(crate) fn read_string(&mut self, what: &'static str) -> Result<&'a [u8], KeyError> {
        let len = self.read_u32_be(what)?;
        let len = usize::try_from(len).map_err(|_| KeyError::CorruptContainer(what))?;
        self.read_bytes(len, what)
    }

    /// Everything not yet read.
    pub(crate) fn rest(self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Fails if any input is left unread.
    pub(crate) fn finish(self, what: &'static str) -> Result<(), KeyError> {
        if self.remaining() != 0 {
            return Err(KeyError::CorruptContainer(what));
        }
        Ok(())
    }
}
