/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Byte cursor over an SBE buffer.
//!
//! The cursor reads little-endian primitives positionally and only moves
//! forward. A block cursor, obtained with [`Cursor::block`], covers exactly
//! the bytes of a declared block: the parent jumps past the whole block, so
//! any trailing bytes the reader does not know about are skipped.

use crate::string::decode_fixed_width;
use spotwire_core::error::DecodeError;
use tracing::debug;

/// Forward-only reader over an immutable byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    /// Whole input buffer; offsets are absolute.
    data: &'a [u8],
    /// Current position.
    offset: usize,
    /// Exclusive end of the readable region.
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the whole buffer.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            end: data.len(),
        }
    }

    /// Returns the absolute offset of the next byte.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the number of readable bytes left.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.end - self.offset
    }

    /// Returns true if no readable bytes are left.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.end
    }

    /// Consumes `len` bytes and returns them.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than `len` bytes remain.
    #[inline]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::Truncated {
                offset: self.offset,
                needed: len,
                available: self.remaining(),
            });
        }
        let bytes = &self.data[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    /// Advances past `len` bytes without reading them.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than `len` bytes remain.
    #[inline]
    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        self.take(len).map(|_| ())
    }

    #[inline]
    fn array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Reads a `u8`.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if the buffer is exhausted.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.array::<1>()?[0])
    }

    /// Reads an `i8`.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if the buffer is exhausted.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, DecodeError> {
        Ok(i8::from_le_bytes(self.array()?))
    }

    /// Reads a little-endian `u16`.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than 2 bytes remain.
    #[inline]
    pub fn u16_le(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.array()?))
    }

    /// Reads a little-endian `u32`.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than 4 bytes remain.
    #[inline]
    pub fn u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.array()?))
    }

    /// Reads a little-endian `i64`.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than 8 bytes remain.
    #[inline]
    pub fn i64_le(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.array()?))
    }

    /// Reads a little-endian `f32`.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than 4 bytes remain.
    #[inline]
    pub fn f32_le(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_le_bytes(self.array()?))
    }

    /// Reads a `BoolEnum` byte; only `1` is true.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if the buffer is exhausted.
    #[inline]
    pub fn bool(&mut self) -> Result<bool, DecodeError> {
        Ok(self.u8()? == 1)
    }

    /// Reads a fixed-width, zero-padded string.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than `width` bytes remain.
    pub fn fixed_string(&mut self, width: usize) -> Result<String, DecodeError> {
        self.take(width).map(decode_fixed_width)
    }

    /// Reads a `varString8`: a `u8` length followed by that many bytes.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if the declared length overruns the buffer.
    pub fn var_string8(&mut self) -> Result<String, DecodeError> {
        let len = usize::from(self.u8()?);
        self.take(len).map(decode_fixed_width)
    }

    /// Reads a `varString`: a little-endian `u16` length followed by that many bytes.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if the declared length overruns the buffer.
    pub fn var_data16(&mut self) -> Result<&'a [u8], DecodeError> {
        let len = usize::from(self.u16_le()?);
        self.take(len)
    }

    /// Opens a block of `declared` bytes whose known fields span `minimum` bytes.
    ///
    /// The returned cursor reads the block; `self` moves past all `declared`
    /// bytes, so bytes beyond `minimum` are never interpreted.
    ///
    /// # Errors
    /// Returns `DecodeError::BlockLengthTooShort` if `declared < minimum`, or
    /// `DecodeError::Truncated` if the block overruns the buffer.
    pub fn block(&mut self, declared: usize, minimum: usize) -> Result<Cursor<'a>, DecodeError> {
        if declared < minimum {
            return Err(DecodeError::BlockLengthTooShort {
                offset: self.offset,
                declared,
                minimum,
            });
        }
        let start = self.offset;
        self.skip(declared)?;
        if declared > minimum {
            debug!(
                offset = start,
                skipped = declared - minimum,
                "skipping block extension"
            );
        }
        Ok(Self {
            data: self.data,
            offset: start,
            end: start + declared,
        })
    }
}
