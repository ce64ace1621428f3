/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! SBE message writer.
//!
//! Builds little-endian SBE buffers field by field. The decoder never needs
//! it; it exists so fixtures, tools and replay harnesses can produce
//! messages in the exact wire layout.

use crate::group::GroupHeader;
use crate::header::MessageHeader;
use bytes::{BufMut, Bytes, BytesMut};
use spotwire_schema::{SCHEMA_ID, SCHEMA_VERSION, TemplateId};

/// Appends SBE fields to a growable buffer.
#[derive(Debug, Default)]
pub struct MessageWriter {
    buf: BytesMut,
}

impl MessageWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Creates an empty writer with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Initial buffer capacity in bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Writes a message header for `template` with the catalog schema id and version.
    ///
    /// # Arguments
    /// * `template` - Message template
    /// * `block_length` - Declared root block length
    pub fn header(&mut self, template: TemplateId, block_length: u16) -> &mut Self {
        self.raw_header(MessageHeader {
            block_length,
            template_id: template.as_u16(),
            schema_id: SCHEMA_ID,
            version: SCHEMA_VERSION,
        })
    }

    /// Writes an arbitrary message header.
    pub fn raw_header(&mut self, header: MessageHeader) -> &mut Self {
        header.encode(&mut self.buf);
        self
    }

    /// Writes a group dimension header.
    ///
    /// # Arguments
    /// * `block_length` - Declared element block length
    /// * `num_in_group` - Number of elements that follow
    pub fn group_header(&mut self, block_length: u16, num_in_group: u32) -> &mut Self {
        GroupHeader {
            block_length,
            num_in_group,
        }
        .encode(&mut self.buf);
        self
    }

    /// Writes a `u8`.
    #[inline]
    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.put_u8(value);
        self
    }

    /// Writes an `i8`.
    #[inline]
    pub fn put_i8(&mut self, value: i8) -> &mut Self {
        self.buf.put_i8(value);
        self
    }

    /// Writes a little-endian `u16`.
    #[inline]
    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.buf.put_u16_le(value);
        self
    }

    /// Writes a little-endian `u32`.
    #[inline]
    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.buf.put_u32_le(value);
        self
    }

    /// Writes a little-endian `i64`.
    #[inline]
    pub fn put_i64(&mut self, value: i64) -> &mut Self {
        self.buf.put_i64_le(value);
        self
    }

    /// Writes a little-endian `f32`.
    #[inline]
    pub fn put_f32(&mut self, value: f32) -> &mut Self {
        self.buf.put_f32_le(value);
        self
    }

    /// Writes a `BoolEnum` byte.
    #[inline]
    pub fn put_bool(&mut self, value: bool) -> &mut Self {
        self.put_u8(u8::from(value))
    }

    /// Writes a decimal mantissa; the exponent lives in a separate field.
    #[inline]
    pub fn decimal(&mut self, mantissa: i64) -> &mut Self {
        self.put_i64(mantissa)
    }

    /// Writes `value` zero-padded (or cut) to `width` bytes.
    pub fn fixed_string(&mut self, value: &str, width: usize) -> &mut Self {
        let bytes = value.as_bytes();
        let len = bytes.len().min(width);
        self.buf.put_slice(&bytes[..len]);
        self.buf.put_bytes(0, width - len);
        self
    }

    /// Writes a `varString8`; input longer than 255 bytes is cut.
    pub fn var_string8(&mut self, value: &str) -> &mut Self {
        let bytes = value.as_bytes();
        let len = bytes.len().min(usize::from(u8::MAX));
        self.buf.put_u8(len as u8);
        self.buf.put_slice(&bytes[..len]);
        self
    }

    /// Writes a `varString` (u16 length); input longer than 65535 bytes is cut.
    pub fn var_data16(&mut self, value: &[u8]) -> &mut Self {
        let len = value.len().min(usize::from(u16::MAX));
        self.buf.put_u16_le(len as u16);
        self.buf.put_slice(&value[..len]);
        self
    }

    /// Writes `len` zero bytes.
    pub fn pad(&mut self, len: usize) -> &mut Self {
        self.buf.put_bytes(0, len);
        self
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Takes the written bytes, leaving the writer empty.
    pub fn finish(&mut self) -> Bytes {
        self.buf.split().freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    #[test]
    fn test_header_uses_catalog_schema() {
        let mut writer = MessageWriter::new();
        writer.header(TemplateId::Depth, 10);
        let data = writer.finish();
        assert_eq!(&data[..], &[10, 0, 200, 0, 3, 0, 1, 0]);
    }

    #[test]
    fn test_primitives_little_endian() {
        let mut writer = MessageWriter::new();
        writer.put_u16(0x1234).put_i64(-2).put_bool(true);
        let data = writer.finish();
        let mut cursor = Cursor::new(&data);
        assert_eq!(cursor.u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.i64_le().unwrap(), -2);
        assert!(cursor.bool().unwrap());
    }

    #[test]
    fn test_fixed_string_padding() {
        let mut writer = MessageWriter::new();
        writer.fixed_string("1.5", 16).fixed_string("TOOLONG", 4);
        let data = writer.finish();
        assert_eq!(data.len(), 20);
        assert_eq!(&data[..4], b"1.5\0");
        assert_eq!(&data[16..], b"TOOL");
    }

    #[test]
    fn test_var_fields() {
        let mut writer = MessageWriter::new();
        writer.var_string8("BNB").var_data16(b"{}");
        let data = writer.finish();
        assert_eq!(&data[..], &[3, b'B', b'N', b'B', 2, 0, b'{', b'}']);
    }

    #[test]
    fn test_finish_resets() {
        let mut writer = MessageWriter::new();
        writer.pad(3);
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.finish().len(), 3);
        assert!(writer.is_empty());
    }
}
