/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Repeating group reader.
//!
//! A group starts with a `groupSizeEncoding` dimension header (`u16` element
//! block length, `u32` element count) followed by the elements. Each element
//! is a fixed block, possibly wider than the fields this reader knows,
//! followed by the element's var-length fields.

use crate::cursor::Cursor;
use bytes::BufMut;
use spotwire_core::error::DecodeError;
use spotwire_schema::{GROUP_HEADER_LENGTH, GroupDef};

/// Default upper bound on elements in a single group.
pub const DEFAULT_MAX_GROUP_ENTRIES: u32 = 1_000_000;

/// Group dimension header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupHeader {
    /// Declared block length of each element.
    pub block_length: u16,
    /// Number of elements.
    pub num_in_group: u32,
}

impl GroupHeader {
    /// Encoded header length in bytes.
    pub const LENGTH: usize = GROUP_HEADER_LENGTH;

    /// Reads a dimension header from the cursor.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than 6 bytes remain.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            block_length: cursor.u16_le()?,
            num_in_group: cursor.u32_le()?,
        })
    }

    /// Writes the dimension header in wire order.
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16_le(self.block_length);
        buf.put_u32_le(self.num_in_group);
    }
}

/// Reads repeating groups with a bound on the element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupReader {
    max_entries: u32,
}

impl Default for GroupReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GROUP_ENTRIES)
    }
}

impl GroupReader {
    /// Creates a reader that rejects groups with more than `max_entries` elements.
    #[must_use]
    pub const fn new(max_entries: u32) -> Self {
        Self { max_entries }
    }

    /// Returns the element count bound.
    #[must_use]
    pub const fn max_entries(&self) -> u32 {
        self.max_entries
    }

    /// Reads one repeating group.
    ///
    /// `element` is called once per element, in wire order, with a cursor
    /// over the element's fixed block and the outer cursor positioned at the
    /// element's var-length fields.
    ///
    /// # Errors
    /// Returns `DecodeError::MalformedGroup` if the dimensions are inconsistent
    /// with `group` or the buffer, `DecodeError::Truncated` if the header or an
    /// element overruns the buffer, or whatever `element` returns.
    pub fn read<'a, T, F>(
        &self,
        cursor: &mut Cursor<'a>,
        group: &GroupDef,
        mut element: F,
    ) -> Result<Vec<T>, DecodeError>
    where
        F: FnMut(&mut Cursor<'a>, &mut Cursor<'a>) -> Result<T, DecodeError>,
    {
        let offset = cursor.offset();
        let header = GroupHeader::decode(cursor)?;
        let malformed = |reason: String| DecodeError::MalformedGroup {
            offset,
            block_length: header.block_length,
            count: header.num_in_group,
            reason,
        };

        if header.num_in_group > self.max_entries {
            return Err(malformed(format!(
                "{}: count exceeds maximum {}",
                group.name, self.max_entries
            )));
        }
        let block_length = usize::from(header.block_length);
        if block_length < group.block_length {
            return Err(malformed(format!(
                "{}: element block shorter than {} known bytes",
                group.name, group.block_length
            )));
        }
        let count = header.num_in_group as usize;
        let fixed_bytes = count.saturating_mul(block_length);
        if fixed_bytes > cursor.remaining() {
            return Err(malformed(format!(
                "{}: {} element bytes exceed {} remaining",
                group.name,
                fixed_bytes,
                cursor.remaining()
            )));
        }

        let mut items = Vec::with_capacity(initial_capacity(count, block_length));
        for _ in 0..count {
            let mut block = cursor.block(block_length, group.block_length)?;
            items.push(element(&mut block, cursor)?);
        }
        Ok(items)
    }
}

/// Elements to reserve up front.
///
/// A non-zero element width bounds `count` by the bytes already checked to
/// be present. Zero-width elements carry only var fields, so nothing is
/// reserved for them and the vector grows as elements decode.
#[inline]
fn initial_capacity(count: usize, block_length: usize) -> usize {
    if block_length == 0 { 0 } else { count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::MessageWriter;

    const PAIRS: GroupDef = GroupDef {
        name: "pairs",
        block_length: 2,
    };

    fn read_pairs(reader: GroupReader, data: &[u8]) -> Result<Vec<(u8, u8)>, DecodeError> {
        let mut cursor = Cursor::new(data);
        reader.read(&mut cursor, &PAIRS, |block, _| Ok((block.u8()?, block.u8()?)))
    }

    #[test]
    fn test_read_in_order() {
        let mut writer = MessageWriter::new();
        writer.group_header(2, 3);
        writer.put_u8(1).put_u8(2).put_u8(3).put_u8(4).put_u8(5).put_u8(6);
        let items = read_pairs(GroupReader::default(), &writer.finish()).unwrap();
        assert_eq!(items, vec![(1, 2), (3, 4), (5, 6)]);
    }

    #[test]
    fn test_empty_group() {
        let mut writer = MessageWriter::new();
        writer.group_header(2, 0);
        let items = read_pairs(GroupReader::default(), &writer.finish()).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_element_extension_skipped() {
        let mut writer = MessageWriter::new();
        writer.group_header(4, 2);
        writer.put_u8(1).put_u8(2).pad(2);
        writer.put_u8(3).put_u8(4).pad(2);
        let items = read_pairs(GroupReader::default(), &writer.finish()).unwrap();
        assert_eq!(items, vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_var_fields_follow_each_element() {
        const NAMED: GroupDef = GroupDef {
            name: "named",
            block_length: 1,
        };
        let mut writer = MessageWriter::new();
        writer.group_header(1, 2);
        writer.put_u8(7).var_string8("BTC");
        writer.put_u8(8).var_string8("ETH");
        let data = writer.finish();
        let mut cursor = Cursor::new(&data);
        let items = GroupReader::default()
            .read(&mut cursor, &NAMED, |block, tail| {
                Ok((block.u8()?, tail.var_string8()?))
            })
            .unwrap();
        assert_eq!(items, vec![(7, "BTC".to_string()), (8, "ETH".to_string())]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_count_over_limit() {
        let mut writer = MessageWriter::new();
        writer.group_header(2, 3).pad(6);
        let err = read_pairs(GroupReader::new(2), &writer.finish()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedGroup {
                offset: 0,
                block_length: 2,
                count: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_count_exceeds_remaining() {
        let mut writer = MessageWriter::new();
        writer.group_header(2, 1000).pad(10);
        let err = read_pairs(GroupReader::default(), &writer.finish()).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedGroup { count: 1000, .. }));
    }

    #[test]
    fn test_element_block_too_short() {
        let mut writer = MessageWriter::new();
        writer.group_header(1, 1).pad(1);
        let err = read_pairs(GroupReader::default(), &writer.finish()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedGroup { block_length: 1, .. }
        ));
    }

    #[test]
    fn test_zero_width_elements_reserve_nothing() {
        assert_eq!(initial_capacity(1_000_000, 0), 0);
        assert_eq!(initial_capacity(3, 42), 3);
    }

    #[test]
    fn test_zero_width_count_not_backed_by_bytes() {
        const EMPTY: GroupDef = GroupDef {
            name: "responses",
            block_length: 0,
        };
        let mut writer = MessageWriter::new();
        writer.group_header(0, 1_000_000).var_data16(b"{}");
        let data = writer.finish();
        let mut cursor = Cursor::new(&data);
        let err = GroupReader::default()
            .read(&mut cursor, &EMPTY, |_, tail| Ok(tail.var_data16()?.len()))
            .unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { offset: 10, .. }));
    }

    #[test]
    fn test_truncated_header() {
        let err = read_pairs(GroupReader::default(), &[2, 0, 1]).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated { offset: 2, .. }));
    }
}
