/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! SBE message header.
//!
//! Every message starts with an 8-byte little-endian header:
//!
//! | offset | field        | type |
//! |--------|--------------|------|
//! | 0      | block_length | u16  |
//! | 2      | template_id  | u16  |
//! | 4      | schema_id    | u16  |
//! | 6      | version      | u16  |

use crate::cursor::Cursor;
use bytes::BufMut;
use spotwire_core::error::DecodeError;
use spotwire_schema::{MESSAGE_HEADER_LENGTH, TemplateId};

/// Decoded message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHeader {
    /// Declared length of the root block.
    pub block_length: u16,
    /// Template id of the message.
    pub template_id: u16,
    /// Schema id.
    pub schema_id: u16,
    /// Schema version the message was encoded with.
    pub version: u16,
}

impl MessageHeader {
    /// Encoded header length in bytes.
    pub const LENGTH: usize = MESSAGE_HEADER_LENGTH;

    /// Reads a header from the cursor.
    ///
    /// # Errors
    /// Returns `DecodeError::Truncated` if fewer than 8 bytes remain.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        let mut block = cursor.block(Self::LENGTH, Self::LENGTH)?;
        Ok(Self {
            block_length: block.u16_le()?,
            template_id: block.u16_le()?,
            schema_id: block.u16_le()?,
            version: block.u16_le()?,
        })
    }

    /// Writes the header in wire order.
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16_le(self.block_length);
        buf.put_u16_le(self.template_id);
        buf.put_u16_le(self.schema_id);
        buf.put_u16_le(self.version);
    }

    /// Resolves the template id against the catalog.
    #[inline]
    #[must_use]
    pub const fn template(&self) -> Option<TemplateId> {
        TemplateId::from_u16(self.template_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_decode() {
        let data = [18, 0, 200, 0, 3, 0, 1, 0, 0xFF];
        let mut cursor = Cursor::new(&data);
        let header = MessageHeader::decode(&mut cursor).unwrap();
        assert_eq!(
            header,
            MessageHeader {
                block_length: 18,
                template_id: 200,
                schema_id: 3,
                version: 1,
            }
        );
        assert_eq!(header.template(), Some(TemplateId::Depth));
        assert_eq!(cursor.offset(), 8);
    }

    #[test]
    fn test_decode_truncated() {
        let data = [18, 0, 200, 0, 3, 0, 1];
        let mut cursor = Cursor::new(&data);
        assert_eq!(
            MessageHeader::decode(&mut cursor).unwrap_err(),
            DecodeError::Truncated {
                offset: 0,
                needed: 8,
                available: 7
            }
        );
    }

    #[test]
    fn test_encode_matches_decode() {
        let header = MessageHeader {
            block_length: 63,
            template_id: 305,
            schema_id: 3,
            version: 1,
        };
        let mut buf = BytesMut::new();
        header.encode(&mut buf);
        assert_eq!(buf.len(), MessageHeader::LENGTH);
        assert_eq!(&buf[..4], &[63, 0, 0x31, 0x01]);
        let mut cursor = Cursor::new(&buf);
        assert_eq!(MessageHeader::decode(&mut cursor).unwrap(), header);
    }

    #[test]
    fn test_unknown_template() {
        let header = MessageHeader {
            block_length: 0,
            template_id: 999,
            schema_id: 3,
            version: 1,
        };
        assert_eq!(header.template(), None);
    }
}
