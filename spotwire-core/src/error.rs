/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the SpotWire SBE decoder.
//!
//! Errors are split in two levels: [`DecodeError`] describes what went wrong
//! at a byte offset, and [`SpotError`] adds the template context once the
//! message header has been read.

use thiserror::Error;

/// Result type alias using [`SpotError`] as the error type.
pub type Result<T> = std::result::Result<T, SpotError>;

/// Top-level error type for all SpotWire operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpotError {
    /// Error raised before a template decoder was selected (header, dispatch).
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error raised inside a per-template decoder.
    #[error("template {template_id}: {source}")]
    Template {
        /// Template id of the message being decoded.
        template_id: u16,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// Invalid decoder configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl SpotError {
    /// Wraps a decode failure with the template it occurred in.
    #[must_use]
    pub const fn in_template(template_id: u16, source: DecodeError) -> Self {
        Self::Template {
            template_id,
            source,
        }
    }

    /// Returns the template id, if the failure happened inside a template decoder.
    #[must_use]
    pub const fn template_id(&self) -> Option<u16> {
        match self {
            Self::Template { template_id, .. } => Some(*template_id),
            Self::Decode(DecodeError::UnsupportedTemplate(id)) => Some(*id),
            _ => None,
        }
    }

    /// Returns the underlying decode error, if any.
    #[must_use]
    pub const fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(err) | Self::Template { source: err, .. } => Some(err),
            Self::Configuration(_) => None,
        }
    }
}

/// Errors that occur while decoding an SBE buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is shorter than the header or a declared field requires.
    #[error("truncated at offset {offset}: need {needed} bytes, have {available}")]
    Truncated {
        /// Byte offset of the read that failed.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Bytes left in the current block.
        available: usize,
    },

    /// Template id outside the known catalog.
    #[error("unsupported template id: {0}")]
    UnsupportedTemplate(u16),

    /// Repeating group dimensions are inconsistent with the buffer.
    #[error(
        "malformed group at offset {offset}: block_length={block_length}, count={count}: {reason}"
    )]
    MalformedGroup {
        /// Byte offset of the group dimension header.
        offset: usize,
        /// Declared element block length.
        block_length: u16,
        /// Declared element count.
        count: u32,
        /// Which consistency check failed.
        reason: String,
    },

    /// Declared block length is smaller than the known fields of the block.
    #[error("block at offset {offset} too short: declared {declared}, need at least {minimum}")]
    BlockLengthTooShort {
        /// Byte offset where the block starts.
        offset: usize,
        /// Declared block length.
        declared: usize,
        /// Width of the known fields.
        minimum: usize,
    },

    /// The decoded values could not be assembled into the domain record.
    #[error("mapping failure: {reason}")]
    MappingFailure {
        /// Description of the failure.
        reason: String,
    },

    /// Header schema id differs from the configured one.
    #[error("schema mismatch: expected {expected}, got {actual}")]
    SchemaMismatch {
        /// Configured schema id.
        expected: u16,
        /// Schema id found in the header.
        actual: u16,
    },

    /// Buffer exceeds the configured maximum size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Buffer size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

impl DecodeError {
    /// Creates a [`DecodeError::MappingFailure`].
    #[must_use]
    pub fn mapping(reason: impl Into<String>) -> Self {
        Self::MappingFailure {
            reason: reason.into(),
        }
    }

    /// Returns the byte offset the error refers to, when known.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Truncated { offset, .. }
            | Self::MalformedGroup { offset, .. }
            | Self::BlockLengthTooShort { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_display() {
        let err = DecodeError::Truncated {
            offset: 4,
            needed: 8,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "truncated at offset 4: need 8 bytes, have 2"
        );
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn test_spot_error_from_decode() {
        let err: SpotError = DecodeError::UnsupportedTemplate(999).into();
        assert!(matches!(
            err,
            SpotError::Decode(DecodeError::UnsupportedTemplate(999))
        ));
        assert_eq!(err.template_id(), Some(999));
    }

    #[test]
    fn test_template_error_context() {
        let err = SpotError::in_template(200, DecodeError::mapping("bad"));
        assert_eq!(err.template_id(), Some(200));
        assert_eq!(err.to_string(), "template 200: mapping failure: bad");
        assert_eq!(err.decode_error(), Some(&DecodeError::mapping("bad")));
    }

    #[test]
    fn test_configuration_error_has_no_template() {
        let err = SpotError::Configuration("max_group_entries must be > 0".into());
        assert_eq!(err.template_id(), None);
        assert!(err.decode_error().is_none());
    }
}
