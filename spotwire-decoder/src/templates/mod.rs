/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Per-template decoders.
//!
//! Each decoder receives the message already split into its root block and
//! the bytes that follow it, reads fields positionally and builds the domain
//! record directly.

pub(crate) mod account;
pub(crate) mod market;
pub(crate) mod order;
pub(crate) mod ticker;

use spotwire_codec::{Cursor, GroupReader, convert, micros_to_millis};
use spotwire_core::DecodeError;

/// Width of the fixed-width decimal strings (`volume`, `quoteVolume`, ...).
pub(crate) const STR16: usize = 16;

/// A message past its header.
#[derive(Debug)]
pub(crate) struct Payload<'a> {
    /// Root block, limited to the declared block length.
    pub root: Cursor<'a>,
    /// Groups and var-length fields after the root block.
    pub body: Cursor<'a>,
    /// Group reader carrying the configured element bound.
    pub groups: GroupReader,
}

/// Reads a decimal mantissa and renders it with `exponent`.
#[inline]
pub(crate) fn decimal(cursor: &mut Cursor<'_>, exponent: i8) -> Result<String, DecodeError> {
    Ok(convert(cursor.i64_le()?, exponent))
}

/// Reads a microsecond timestamp as milliseconds.
#[inline]
pub(crate) fn timestamp(cursor: &mut Cursor<'_>) -> Result<i64, DecodeError> {
    Ok(micros_to_millis(cursor.i64_le()?))
}
