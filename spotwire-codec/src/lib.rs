/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SpotWire Codec
//!
//! Primitive SBE codecs for the SpotWire decoder.
//!
//! This crate provides:
//! - **Cursor**: bounds-checked little-endian reads with block sub-cursors
//! - **Decimals**: mantissa/exponent conversion to text and exact decimals
//! - **Headers**: message header and group dimension header codecs
//! - **Groups**: bounded repeating group reader
//! - **Writer**: message builder for fixtures and tools

pub mod cursor;
pub mod decimal;
pub mod group;
pub mod header;
pub mod string;
pub mod time;
pub mod writer;

pub use cursor::Cursor;
pub use decimal::{FixedPointDecimal, NULL_MANTISSA, convert};
pub use group::{DEFAULT_MAX_GROUP_ENTRIES, GroupHeader, GroupReader};
pub use header::MessageHeader;
pub use string::decode_fixed_width;
pub use time::micros_to_millis;
pub use writer::MessageWriter;
