/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Timestamp conversion.

/// Converts a microsecond timestamp to milliseconds, truncating toward zero.
#[inline]
#[must_use]
pub const fn micros_to_millis(micros: i64) -> i64 {
    micros / 1000
}
